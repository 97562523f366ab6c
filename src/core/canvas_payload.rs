//! Event-Payload der Zeichenflaeche und Punkt-Extraktion.
//!
//! Das Format ist JSON-kompatibel zum Drawable-Canvas:
//! `{"objects":[{"type":"path","path":[["M",x,y],["Q",cx,cy,x,y],...]}]}`.
//! Nur Objekte vom Typ `path` liefern Punkte; ein Pfad-Befehl liefert genau
//! dann einen Punkt, wenn er mindestens drei Elemente hat (Element 1 und 2
//! sind das Koordinatenpaar).

use anyhow::Context;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::stroke::{StrokeCollection, StrokePoint};

/// Objekt-Typ, der Koordinaten beitraegt.
pub const PATH_OBJECT_KIND: &str = "path";

/// RGB-Farbe (8 Bit pro Kanal).
pub type Rgb = [u8; 3];

/// Formatiert eine Farbe als `#rrggbb`.
pub fn rgb_to_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}

/// Parst `#rrggbb` (Gross-/Kleinschreibung egal). Andere Formen liefern `None`.
pub fn rgb_from_hex(text: &str) -> Option<Rgb> {
    let hex = text.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Ein einzelner Pfad-Befehl, z.B. `["M", 10.0, 20.0]` oder `["Z"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathCommand(pub Vec<Value>);

impl PathCommand {
    /// Baut einen Befehl aus Kennbuchstabe und Koordinaten.
    pub fn new(op: &str, coords: &[f64]) -> Self {
        let mut values = Vec::with_capacity(coords.len() + 1);
        values.push(Value::from(op));
        values.extend(coords.iter().map(|&c| Value::from(c)));
        Self(values)
    }

    /// Kennbuchstabe des Befehls (erstes Element), falls vorhanden.
    pub fn op(&self) -> Option<&str> {
        self.0.first().and_then(Value::as_str)
    }

    /// Koordinatenpaar aus Element 1 und 2.
    ///
    /// `None` bei weniger als drei Elementen oder nicht-numerischen Werten.
    pub fn coordinate(&self) -> Option<StrokePoint> {
        if self.0.len() < 3 {
            return None;
        }
        let x = self.0[1].as_f64()?;
        let y = self.0[2].as_f64()?;
        Some(DVec2::new(x, y))
    }
}

/// Ein gezeichnetes Objekt der Zeichenflaeche.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasObject {
    /// Objekt-Typ (`path`, `rect`, `circle`, ...)
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Pfad-Befehle (leer bei Nicht-Pfad-Objekten)
    #[serde(default)]
    pub path: Vec<PathCommand>,
    /// Linienfarbe als `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// Linienbreite in Pixeln
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

impl CanvasObject {
    /// Baut ein Freihand-Pfadobjekt aus rohen Samples.
    ///
    /// Aufbau wie beim Freihand-Pinsel des Canvas: `M p0`, pro Sample ein
    /// `Q p_i mid(p_i, p_i+1)`, abschliessend `L p_last`. Die Extraktion
    /// liefert dadurch wieder genau die Samples in Zeichenreihenfolge.
    pub fn freehand(samples: &[StrokePoint], width: f64, color: Rgb) -> Self {
        let mut path = Vec::with_capacity(samples.len() + 1);

        if let Some((first, rest)) = samples.split_first() {
            path.push(PathCommand::new("M", &[first.x, first.y]));
            if rest.is_empty() {
                path.push(PathCommand::new("L", &[first.x, first.y]));
            } else {
                for pair in samples[1..].windows(2) {
                    let control = pair[0];
                    let mid = (pair[0] + pair[1]) * 0.5;
                    path.push(PathCommand::new("Q", &[control.x, control.y, mid.x, mid.y]));
                }
                let last = samples[samples.len() - 1];
                path.push(PathCommand::new("L", &[last.x, last.y]));
            }
        }

        Self {
            kind: PATH_OBJECT_KIND.to_string(),
            path,
            stroke: Some(rgb_to_hex(color)),
            stroke_width: Some(width),
        }
    }

    /// `true` fuer Objekte vom Typ `path`.
    pub fn is_path(&self) -> bool {
        self.kind == PATH_OBJECT_KIND
    }

    /// Koordinaten-tragende Punkte des Objekts in Befehlsreihenfolge.
    ///
    /// Nicht-Pfad-Objekte liefern nichts.
    pub fn points(&self) -> impl Iterator<Item = StrokePoint> + '_ {
        let commands: &[PathCommand] = if self.is_path() { &self.path } else { &[] };
        commands.iter().filter_map(PathCommand::coordinate)
    }

    /// Linienfarbe des Objekts (Fallback Schwarz).
    pub fn stroke_rgb(&self) -> Rgb {
        self.stroke
            .as_deref()
            .and_then(rgb_from_hex)
            .unwrap_or([0, 0, 0])
    }
}

/// Strukturierter Payload aller gezeichneten Objekte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasPayload {
    /// Objekte in Zeichenreihenfolge
    #[serde(default)]
    pub objects: Vec<CanvasObject>,
}

impl CanvasPayload {
    /// Parst einen Payload aus JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Canvas-Payload ist kein gueltiges JSON")
    }

    /// Serialisiert den Payload als eingerucktes JSON.
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Canvas-Payload nicht serialisierbar")
    }

    /// Anzahl der Pfad-Objekte.
    pub fn path_count(&self) -> usize {
        self.objects.iter().filter(|o| o.is_path()).count()
    }
}

/// Sammelt die Punkte aller Pfad-Objekte in Reihenfolge.
pub fn extract_points(payload: &CanvasPayload) -> StrokeCollection {
    let points: StrokeCollection = payload.objects.iter().flat_map(CanvasObject::points).collect();
    log::debug!(
        "{} Punkte aus {} Pfad-Objekten extrahiert",
        points.len(),
        payload.path_count()
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload_from(value: Value) -> CanvasPayload {
        serde_json::from_value(value).expect("Payload sollte parsen")
    }

    #[test]
    fn test_close_path_command_contributes_nothing() {
        let payload = payload_from(json!({
            "objects": [{"type": "path", "path": [["Z"], ["L", 12.0, 34.0]]}]
        }));

        let points = extract_points(&payload);

        assert_eq!(points.points(), &[DVec2::new(12.0, 34.0)]);
    }

    #[test]
    fn test_non_path_objects_are_ignored() {
        let payload = payload_from(json!({
            "objects": [
                {"type": "rect", "path": [["M", 1.0, 2.0]]},
                {"type": "path", "path": [["M", 3.0, 4.0], ["Q", 5.0, 6.0, 7.0, 8.0]]}
            ]
        }));

        let points = extract_points(&payload);

        assert_eq!(
            points.points(),
            &[DVec2::new(3.0, 4.0), DVec2::new(5.0, 6.0)]
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let payload = payload_from(json!({"objects": [{"type": "path"}, {}]}));

        assert!(extract_points(&payload).is_empty());
        assert!(payload_from(json!({})).objects.is_empty());
    }

    #[test]
    fn test_non_numeric_coordinates_are_skipped() {
        let command = PathCommand(vec![json!("L"), json!("a"), json!(3.0)]);
        assert_eq!(command.coordinate(), None);
    }

    #[test]
    fn test_freehand_object_extracts_raw_samples() {
        let samples = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(4.0, 4.0),
            DVec2::new(6.0, 9.0),
        ];
        let object = CanvasObject::freehand(&samples, 2.0, [0, 0, 0]);

        assert_eq!(object.path.first().and_then(PathCommand::op), Some("M"));
        assert_eq!(object.path.last().and_then(PathCommand::op), Some("L"));
        assert_eq!(object.points().collect::<Vec<_>>(), samples);
    }

    #[test]
    fn test_freehand_single_sample_is_a_dot() {
        let object = CanvasObject::freehand(&[DVec2::new(5.0, 5.0)], 3.0, [255, 0, 0]);

        assert_eq!(object.path.len(), 2);
        assert_eq!(object.stroke.as_deref(), Some("#ff0000"));
        assert_eq!(object.stroke_width, Some(3.0));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(rgb_from_hex("#1A2b3C"), Some([0x1a, 0x2b, 0x3c]));
        assert_eq!(rgb_from_hex("1a2b3c"), None);
        assert_eq!(rgb_from_hex("#12345"), None);
        assert_eq!(rgb_to_hex([0, 128, 255]), "#0080ff");
    }
}
