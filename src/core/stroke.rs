//! Stroke-Punkte und die daraus gesammelte Punktfolge.

use glam::DVec2;

use super::fit::FitRequest;

/// Ein einzelner Stroke-Punkt in Canvas-Pixelkoordinaten (y zeigt nach unten).
pub type StrokePoint = DVec2;

/// Mindestanzahl an Punkten, ab der ein Fit angefragt wird (strikt mehr als 10).
pub const MIN_STROKE_POINTS: usize = 11;

/// Geordnete Punktfolge aller gezeichneten Pfade.
///
/// Die Reihenfolge innerhalb eines Strokes entspricht der Zeichenreihenfolge.
/// Wird pro Analyse neu aufgebaut und danach verworfen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeCollection {
    points: Vec<StrokePoint>,
}

impl StrokeCollection {
    /// Erstellt eine leere Punktfolge.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Haengt einen Punkt hinten an.
    pub fn push(&mut self, point: StrokePoint) {
        self.points.push(point);
    }

    /// Anzahl der gesammelten Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurueck, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    /// Alle x-Werte in Zeichenreihenfolge.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Alle y-Werte in Zeichenreihenfolge.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// `true`, wenn genug Punkte fuer eine Fit-Anfrage vorliegen.
    pub fn meets_minimum(&self) -> bool {
        self.points.len() >= MIN_STROKE_POINTS
    }

    /// Baut die parallelen x/y-Folgen fuer den Fit-Request (1:1).
    pub fn to_fit_request(&self) -> FitRequest {
        FitRequest {
            x: self.xs(),
            y: self.ys(),
        }
    }
}

impl FromIterator<StrokePoint> for StrokeCollection {
    fn from_iter<I: IntoIterator<Item = StrokePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<StrokePoint> for StrokeCollection {
    fn extend<I: IntoIterator<Item = StrokePoint>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}
