//! Plot-Szene fuer das Analyse-Ergebnis.
//!
//! Rein geometrisch: Datenbereich, Streupunkte, Fit-Linie, Nullachsen und
//! Achsenteilung. Die eigentliche Darstellung uebernimmt die UI.

use glam::DVec2;

use crate::core::AnalysisResult;

/// Relativer Rand um den Datenbereich.
const BOUNDS_PADDING: f64 = 0.05;
/// Angestrebte Anzahl Achsenteilungen pro Achse.
const TARGET_TICKS: usize = 6;

/// Achsenparalleler Datenbereich.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl PlotBounds {
    /// Bereich ueber alle endlichen Punkte, mit Rand.
    ///
    /// Leere Eingabe ergibt `[-1, 1]²`; Ausdehnung 0 wird um ±0.5 erweitert.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = DVec2>,
    {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        for p in points.into_iter().filter(|p| p.is_finite()) {
            min = min.min(p);
            max = max.max(p);
        }

        if !min.is_finite() || !max.is_finite() {
            return Self {
                min: DVec2::splat(-1.0),
                max: DVec2::splat(1.0),
            };
        }

        let mut span = max - min;
        if span.x <= 0.0 {
            min.x -= 0.5;
            max.x += 0.5;
            span.x = 1.0;
        }
        if span.y <= 0.0 {
            min.y -= 0.5;
            max.y += 0.5;
            span.y = 1.0;
        }

        let pad = span * BOUNDS_PADDING;
        Self {
            min: min - pad,
            max: max + pad,
        }
    }

    /// Ausdehnung des Bereichs.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Gibt `true` zurueck, wenn `value` im x-Bereich liegt.
    pub fn contains_x(&self, value: f64) -> bool {
        (self.min.x..=self.max.x).contains(&value)
    }

    /// Gibt `true` zurueck, wenn `value` im y-Bereich liegt.
    pub fn contains_y(&self, value: f64) -> bool {
        (self.min.y..=self.max.y).contains(&value)
    }

    /// Bildet einen Datenpunkt auf ein Screen-Rechteck ab (y-Achse nach oben).
    pub fn to_screen(&self, point: DVec2, rect_min: [f32; 2], rect_size: [f32; 2]) -> [f32; 2] {
        let t = (point - self.min) / self.size();
        [
            rect_min[0] + (t.x as f32) * rect_size[0],
            rect_min[1] + (1.0 - t.y as f32) * rect_size[1],
        ]
    }
}

/// Sichtbare Nullachsen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroAxes {
    /// Horizontale Linie y = 0
    pub horizontal: bool,
    /// Vertikale Linie x = 0
    pub vertical: bool,
}

/// Fertig aufbereitete Plot-Szene.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotScene {
    /// Datenbereich inkl. Rand
    pub bounds: PlotBounds,
    /// Gezeichnete Originalpunkte
    pub scatter: Vec<DVec2>,
    /// Fit-Kurve in Antwort-Reihenfolge
    pub fit_line: Vec<DVec2>,
    /// Nullachsen
    pub zero_axes: ZeroAxes,
    /// Teilungen der x-Achse
    pub x_ticks: Vec<f64>,
    /// Teilungen der y-Achse
    pub y_ticks: Vec<f64>,
    /// Gleichungstext
    pub equation: String,
    /// Beschriftung der Funktionsklasse
    pub caption: Option<String>,
}

/// Baut die Plot-Szene aus einem Analyse-Ergebnis.
pub fn build(result: &AnalysisResult, show_zero_axes: bool) -> PlotScene {
    let scatter: Vec<DVec2> = result.points.points().to_vec();
    let fit_line: Vec<DVec2> = result.response.fitted_points().collect();

    let bounds = PlotBounds::from_points(scatter.iter().chain(fit_line.iter()).copied());

    let zero_axes = if show_zero_axes {
        ZeroAxes {
            horizontal: bounds.contains_y(0.0),
            vertical: bounds.contains_x(0.0),
        }
    } else {
        ZeroAxes::default()
    };

    PlotScene {
        x_ticks: nice_ticks(bounds.min.x, bounds.max.x, TARGET_TICKS),
        y_ticks: nice_ticks(bounds.min.y, bounds.max.y, TARGET_TICKS),
        bounds,
        scatter,
        fit_line,
        zero_axes,
        equation: result.response.equation.clone(),
        caption: result
            .response
            .function_type
            .as_ref()
            .map(|t| format!("Function type: {t}")),
    }
}

/// Teilungen mit Schrittweite 1, 2 oder 5 × 10^k innerhalb `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return Vec::new();
    }

    let raw_step = span / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|f| f * magnitude)
        .find(|&s| s >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|i| {
            let v = i as f64 * step;
            // -0.0 vermeiden
            if v == 0.0 { 0.0 } else { v }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FitResponse, StrokeCollection};
    use approx::assert_relative_eq;

    fn result_with(points: &[(f64, f64)], fitted: &[(f64, f64)]) -> AnalysisResult {
        AnalysisResult {
            points: points.iter().map(|&(x, y)| DVec2::new(x, y)).collect::<StrokeCollection>(),
            response: FitResponse {
                equation: "y = x^2".into(),
                function_type: Some("polynomial".into()),
                fitted_x: fitted.iter().map(|p| p.0).collect(),
                fitted_y: fitted.iter().map(|p| p.1).collect(),
            },
        }
    }

    #[test]
    fn test_scene_contains_fit_line_in_order() {
        let result = result_with(&[(0.5, 0.2)], &[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);

        let scene = build(&result, true);

        assert_eq!(
            scene.fit_line,
            vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0), DVec2::new(2.0, 4.0)]
        );
        assert_eq!(scene.equation, "y = x^2");
        assert_eq!(scene.caption.as_deref(), Some("Function type: polynomial"));
    }

    #[test]
    fn test_bounds_cover_scatter_and_fit_with_padding() {
        let result = result_with(&[(10.0, 10.0), (20.0, 30.0)], &[(0.0, 0.0), (40.0, 50.0)]);

        let scene = build(&result, true);

        assert_relative_eq!(scene.bounds.min.x, -2.0);
        assert_relative_eq!(scene.bounds.max.x, 42.0);
        assert_relative_eq!(scene.bounds.min.y, -2.5);
        assert_relative_eq!(scene.bounds.max.y, 52.5);
        assert!(scene.zero_axes.horizontal && scene.zero_axes.vertical);
    }

    #[test]
    fn test_zero_axes_only_when_visible_and_enabled() {
        let result = result_with(&[(100.0, 100.0), (200.0, 150.0)], &[(120.0, 110.0)]);

        assert_eq!(build(&result, true).zero_axes, ZeroAxes::default());

        let near_zero = result_with(&[(-5.0, 1.0), (5.0, 9.0)], &[]);
        let scene = build(&near_zero, true);
        assert!(scene.zero_axes.vertical);
        assert!(!scene.zero_axes.horizontal);
        assert_eq!(build(&near_zero, false).zero_axes, ZeroAxes::default());
    }

    #[test]
    fn test_degenerate_bounds_are_widened() {
        let bounds = PlotBounds::from_points([DVec2::new(3.0, 3.0)]);

        assert!(bounds.size().x > 0.0 && bounds.size().y > 0.0);
        assert!(bounds.contains_x(3.0) && bounds.contains_y(3.0));
    }

    #[test]
    fn test_to_screen_flips_y() {
        let bounds = PlotBounds {
            min: DVec2::new(0.0, 0.0),
            max: DVec2::new(10.0, 10.0),
        };

        let top_right = bounds.to_screen(DVec2::new(10.0, 10.0), [0.0, 0.0], [100.0, 50.0]);
        let bottom_left = bounds.to_screen(DVec2::new(0.0, 0.0), [0.0, 0.0], [100.0, 50.0]);

        assert_relative_eq!(top_right[0], 100.0);
        assert_relative_eq!(top_right[1], 0.0);
        assert_relative_eq!(bottom_left[1], 50.0);
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(-3.0, 3.0, 3), vec![-2.0, 0.0, 2.0]);
        assert!(nice_ticks(1.0, 1.0, 5).is_empty());
    }
}
