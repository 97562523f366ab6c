//! Fit-Request und Fit-Response des Vorhersage-Backends.

use serde::{Deserialize, Serialize};

use super::fit_client::FitError;

/// Request-Body: `{"x": [...], "y": [...]}` mit gleich langen Folgen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitRequest {
    /// x-Werte in Zeichenreihenfolge
    pub x: Vec<f64>,
    /// y-Werte in Zeichenreihenfolge
    pub y: Vec<f64>,
}

impl FitRequest {
    /// Anzahl der Punkte im Request.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Gibt `true` zurueck, wenn der Request keine Punkte enthaelt.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Validierte Antwort des Backends.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResponse {
    /// Gleichungstext, z.B. `y = x^2`
    pub equation: String,
    /// Optionale Funktionsklasse, z.B. `polynomial`
    pub function_type: Option<String>,
    /// x-Werte der gefitteten Kurve
    pub fitted_x: Vec<f64>,
    /// y-Werte der gefitteten Kurve
    pub fitted_y: Vec<f64>,
}

/// Roh-Antwort: alle Felder optional, Pruefung erst in `validate`.
#[derive(Debug, Deserialize)]
struct RawFitResponse {
    equation: Option<String>,
    function_type: Option<String>,
    fitted_x: Option<Vec<f64>>,
    fitted_y: Option<Vec<f64>>,
}

impl RawFitResponse {
    fn validate(self) -> Result<FitResponse, FitError> {
        let equation = self
            .equation
            .ok_or_else(|| FitError::MalformedResponse("missing field `equation`".into()))?;
        let fitted_x = self
            .fitted_x
            .ok_or_else(|| FitError::MalformedResponse("missing field `fitted_x`".into()))?;
        let fitted_y = self
            .fitted_y
            .ok_or_else(|| FitError::MalformedResponse("missing field `fitted_y`".into()))?;

        if fitted_x.len() != fitted_y.len() {
            return Err(FitError::MalformedResponse(format!(
                "fitted_x has {} values but fitted_y has {}",
                fitted_x.len(),
                fitted_y.len()
            )));
        }

        Ok(FitResponse {
            equation,
            function_type: self.function_type,
            fitted_x,
            fitted_y,
        })
    }
}

impl FitResponse {
    /// Parst und validiert einen Response-Body.
    ///
    /// Kein JSON → `Contact` (Parse-Fehler der Antwort),
    /// fehlende oder falsch typisierte Felder → `MalformedResponse`.
    pub fn from_json_body(body: &str) -> Result<Self, FitError> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| FitError::Contact(format!("invalid JSON in response: {e}")))?;
        let raw: RawFitResponse = serde_json::from_value(value)
            .map_err(|e| FitError::MalformedResponse(e.to_string()))?;
        raw.validate()
    }

    /// Punkte der gefitteten Kurve als Paare.
    pub fn fitted_points(&self) -> impl Iterator<Item = glam::DVec2> + '_ {
        self.fitted_x
            .iter()
            .zip(&self.fitted_y)
            .map(|(&x, &y)| glam::DVec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_as_x_and_y() {
        let request = FitRequest {
            x: vec![1.0, 2.0],
            y: vec![3.0, 4.5],
        };

        let json = serde_json::to_string(&request).expect("serialisierbar");

        assert_eq!(json, r#"{"x":[1.0,2.0],"y":[3.0,4.5]}"#);
    }

    #[test]
    fn test_valid_body_without_function_type() {
        let response = FitResponse::from_json_body(
            r#"{"equation": "y = x^2", "fitted_x": [0, 1, 2], "fitted_y": [0, 1, 4]}"#,
        )
        .expect("gueltige Antwort");

        assert_eq!(response.equation, "y = x^2");
        assert_eq!(response.function_type, None);
        assert_eq!(response.fitted_y, vec![0.0, 1.0, 4.0]);
    }

    #[test]
    fn test_missing_fitted_values_is_malformed() {
        let err = FitResponse::from_json_body(r#"{"equation": "y = x"}"#).unwrap_err();

        assert!(matches!(err, FitError::MalformedResponse(ref msg) if msg.contains("fitted_x")));
    }

    #[test]
    fn test_unequal_lengths_is_malformed() {
        let err = FitResponse::from_json_body(
            r#"{"equation": "y = x", "fitted_x": [0, 1], "fitted_y": [0]}"#,
        )
        .unwrap_err();

        assert!(matches!(err, FitError::MalformedResponse(_)));
    }

    #[test]
    fn test_wrongly_typed_field_is_malformed() {
        let err = FitResponse::from_json_body(
            r#"{"equation": 42, "fitted_x": [], "fitted_y": []}"#,
        )
        .unwrap_err();

        assert!(matches!(err, FitError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_json_body_is_contact_error() {
        let err = FitResponse::from_json_body("<html>bad gateway</html>").unwrap_err();

        assert!(matches!(err, FitError::Contact(_)));
    }
}
