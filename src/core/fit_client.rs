//! HTTP-Client fuer das externe Fit-Backend.
//!
//! Ein Request pro Analyse, synchron mit festem Timeout. Keine Retries,
//! kein Caching, keine Authentifizierung.

use std::time::Duration;

use super::fit::{FitRequest, FitResponse};

/// Pfad des Vorhersage-Endpunkts relativ zur Backend-URL.
pub const PREDICT_PATH: &str = "/predict";

/// Fehler bei der Kommunikation mit dem Fit-Backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Backend antwortet mit Status != 200; `body` ist der rohe Antworttext.
    #[error("Backend error ({status}): {body}")]
    Backend { status: u16, body: String },
    /// Netzwerk-, Timeout- oder Lesefehler.
    #[error("Error contacting backend: {0}")]
    Contact(String),
    /// Status 200, aber die Antwort enthaelt nicht die erwarteten Felder.
    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),
}

/// Schnittstelle zum Fit-Backend (austauschbar fuer Tests und Umgebungen).
pub trait FitClient {
    /// Sendet die Punkte und liefert die validierte Antwort.
    fn predict(&self, request: &FitRequest) -> Result<FitResponse, FitError>;

    /// Ziel-Endpunkt fuer Statusanzeige und Logging.
    fn endpoint(&self) -> &str;
}

/// Haengt `/predict` an die Basis-URL (abschliessende Slashes werden toleriert).
pub fn predict_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH)
}

/// Blockierender HTTP-Client auf Basis eines `ureq::Agent`.
pub struct HttpFitClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpFitClient {
    /// Erstellt einen Client fuer `<base_url>/predict` mit Gesamt-Timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            endpoint: predict_endpoint(base_url),
        }
    }
}

impl FitClient for HttpFitClient {
    fn predict(&self, request: &FitRequest) -> Result<FitResponse, FitError> {
        log::info!("Sende {} Punkte an {}", request.len(), self.endpoint);

        let response = match self.agent.post(&self.endpoint).send_json(request) {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().map_err(|e| {
                    FitError::Contact(format!("unreadable response body (status {status}): {e}"))
                })?;
                return Err(FitError::Backend { status, body });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(FitError::Contact(transport.to_string()));
            }
        };

        let status = response.status();
        let body = response
            .into_string()
            .map_err(|e| FitError::Contact(e.to_string()))?;

        // ureq meldet nur 4xx/5xx als Fehler; alles ausser 200 gilt als Backend-Fehler
        if status != 200 {
            return Err(FitError::Backend { status, body });
        }

        FitResponse::from_json_body(&body)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
