use std::io::Write;
use std::time::Duration;

use mockito::{Matcher, Server};
use reverse_desmos::{FitClient, FitError, FitRequest, HttpFitClient};
use serde_json::json;

fn sample_request() -> FitRequest {
    let x: Vec<f64> = (0..12).map(|i| i as f64).collect();
    let y = x.iter().map(|v| v * v).collect();
    FitRequest { x, y }
}

fn client_for(server: &Server) -> HttpFitClient {
    HttpFitClient::new(&server.url(), Duration::from_secs(5))
}

#[test]
fn test_predict_posts_points_as_json() {
    let mut server = Server::new();
    let request = sample_request();
    let mock = server
        .mock("POST", "/predict")
        .match_header("content-type", Matcher::Regex("application/json".to_string()))
        .match_body(Matcher::Json(json!({ "x": request.x, "y": request.y })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "equation": "y = x^2",
                "function_type": "polynomial",
                "fitted_x": [0.0, 1.0, 2.0],
                "fitted_y": [0.0, 1.0, 4.0]
            })
            .to_string(),
        )
        .create();

    let response = client_for(&server)
        .predict(&request)
        .expect("Request sollte gelingen");

    mock.assert();
    assert_eq!(response.equation, "y = x^2");
    assert_eq!(response.function_type.as_deref(), Some("polynomial"));
    assert_eq!(response.fitted_x, vec![0.0, 1.0, 2.0]);
    assert_eq!(response.fitted_y, vec![0.0, 1.0, 4.0]);
}

#[test]
fn test_predict_without_function_type_is_accepted() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body(r#"{"equation":"y = 2x + 1","fitted_x":[0,1],"fitted_y":[1,3]}"#)
        .create();

    let response = client_for(&server)
        .predict(&sample_request())
        .expect("Request sollte gelingen");

    assert_eq!(response.equation, "y = 2x + 1");
    assert_eq!(response.function_type, None);
}

#[test]
fn test_server_error_keeps_status_and_raw_body() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/predict")
        .with_status(500)
        .with_body("internal error")
        .create();

    let error = client_for(&server)
        .predict(&sample_request())
        .expect_err("Status 500 sollte fehlschlagen");

    assert_eq!(
        error,
        FitError::Backend {
            status: 500,
            body: "internal error".to_string(),
        }
    );
    assert_eq!(error.to_string(), "Backend error (500): internal error");
}

#[test]
fn test_unreadable_error_body_is_contact_error() {
    let mut server = Server::new();
    // Größer als das Lese-Limit des Clients (10 MiB)
    let oversized = "x".repeat(11 * 1024 * 1024);
    let _mock = server
        .mock("POST", "/predict")
        .with_status(500)
        .with_body(oversized)
        .create();

    let error = client_for(&server)
        .predict(&sample_request())
        .expect_err("Nicht lesbarer Body sollte fehlschlagen");

    assert!(
        matches!(error, FitError::Contact(ref msg) if msg.contains("status 500")),
        "unerwarteter Fehler: {error:?}"
    );
}

#[test]
fn test_non_200_success_status_is_backend_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/predict")
        .with_status(202)
        .with_body("accepted")
        .create();

    let error = client_for(&server)
        .predict(&sample_request())
        .expect_err("Status 202 sollte fehlschlagen");

    assert_eq!(
        error,
        FitError::Backend {
            status: 202,
            body: "accepted".to_string(),
        }
    );
}

#[test]
fn test_invalid_json_body_is_contact_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create();

    let error = client_for(&server)
        .predict(&sample_request())
        .expect_err("Ungültiges JSON sollte fehlschlagen");

    assert!(matches!(error, FitError::Contact(_)));
}

#[test]
fn test_missing_fields_are_malformed_response() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body(r#"{"equation":"y = x"}"#)
        .create();

    let error = client_for(&server)
        .predict(&sample_request())
        .expect_err("Fehlende Felder sollten fehlschlagen");

    assert!(matches!(error, FitError::MalformedResponse(_)));
}

#[test]
fn test_unreachable_backend_is_contact_error() {
    // Port 1 ist lokal praktisch nie belegt
    let client = HttpFitClient::new("http://127.0.0.1:1", Duration::from_secs(2));

    let error = client
        .predict(&sample_request())
        .expect_err("Verbindung sollte fehlschlagen");

    assert!(matches!(error, FitError::Contact(_)));
    assert!(error.to_string().starts_with("Error contacting backend: "));
}

#[test]
fn test_slow_backend_hits_timeout() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_millis(1500));
            w.write_all(br#"{"equation":"y = x","fitted_x":[],"fitted_y":[]}"#)
        })
        .create();
    let client = HttpFitClient::new(&server.url(), Duration::from_millis(300));

    let error = client
        .predict(&sample_request())
        .expect_err("Timeout sollte greifen");

    assert!(matches!(error, FitError::Contact(_)));
}

#[test]
fn test_endpoint_appends_predict_path() {
    let client = HttpFitClient::new("https://example.org/api/", Duration::from_secs(1));

    assert_eq!(client.endpoint(), "https://example.org/api/predict");
}
