use glam::DVec2;
use reverse_desmos::core::MIN_STROKE_POINTS;
use reverse_desmos::{analyze, extract_points, AnalyzeError, CanvasObject, CanvasPayload};

mod common;
use common::{parabola_response, StubClient};

fn load_fixture() -> CanvasPayload {
    let json = include_str!("fixtures/canvas_payload.json");
    CanvasPayload::from_json(json).expect("Fixture sollte parsen")
}

#[test]
fn test_fixture_extracts_path_points_in_command_order() {
    let payload = load_fixture();

    let points = extract_points(&payload);

    // 12 koordinatentragende Befehle, `Z` und das Rechteck liefern nichts
    assert_eq!(points.len(), 12);
    assert_eq!(points.points()[0], DVec2::new(10.0, 300.0));
    assert_eq!(points.points()[1], DVec2::new(40.0, 250.0));
    assert_eq!(points.points()[11], DVec2::new(340.0, 200.0));
}

#[test]
fn test_fixture_request_keeps_x_and_y_aligned() {
    let points = extract_points(&load_fixture());

    let request = points.to_fit_request();

    assert_eq!(request.x.len(), request.y.len());
    assert_eq!(request.x[0], 10.0);
    assert_eq!(request.y[0], 300.0);
    assert_eq!(request.x[10], 310.0);
    assert_eq!(request.y[10], 160.0);
}

#[test]
fn test_multiple_paths_are_concatenated() {
    let first: Vec<DVec2> = (0..6).map(|i| DVec2::new(i as f64, 0.0)).collect();
    let second: Vec<DVec2> = (0..6).map(|i| DVec2::new(i as f64, 10.0)).collect();
    let payload = CanvasPayload {
        objects: vec![
            CanvasObject::freehand(&first, 2.0, [0, 0, 0]),
            CanvasObject::freehand(&second, 2.0, [0, 0, 0]),
        ],
    };

    let points = extract_points(&payload);

    assert_eq!(points.len(), 12);
    assert_eq!(&points.points()[..6], first.as_slice());
    assert_eq!(&points.points()[6..], second.as_slice());
}

#[test]
fn test_exactly_ten_points_are_rejected_without_request() {
    let samples: Vec<DVec2> = (0..10).map(|i| DVec2::new(i as f64, i as f64)).collect();
    let payload = CanvasPayload {
        objects: vec![CanvasObject::freehand(&samples, 2.0, [0, 0, 0])],
    };
    let client = StubClient::ok(parabola_response());

    let result = analyze(Some(&payload), &client);

    assert_eq!(
        result,
        Err(AnalyzeError::InsufficientPoints {
            found: 10,
            required: MIN_STROKE_POINTS,
        })
    );
    assert_eq!(client.calls(), 0);
}

#[test]
fn test_eleven_points_issue_exactly_one_request() {
    let samples: Vec<DVec2> = (0..11).map(|i| DVec2::new(i as f64, i as f64)).collect();
    let payload = CanvasPayload {
        objects: vec![CanvasObject::freehand(&samples, 2.0, [0, 0, 0])],
    };
    let client = StubClient::ok(parabola_response());

    let result = analyze(Some(&payload), &client).expect("Analyse sollte gelingen");

    assert_eq!(client.calls(), 1);
    assert_eq!(result.points.len(), 11);
    assert_eq!(client.last_request().map(|r| r.x.len()), Some(11));
}

#[test]
fn test_missing_payload_reports_no_drawing() {
    let client = StubClient::ok(parabola_response());

    let result = analyze(None, &client);

    assert_eq!(result, Err(AnalyzeError::NoDrawing));
    assert_eq!(client.calls(), 0);
}

#[test]
fn test_payload_without_paths_reports_insufficient_points() {
    let payload = CanvasPayload::from_json(r#"{"objects":[{"type":"circle","radius":5}]}"#)
        .expect("Payload sollte parsen");
    let client = StubClient::ok(parabola_response());

    let result = analyze(Some(&payload), &client);

    assert!(matches!(
        result,
        Err(AnalyzeError::InsufficientPoints { found: 0, .. })
    ));
    assert_eq!(client.calls(), 0);
}
