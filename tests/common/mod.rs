//! Gemeinsame Test-Helfer: Stub-Backend und Zeichen-Hilfen.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;
use reverse_desmos::{
    AppController, AppIntent, AppState, FitClient, FitError, FitRequest, FitResponse,
};

/// Aufgezeichnete Requests eines `StubClient` (geteilt mit dem Test).
pub type RequestLog = Rc<RefCell<Vec<FitRequest>>>;

/// Fit-Client mit fest vorgegebener Antwort.
pub struct StubClient {
    reply: Result<FitResponse, FitError>,
    requests: RequestLog,
}

impl StubClient {
    pub fn ok(response: FitResponse) -> Self {
        Self::with_reply(Ok(response))
    }

    pub fn failing(error: FitError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<FitResponse, FitError>) -> Self {
        Self {
            reply,
            requests: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handle auf das Request-Log (bleibt gültig, wenn der Client in den Controller wandert).
    pub fn request_log(&self) -> RequestLog {
        Rc::clone(&self.requests)
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<FitRequest> {
        self.requests.borrow().last().cloned()
    }
}

impl FitClient for StubClient {
    fn predict(&self, request: &FitRequest) -> Result<FitResponse, FitError> {
        self.requests.borrow_mut().push(request.clone());
        self.reply.clone()
    }

    fn endpoint(&self) -> &str {
        "stub://predict"
    }
}

/// Antwort für eine Parabel `y = x^2` über [-2, 2].
pub fn parabola_response() -> FitResponse {
    let fitted_x: Vec<f64> = (0..=8).map(|i| -2.0 + i as f64 * 0.5).collect();
    let fitted_y = fitted_x.iter().map(|x| x * x).collect();
    FitResponse {
        equation: "y = x^2".to_string(),
        function_type: Some("polynomial".to_string()),
        fitted_x,
        fitted_y,
    }
}

/// Zeichnet einen Stroke über Intents (Start, Verlängerungen, Ende).
pub fn draw_stroke(controller: &mut AppController, state: &mut AppState, samples: &[DVec2]) {
    let Some((first, rest)) = samples.split_first() else {
        return;
    };
    controller
        .handle_intent(state, AppIntent::StrokeStarted { pos: *first })
        .expect("StrokeStarted sollte funktionieren");
    for &pos in rest {
        controller
            .handle_intent(state, AppIntent::StrokeExtended { pos })
            .expect("StrokeExtended sollte funktionieren");
    }
    controller
        .handle_intent(state, AppIntent::StrokeFinished)
        .expect("StrokeFinished sollte funktionieren");
}

/// `count` Samples entlang einer Parabel, jeweils 10 px auseinander.
pub fn parabola_samples(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = 50.0 + i as f64 * 10.0;
            let t = (x - 300.0) / 100.0;
            DVec2::new(x, 380.0 - 40.0 * t * t)
        })
        .collect()
}
