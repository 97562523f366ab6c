#![no_main]

use libfuzzer_sys::fuzz_target;
use reverse_desmos::{extract_points, CanvasPayload};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(payload) = CanvasPayload::from_json(json) {
        let points = extract_points(&payload);
        let request = points.to_fit_request();
        assert_eq!(request.x.len(), request.y.len());
    }
});
