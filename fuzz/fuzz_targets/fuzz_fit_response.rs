#![no_main]

use libfuzzer_sys::fuzz_target;
use reverse_desmos::FitResponse;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(response) = FitResponse::from_json_body(body) {
        assert_eq!(response.fitted_x.len(), response.fitted_y.len());
    }
});
