//! Simulated backend tests (run with wasm-pack test --headless)

#![cfg(target_arch = "wasm32")]

use openvote_common::{SubmissionRequest, SubmissionStatus, PLACEHOLDER_ANCHOR_HASH};
use openvote_web::backend::{SimulatedBackend, SubmissionBackend};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// The stub backend never fails and always returns the fixed receipt.
#[wasm_bindgen_test]
async fn test_simulated_submit_always_succeeds() {
    let request = SubmissionRequest {
        polling_station: "001A".to_string(),
        county: "Nairobi".to_string(),
        constituency: "Westlands".to_string(),
        ward: "Parklands".to_string(),
        notes: String::new(),
        image_name: "form34a.jpg".to_string(),
        gps: None,
    };

    let receipt = SimulatedBackend::new().submit(&request).await;
    assert_eq!(receipt.anchor_hash, PLACEHOLDER_ANCHOR_HASH);
    assert_eq!(receipt.status, SubmissionStatus::Verified);
}
