//! Detector lifecycle - connects the JS-side hand landmark model with the session
//!
//! The model (MediaPipe HandLandmarker) is created asynchronously in JS.
//! JS reports the outcome here; a failed setup or denied camera turns
//! gesture control off for the rest of the session and the scene falls
//! back to mouse/touch.

use wasm_bindgen::prelude::*;
use crate::error::GestureError;
use super::hand_landmarks::with_session;

/// Called from JS once HandLandmarker.createFromOptions resolves
#[wasm_bindgen]
pub fn set_detector_ready() {
    let status = with_session(|session| {
        session.tracker.mark_ready();
        session.tracker.status()
    });
    console_log!("✅ Hand gesture detector {}", status.as_str());
}

/// Called from JS when model setup throws
#[wasm_bindgen]
pub fn set_detector_failed(reason: &str) {
    let err = GestureError::DetectorInit(reason.to_string());
    if with_session(|session| session.tracker.mark_unavailable()) {
        console_error!("❌ {}", err);
    }
}

/// Called from JS when getUserMedia is rejected
#[wasm_bindgen]
pub fn set_camera_unavailable(reason: &str) {
    if with_session(|session| session.tracker.mark_unavailable()) {
        console_warn!("Camera permission denied, gesture control off: {}", reason);
    }
}

#[wasm_bindgen]
pub fn is_detector_ready() -> bool {
    detector_status() == "ready"
}

/// "pending" | "ready" | "unavailable"
#[wasm_bindgen]
pub fn detector_status() -> String {
    with_session(|session| session.tracker.status().as_str().to_string())
}
