//! Runtime settings from JS: tuning, view gating, reset

use wasm_bindgen::prelude::*;
use crate::config::GestureConfig;
use crate::error::GestureError;
use super::hand_landmarks::with_session;

/// Apply a (possibly partial) JSON config, e.g. `{"decay": 0.9}`.
/// A rejected config leaves the previous one in place.
#[wasm_bindgen]
pub fn configure_gestures(json: &str) -> Result<(), JsValue> {
    apply_config(json)?;
    Ok(())
}

/// Current config as JSON
#[wasm_bindgen]
pub fn gesture_config() -> String {
    with_session(|session| session.smoother.config().to_json())
}

/// Gestures only drive the scene in the main view; JS turns tracking off
/// while the photo focus or album views are open.
#[wasm_bindgen]
pub fn set_tracking_enabled(enabled: bool) {
    with_session(|session| session.set_enabled(enabled));
}

/// Zero the rotation and clear explode/twinkle (new recording, shape change)
#[wasm_bindgen]
pub fn reset_scene() {
    with_session(|session| session.reset());
    console_log!("Gesture scene reset");
}

pub(crate) fn apply_config(json: &str) -> Result<(), GestureError> {
    let config = GestureConfig::from_json(json).map_err(|err| {
        console_warn!("Gesture config rejected: {}", err);
        err
    })?;
    with_session(|session| session.smoother.set_config(config));
    console_log!("Gesture config applied");
    Ok(())
}
