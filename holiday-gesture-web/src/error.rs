//! Error taxonomy for the gesture core
//!
//! Only configuration and detector setup surface errors to JS. Per-frame
//! problems (malformed pose, stale frame) resolve to "no result" instead.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GestureError {
    /// One-time hand-landmark model setup failed on the host side
    #[error("hand detection unavailable: {0}")]
    DetectorInit(String),

    #[error("malformed hand pose: {found} landmarks (expected {expected})")]
    MalformedPose { found: usize, expected: usize },

    #[error("landmark {index} has a non-finite coordinate")]
    NonFiniteLandmark { index: usize },

    #[error("invalid gesture config: {0}")]
    InvalidConfig(String),

    #[error("could not parse gesture config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl GestureError {
    /// True for errors that mean "this frame has no usable hand"
    pub fn is_malformed_pose(&self) -> bool {
        matches!(
            self,
            GestureError::MalformedPose { .. } | GestureError::NonFiniteLandmark { .. }
        )
    }
}

impl From<GestureError> for JsValue {
    fn from(err: GestureError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
