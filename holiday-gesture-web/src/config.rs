//! Gesture tuning parameters
//!
//! Defaults reproduce the stock feel of the tree scene. The host may
//! override any subset through `configure_gestures` with a JSON object.

use serde::{Deserialize, Serialize};
use crate::error::GestureError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Weight of the raw hand signal on Open_Palm frames (0.1 ≈ 10-frame time constant)
    pub palm_blend: f32,
    /// Per-frame multiplier applied when there is no actionable signal
    pub decay: f32,
    /// |rotation| below this counts as at rest (auto-rotate may resume)
    pub rest_epsilon: f32,
    /// Constant yaw speed of the scene, radians per second
    pub spin_base: f32,
    /// Extra yaw per frame per unit of smoothed rotation
    pub spin_gain: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            palm_blend: 0.1,
            decay: 0.95,
            rest_epsilon: 1e-4,
            spin_base: 0.05,
            spin_gain: 0.05,
        }
    }
}

impl GestureConfig {
    /// Parse a (possibly partial) JSON object and validate it
    pub fn from_json(json: &str) -> Result<Self, GestureError> {
        let config: GestureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), GestureError> {
        let fields = [
            ("palm_blend", self.palm_blend),
            ("decay", self.decay),
            ("rest_epsilon", self.rest_epsilon),
            ("spin_base", self.spin_base),
            ("spin_gain", self.spin_gain),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GestureError::InvalidConfig(format!("{} must be finite", name)));
        }

        // Blend of 0 would ignore the hand entirely; >1 overshoots the raw signal
        if self.palm_blend <= 0.0 || self.palm_blend > 1.0 {
            return Err(GestureError::InvalidConfig(format!(
                "palm_blend must be in (0, 1], got {}",
                self.palm_blend
            )));
        }
        if self.decay < 0.0 || self.decay >= 1.0 {
            return Err(GestureError::InvalidConfig(format!(
                "decay must be in [0, 1), got {}",
                self.decay
            )));
        }
        if self.rest_epsilon < 0.0 {
            return Err(GestureError::InvalidConfig(format!(
                "rest_epsilon must be >= 0, got {}",
                self.rest_epsilon
            )));
        }
        Ok(())
    }
}
