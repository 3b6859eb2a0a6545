//! Horizontal control signal from the index fingertip

use super::landmarks::{HandPose, INDEX_TIP};

/// Map the index fingertip's x to [-1, 1]: left edge -1, centre 0, right edge 1
pub fn extract_signal(pose: &HandPose) -> f32 {
    signal_from_x(pose.landmark(INDEX_TIP).x)
}

/// The model can place a fingertip slightly off-frame, so the result is clamped
pub fn signal_from_x(x: f32) -> f32 {
    ((x - 0.5) * 2.0).clamp(-1.0, 1.0)
}
