//! Gesture smoothing and decay
//!
//! Turns the per-frame gesture stream into the scene's display state:
//! a smoothed rotation value plus the explode and twinkle flags.
//!
//! | gesture      | exploded | twinkling | rotation                          |
//! |--------------|----------|-----------|-----------------------------------|
//! | Closed_Fist  | true     | false     | unchanged                         |
//! | Open_Palm    | false    | false     | r·(1-blend) + signal·blend (EMA)  |
//! | Victory      | false    | true      | r·decay                           |
//! | None / none  | -        | -         | r·decay                           |
//!
//! Rotation only ever shrinks or blends toward a signal in [-1, 1], so it
//! stays bounded and relaxes to zero without Open_Palm input.

use crate::classifier::Gesture;
use crate::config::GestureConfig;
use super::tracker::Detection;

/// Display state handed to the renderer each frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneState {
    /// Smoothed horizontal hand signal driving scene yaw
    pub rotation: f32,
    pub exploded: bool,
    pub twinkling: bool,
}

/// Exponential smoother over detection results. Owned by the frame loop.
#[derive(Clone, Debug, Default)]
pub struct GestureSmoother {
    state: SceneState,
    config: GestureConfig,
}

impl GestureSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            state: SceneState::default(),
            config,
        }
    }

    /// Fold one frame's result (or its absence) into the state
    pub fn update(&mut self, detection: Option<&Detection>) -> SceneState {
        let state = &mut self.state;

        match detection {
            Some(Detection { gesture: Gesture::ClosedFist, .. }) => {
                // Hard mode switch, rotation is left alone
                state.exploded = true;
                state.twinkling = false;
            }
            Some(Detection { gesture: Gesture::OpenPalm, signal }) => {
                let blend = self.config.palm_blend;
                state.exploded = false;
                state.twinkling = false;
                state.rotation = state.rotation * (1.0 - blend) + signal * blend;
            }
            Some(Detection { gesture: Gesture::Victory, .. }) => {
                state.exploded = false;
                state.twinkling = true;
                state.rotation *= self.config.decay;
            }
            Some(Detection { gesture: Gesture::None, .. }) | None => {
                state.rotation *= self.config.decay;
            }
        }

        self.state
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Swap tuning without losing the current state
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Rotation close enough to zero that the scene may auto-rotate again
    pub fn is_at_rest(&self) -> bool {
        self.state.rotation.abs() < self.config.rest_epsilon
    }

    /// Yaw increment for a frame lasting `delta_seconds`
    pub fn spin_step(&self, delta_seconds: f32) -> f32 {
        delta_seconds * self.config.spin_base + self.state.rotation * self.config.spin_gain
    }

    pub fn reset(&mut self) {
        self.state = SceneState::default();
    }
}
