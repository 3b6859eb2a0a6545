//! Gesture session - the state the render loop owns for its lifetime
//!
//! Pairs the tracker (frame gate, detector status) with the smoother
//! (rotation, flags). One `tick` per animation frame.

use crate::classifier::Landmark;
use crate::config::GestureConfig;
use super::smoother::{GestureSmoother, SceneState};
use super::tracker::{Detection, HandTracker, LandmarkSource};

#[derive(Clone, Debug)]
pub struct GestureSession {
    pub tracker: HandTracker,
    pub smoother: GestureSmoother,
    /// Gesture handling only runs in the main scene view
    enabled: bool,
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new(HandTracker::new(), GestureConfig::default())
    }
}

impl GestureSession {
    pub fn new(tracker: HandTracker, config: GestureConfig) -> Self {
        Self {
            tracker,
            smoother: GestureSmoother::with_config(config),
            enabled: true,
        }
    }

    /// One animation frame with landmarks supplied by the host
    pub fn tick(&mut self, video_time: f64, landmarks: Option<&[Landmark]>) -> Option<Detection> {
        if !self.enabled {
            return None;
        }
        let detection = self.tracker.on_frame(video_time, landmarks);
        self.smoother.update(detection.as_ref());
        detection
    }

    /// One animation frame from the JS flat landmark buffer
    pub fn tick_flat(&mut self, video_time: f64, data: &[f32], num_hands: usize) -> Option<Detection> {
        if !self.enabled {
            return None;
        }
        let detection = self.tracker.on_flat_frame(video_time, data, num_hands);
        self.smoother.update(detection.as_ref());
        detection
    }

    /// One animation frame pulling landmarks from `source`
    pub fn tick_source<S: LandmarkSource>(&mut self, source: &mut S, video_time: f64, now_ms: f64) -> Option<Detection> {
        if !self.enabled {
            return None;
        }
        let detection = self.tracker.poll(source, video_time, now_ms);
        self.smoother.update(detection.as_ref());
        detection
    }

    pub fn scene(&self) -> SceneState {
        self.smoother.state()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled sessions neither detect nor decay; state is frozen
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Back to a still, collapsed scene. Detector status is kept.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.smoother.reset();
    }
}
