//! Stale-frame gate
//!
//! The render loop usually runs faster than the webcam. When the video
//! reports the same timestamp as the last processed frame there is nothing
//! new to look at, so the frame is skipped.

/// Remembers the timestamp of the last video frame that was processed
#[derive(Clone, Debug, Default)]
pub struct FrameGate {
    last_timestamp: Option<f64>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Would `timestamp` be processed? Does not change state.
    pub fn is_fresh(&self, timestamp: f64) -> bool {
        self.last_timestamp != Some(timestamp)
    }

    /// Returns true and records `timestamp` if it is fresh, false if stale
    pub fn admit(&mut self, timestamp: f64) -> bool {
        if !self.is_fresh(timestamp) {
            return false;
        }
        self.last_timestamp = Some(timestamp);
        true
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }

    pub fn reset(&mut self) {
        self.last_timestamp = None;
    }
}
