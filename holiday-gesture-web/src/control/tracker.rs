//! Per-frame hand tracking tick
//!
//! `HandTracker::on_frame` is the single entry for one video frame:
//! detector status check → stale-frame gate → pose validation →
//! classification + signal extraction. Every outcome other than a valid
//! hand is "no result"; nothing here returns an error.

use crate::classifier::{classify, extract_signal, Gesture, HandPose, Landmark};
use crate::error::GestureError;
use super::frame_gate::FrameGate;

/// One frame's gesture and raw control signal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub gesture: Gesture,
    /// Index fingertip x mapped to [-1, 1]
    pub signal: f32,
}

impl Detection {
    pub fn from_pose(pose: &HandPose) -> Self {
        Self {
            gesture: classify(pose),
            signal: extract_signal(pose),
        }
    }
}

/// Upstream hand-landmark model, treated as a black box
pub trait LandmarkSource {
    /// Run inference on the current video frame. `None` when no hand is visible.
    fn detect(&mut self, timestamp_ms: f64) -> Option<Vec<Landmark>>;
}

/// Lifecycle of the landmark model's one-time setup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetectorStatus {
    /// Setup not finished yet
    #[default]
    Pending,
    Ready,
    /// Setup failed or camera denied. Permanent for the session.
    Unavailable,
}

impl DetectorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorStatus::Pending => "pending",
            DetectorStatus::Ready => "ready",
            DetectorStatus::Unavailable => "unavailable",
        }
    }
}

/// Frame counters for the debug overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames that passed the gate
    pub processed: u64,
    /// Frames skipped for a repeated timestamp
    pub stale: u64,
    /// Frames whose pose failed validation
    pub malformed: u64,
    /// Frames that produced a detection
    pub hands: u64,
}

#[derive(Clone, Debug, Default)]
pub struct HandTracker {
    gate: FrameGate,
    status: DetectorStatus,
    stats: FrameStats,
    last_gesture: Option<Gesture>,
}

impl HandTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker whose detector is already set up (native hosts, tests)
    pub fn ready() -> Self {
        Self {
            status: DetectorStatus::Ready,
            ..Self::default()
        }
    }

    pub fn status(&self) -> DetectorStatus {
        self.status
    }

    pub fn mark_ready(&mut self) {
        // Unavailable is terminal
        if self.status == DetectorStatus::Pending {
            self.status = DetectorStatus::Ready;
        }
    }

    /// Returns true if this call is what disabled detection
    pub fn mark_unavailable(&mut self) -> bool {
        let changed = self.status != DetectorStatus::Unavailable;
        self.status = DetectorStatus::Unavailable;
        changed
    }

    /// Should the host bother running inference for this video time?
    pub fn is_fresh(&self, video_time: f64) -> bool {
        self.status == DetectorStatus::Ready && self.gate.is_fresh(video_time)
    }

    /// Process a frame whose landmarks the host already has
    pub fn on_frame(&mut self, video_time: f64, landmarks: Option<&[Landmark]>) -> Option<Detection> {
        if !self.admit(video_time) {
            return None;
        }
        let pose = landmarks.map(HandPose::from_landmarks);
        self.evaluate(pose)
    }

    /// Process hand `0` of a flat `[x, y, z]` buffer holding `num_hands` hands
    pub fn on_flat_frame(&mut self, video_time: f64, data: &[f32], num_hands: usize) -> Option<Detection> {
        if !self.admit(video_time) {
            return None;
        }
        let pose = (num_hands > 0).then(|| HandPose::from_flat(data, 0));
        self.evaluate(pose)
    }

    /// Gate first, then query the model, so stale frames cost no inference
    pub fn poll<S: LandmarkSource>(&mut self, source: &mut S, video_time: f64, now_ms: f64) -> Option<Detection> {
        if !self.admit(video_time) {
            return None;
        }
        let pose = source
            .detect(now_ms)
            .map(|landmarks| HandPose::from_landmarks(&landmarks));
        self.evaluate(pose)
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Gesture of the most recent detection, `None` if the last frame had no hand
    pub fn last_gesture(&self) -> Option<Gesture> {
        self.last_gesture
    }

    pub fn reset(&mut self) {
        self.gate.reset();
        self.last_gesture = None;
    }

    fn admit(&mut self, video_time: f64) -> bool {
        if self.status != DetectorStatus::Ready {
            return false;
        }
        if !self.gate.admit(video_time) {
            self.stats.stale += 1;
            return false;
        }
        self.stats.processed += 1;
        true
    }

    fn evaluate(&mut self, pose: Option<Result<HandPose, GestureError>>) -> Option<Detection> {
        let detection = match pose {
            Some(Ok(pose)) => Some(Detection::from_pose(&pose)),
            Some(Err(err)) => {
                // Same as no hand this frame
                self.stats.malformed += 1;
                console_warn!("Skipping hand frame: {}", err);
                None
            }
            None => None,
        };

        if detection.is_some() {
            self.stats.hands += 1;
        }
        self.last_gesture = detection.map(|d| d.gesture);
        detection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::test_support::{flatten, palm_at, raw_pose};

    struct ScriptedSource {
        frames: Vec<Option<Vec<Landmark>>>,
        calls: usize,
    }

    impl LandmarkSource for ScriptedSource {
        fn detect(&mut self, _timestamp_ms: f64) -> Option<Vec<Landmark>> {
            let frame = self.frames.get(self.calls).cloned().flatten();
            self.calls += 1;
            frame
        }
    }

    #[test]
    fn test_open_palm_detection() {
        let mut tracker = HandTracker::ready();
        let landmarks = palm_at(0.25);
        let detection = tracker.on_frame(0.033, Some(landmarks.as_slice())).unwrap();
        assert_eq!(detection.gesture, Gesture::OpenPalm);
        assert!((detection.signal + 0.5).abs() < 1e-6);
        assert_eq!(tracker.last_gesture(), Some(Gesture::OpenPalm));
    }

    #[test]
    fn test_same_timestamp_twice_is_stale() {
        let mut tracker = HandTracker::ready();
        let landmarks = raw_pose([false; 4]);
        assert!(tracker.on_frame(1.0, Some(landmarks.as_slice())).is_some());
        assert!(tracker.on_frame(1.0, Some(landmarks.as_slice())).is_none());
        assert_eq!(tracker.stats().stale, 1);
        assert_eq!(tracker.stats().processed, 1);
    }

    #[test]
    fn test_malformed_pose_is_no_hand() {
        let mut tracker = HandTracker::ready();
        let landmarks = raw_pose([true; 4]);
        assert!(tracker.on_frame(0.5, Some(&landmarks[..15])).is_none());
        assert_eq!(tracker.stats().malformed, 1);
        assert_eq!(tracker.last_gesture(), None);
    }

    #[test]
    fn test_no_hand() {
        let mut tracker = HandTracker::ready();
        assert!(tracker.on_frame(0.5, None).is_none());
        assert_eq!(tracker.stats().processed, 1);
        assert_eq!(tracker.stats().hands, 0);
    }

    #[test]
    fn test_pending_and_unavailable_skip_everything() {
        let landmarks = raw_pose([true; 4]);
        let mut tracker = HandTracker::new();
        assert_eq!(tracker.status(), DetectorStatus::Pending);
        assert!(!tracker.is_fresh(0.1));
        assert!(tracker.on_frame(0.1, Some(landmarks.as_slice())).is_none());

        tracker.mark_ready();
        // Gate was never touched while pending
        assert!(tracker.on_frame(0.1, Some(landmarks.as_slice())).is_some());

        assert!(tracker.mark_unavailable());
        assert!(!tracker.mark_unavailable());
        tracker.mark_ready();
        assert_eq!(tracker.status(), DetectorStatus::Unavailable);
        assert!(tracker.on_frame(0.2, Some(landmarks.as_slice())).is_none());
    }

    #[test]
    fn test_flat_frame_uses_first_hand() {
        let mut tracker = HandTracker::ready();
        let mut data = flatten(&raw_pose([true, true, false, false]));
        data.extend(flatten(&raw_pose([false; 4])));
        let detection = tracker.on_flat_frame(0.1, &data, 2).unwrap();
        assert_eq!(detection.gesture, Gesture::Victory);
    }

    #[test]
    fn test_flat_frame_without_hands() {
        let mut tracker = HandTracker::ready();
        assert!(tracker.on_flat_frame(0.1, &[], 0).is_none());
        assert_eq!(tracker.stats().malformed, 0);

        // Claims a hand but the buffer is short
        assert!(tracker.on_flat_frame(0.2, &[0.5; 45], 1).is_none());
        assert_eq!(tracker.stats().malformed, 1);
    }

    #[test]
    fn test_poll_skips_inference_on_stale_frame() {
        let mut tracker = HandTracker::ready();
        let mut source = ScriptedSource {
            frames: vec![Some(raw_pose([false; 4])), None],
            calls: 0,
        };

        let detection = tracker.poll(&mut source, 0.0, 16.0).unwrap();
        assert_eq!(detection.gesture, Gesture::ClosedFist);
        assert!(tracker.poll(&mut source, 0.0, 32.0).is_none());
        assert_eq!(source.calls, 1);

        assert!(tracker.poll(&mut source, 0.033, 48.0).is_none());
        assert_eq!(source.calls, 2);
    }

    #[test]
    fn test_reset_reopens_gate() {
        let mut tracker = HandTracker::ready();
        let landmarks = raw_pose([false; 4]);
        tracker.on_frame(2.0, Some(landmarks.as_slice()));
        tracker.reset();
        assert!(tracker.is_fresh(2.0));
        assert_eq!(tracker.last_gesture(), None);
    }
}
