//! Gesture metrics for the debug overlay
//!
//! Frame counters come from the session; timing is pushed from JS.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use super::hand_landmarks::with_session;

/// Timing reported by the JS loop
#[derive(Default)]
struct Timing {
    fps: f32,
    frame_time_ms: f32,
    detector_latency_ms: f32,
}

thread_local! {
    static TIMING: RefCell<Timing> = RefCell::new(Timing::default());
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Set frame timing (called from JS each frame)
#[wasm_bindgen]
pub fn set_frame_metrics(fps: f32, frame_time_ms: f32) {
    // Tab backgrounded or first frame
    if !(1.0..=200.0).contains(&frame_time_ms) {
        return;
    }
    TIMING.with(|t| {
        let mut timing = t.borrow_mut();
        timing.fps = fps;
        timing.frame_time_ms = frame_time_ms;
    });
}

/// Time spent in HandLandmarker.detectForVideo this frame
#[wasm_bindgen]
pub fn set_detector_latency(ms: f32) {
    TIMING.with(|t| t.borrow_mut().detector_latency_ms = ms);
}

/// Formatted overlay text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_gesture_debug_text() -> String {
    let timing = TIMING.with(|t| {
        let t = t.borrow();
        (t.fps, t.frame_time_ms, t.detector_latency_ms)
    });

    with_session(|session| {
        let stats = session.tracker.stats();
        let scene = session.scene();
        let gesture = session
            .tracker
            .last_gesture()
            .map_or("-", |g| g.as_str());

        format!(
            "FPS: {:.0} | Frame: {:.1}ms | Hands: {:.0}ms\n\
             Detector: {}{}\n\
             Frames: {} | Stale: {} | Bad: {} | Hand: {}\n\
             Gesture: {} | Rot: {:+.2}{}{}",
            timing.0, timing.1, timing.2,
            session.tracker.status().as_str(),
            if session.is_enabled() { "" } else { " (paused)" },
            stats.processed, stats.stale, stats.malformed, stats.hands,
            gesture,
            scene.rotation,
            if scene.exploded { " 💥" } else { "" },
            if scene.twinkling { " ✨" } else { "" },
        )
    })
}
