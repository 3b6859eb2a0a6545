//! Hand landmark intake and scene controls
//!
//! JS runs MediaPipe HandLandmarker in VIDEO mode and, once per animation
//! frame, passes the video's current time plus a flat Float32Array of
//! `num_hands × 21 × (x, y, z)`. The session lives in a thread-local since
//! WASM is single-threaded and the render loop is its only caller.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::control::{Detection, GestureSession};

thread_local! {
    static SESSION: RefCell<GestureSession> = RefCell::new(GestureSession::default());
}

pub(crate) fn with_session<R>(f: impl FnOnce(&mut GestureSession) -> R) -> R {
    SESSION.with(|session_cell| f(&mut session_cell.borrow_mut()))
}

/// Smoothed display state read by the renderer each frame
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneControls {
    /// Smoothed hand rotation signal (-1..1)
    pub rotation: f32,
    pub exploded: bool,
    pub twinkling: bool,
    /// True when idle auto-rotation may take over
    pub at_rest: bool,
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Cheap pre-check so JS can skip inference when the video frame hasn't advanced
#[wasm_bindgen]
pub fn is_frame_fresh(video_time: f64) -> bool {
    with_session(|session| session.is_enabled() && session.tracker.is_fresh(video_time))
}

/// Feed one animation frame. Pass `num_hands = 0` when no hand was found
/// (or inference was skipped); the scene still decays.
///
/// Returns `null` or `{ x, gesture }` for this frame.
#[wasm_bindgen]
pub fn process_hand_frame(video_time: f64, flat_data: &[f32], num_hands: usize) -> JsValue {
    match process_frame(video_time, flat_data, num_hands) {
        Some(detection) => detection_record(&detection),
        None => JsValue::NULL,
    }
}

/// Current smoothed state
#[wasm_bindgen]
pub fn scene_controls() -> SceneControls {
    with_session(|session| controls_of(session))
}

/// Yaw to add to the scene this frame
#[wasm_bindgen]
pub fn scene_spin_step(delta_seconds: f32) -> f32 {
    with_session(|session| session.smoother.spin_step(delta_seconds))
}

// ============================================================================
// INTERNAL API
// ============================================================================

pub(crate) fn process_frame(video_time: f64, flat_data: &[f32], num_hands: usize) -> Option<Detection> {
    with_session(|session| session.tick_flat(video_time, flat_data, num_hands))
}

fn controls_of(session: &GestureSession) -> SceneControls {
    let scene = session.scene();
    SceneControls {
        rotation: scene.rotation,
        exploded: scene.exploded,
        twinkling: scene.twinkling,
        at_rest: session.smoother.is_at_rest(),
    }
}

fn detection_record(detection: &Detection) -> JsValue {
    let record = js_sys::Object::new();
    // Plain object, so setting own properties cannot fail
    let _ = js_sys::Reflect::set(&record, &"x".into(), &JsValue::from_f64(detection.signal as f64));
    let _ = js_sys::Reflect::set(&record, &"gesture".into(), &JsValue::from_str(detection.gesture.as_str()));
    record.into()
}
