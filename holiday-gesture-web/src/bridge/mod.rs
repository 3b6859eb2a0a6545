//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod hand_landmarks;
mod detector;
mod settings;
mod debug_info;

pub use hand_landmarks::{
    // WASM entry points
    is_frame_fresh,
    process_hand_frame,
    scene_controls,
    scene_spin_step,
    SceneControls,
};

pub use detector::{
    set_detector_ready,
    set_detector_failed,
    set_camera_unavailable,
    is_detector_ready,
    detector_status,
};

pub use settings::{
    configure_gestures,
    gesture_config,
    set_tracking_enabled,
    reset_scene,
};

pub use debug_info::{
    set_frame_metrics,
    set_detector_latency,
    get_gesture_debug_text,
};
