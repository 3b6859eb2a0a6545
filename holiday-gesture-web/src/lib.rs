//! Holiday Gesture Web - webcam hand gestures for the holiday tree scene
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! Fist explodes the tree, open palm restores it and steers rotation with
//! the index fingertip, victory sign makes the star twinkle.

#[macro_use]
mod console;
mod bridge;

pub mod classifier;
pub mod config;
pub mod control;
pub mod error;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    is_frame_fresh, process_hand_frame, scene_controls, scene_spin_step, SceneControls,
    set_detector_ready, set_detector_failed, set_camera_unavailable, is_detector_ready, detector_status,
    configure_gestures, gesture_config, set_tracking_enabled, reset_scene,
    set_frame_metrics, set_detector_latency, get_gesture_debug_text,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("🎄 Gesture core loaded (v{})", env!("CARGO_PKG_VERSION"));
}
