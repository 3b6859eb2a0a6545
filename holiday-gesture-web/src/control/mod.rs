//! Control module - per-frame gating, smoothing and session state
//!
//! Re-exports only. All logic in submodules.

mod frame_gate;
mod smoother;
mod tracker;
mod session;

pub use frame_gate::FrameGate;
pub use smoother::{GestureSmoother, SceneState};
pub use tracker::{Detection, DetectorStatus, FrameStats, HandTracker, LandmarkSource};
pub use session::GestureSession;
