//! Classifier module - hand pose → gesture label + control signal
//!
//! Pure functions over a validated 21-point pose. No state lives here.

mod landmarks;
mod finger;
mod gesture;
mod signal;

#[cfg(test)]
pub(crate) mod test_support;

pub use landmarks::{
    Finger, HandPose, Landmark,
    HAND_LANDMARK_COUNT, LANDMARK_STRIDE,
    WRIST, INDEX_TIP, INDEX_PIP, MIDDLE_TIP, MIDDLE_PIP,
    RING_TIP, RING_PIP, PINKY_TIP, PINKY_PIP,
};
pub use finger::{is_extended, is_extended_from};
pub use gesture::{classify, FingerStates, Gesture, GESTURE_LABELS};
pub use signal::{extract_signal, signal_from_x};
