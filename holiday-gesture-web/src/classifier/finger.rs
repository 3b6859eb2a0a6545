//! Finger extension test
//!
//! A curled finger folds its tip back toward the palm, so the tip ends up
//! closer to the wrist than its own PIP joint. Extended, the tip is farther.
//! Only relative distances are used, so the test does not care how the hand
//! is rotated in the image.

use super::landmarks::{Finger, HandPose, WRIST};

/// Is the finger with tip `tip` and PIP joint `pip` extended, measured from the wrist?
pub fn is_extended(pose: &HandPose, tip: usize, pip: usize) -> bool {
    is_extended_from(pose, tip, pip, WRIST)
}

/// Same test with an explicit reference landmark instead of the wrist
pub fn is_extended_from(pose: &HandPose, tip: usize, pip: usize, reference: usize) -> bool {
    let origin = pose.landmark(reference);
    let d_tip = origin.distance_2d(pose.landmark(tip));
    let d_pip = origin.distance_2d(pose.landmark(pip));
    d_tip > d_pip
}

impl Finger {
    pub fn is_extended(self, pose: &HandPose) -> bool {
        is_extended(pose, self.tip(), self.pip())
    }
}
