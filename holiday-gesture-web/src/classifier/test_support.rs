//! Synthetic hand poses for unit tests
//!
//! Upright hand, wrist at the bottom centre, one column per finger.

use super::landmarks::*;

const WRIST_POS: (f32, f32) = (0.5, 0.9);

/// Landmark list with each of index/middle/ring/pinky extended or curled
pub(crate) fn raw_pose(extended: [bool; 4]) -> Vec<Landmark> {
    let mut landmarks = vec![Landmark::default(); HAND_LANDMARK_COUNT];
    landmarks[WRIST] = Landmark::new(WRIST_POS.0, WRIST_POS.1);

    landmarks[THUMB_CMC] = Landmark::new(0.3, 0.85);
    landmarks[THUMB_MCP] = Landmark::new(0.25, 0.8);
    landmarks[THUMB_IP] = Landmark::new(0.2, 0.75);
    landmarks[THUMB_TIP] = Landmark::new(0.15, 0.7);

    for (i, finger) in Finger::ALL.iter().enumerate() {
        let x = 0.35 + 0.1 * i as f32;
        let mcp = finger.pip() - 1;
        let dip = finger.pip() + 1;
        landmarks[mcp] = Landmark::new(x, 0.7);
        landmarks[finger.pip()] = Landmark::new(x, 0.6);
        if extended[i] {
            landmarks[dip] = Landmark::new(x, 0.5);
            landmarks[finger.tip()] = Landmark::new(x, 0.4);
        } else {
            landmarks[dip] = Landmark::new(x, 0.7);
            landmarks[finger.tip()] = Landmark::new(x, 0.75);
        }
    }
    landmarks
}

pub(crate) fn pose_from(extended: [bool; 4]) -> HandPose {
    HandPose::from_landmarks(&raw_pose(extended)).unwrap()
}

/// Open palm with the index fingertip moved to horizontal position `x`
pub(crate) fn palm_at(x: f32) -> Vec<Landmark> {
    let mut landmarks = raw_pose([true; 4]);
    landmarks[INDEX_TIP].x = x;
    landmarks
}

/// Flatten to the `[x, y, z]` layout the JS bridge sends
pub(crate) fn flatten(landmarks: &[Landmark]) -> Vec<f32> {
    landmarks.iter().flat_map(|lm| [lm.x, lm.y, lm.z]).collect()
}
