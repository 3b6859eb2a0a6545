//! Hand landmark types and the validated 21-point hand pose
//!
//! Indices follow the MediaPipe hand model numbering.

use crate::error::GestureError;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Landmarks per hand
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Floats per landmark in the flat JS buffer (x, y, z)
pub const LANDMARK_STRIDE: usize = 3;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single hand keypoint (x, y normalized to the video frame)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,  // 0-1, left to right
    pub y: f32,  // 0-1, top to bottom
    pub z: f32,  // Relative depth, unused by the classifier
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Euclidean distance in the image plane (z ignored)
    pub fn distance_2d(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The four fingers that take part in gesture classification.
/// The thumb is left out: its tip/PIP geometry flips with hand orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    pub fn tip(self) -> usize {
        match self {
            Finger::Index => INDEX_TIP,
            Finger::Middle => MIDDLE_TIP,
            Finger::Ring => RING_TIP,
            Finger::Pinky => PINKY_TIP,
        }
    }

    pub fn pip(self) -> usize {
        match self {
            Finger::Index => INDEX_PIP,
            Finger::Middle => MIDDLE_PIP,
            Finger::Ring => RING_PIP,
            Finger::Pinky => PINKY_PIP,
        }
    }
}

/// Full 21-point skeleton for one hand in one frame.
///
/// Only constructible through the checked constructors, so every index
/// constant above is always in bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct HandPose {
    landmarks: [Landmark; HAND_LANDMARK_COUNT],
}

impl HandPose {
    /// Build from the model's landmark list. Extra entries past 21 are ignored.
    pub fn from_landmarks(landmarks: &[Landmark]) -> Result<Self, GestureError> {
        if landmarks.len() < HAND_LANDMARK_COUNT {
            return Err(GestureError::MalformedPose {
                found: landmarks.len(),
                expected: HAND_LANDMARK_COUNT,
            });
        }

        let mut pose = [Landmark::default(); HAND_LANDMARK_COUNT];
        pose.copy_from_slice(&landmarks[..HAND_LANDMARK_COUNT]);
        Self::checked(pose)
    }

    /// Build hand `hand` from a flat buffer of `[x, y, z]` triples,
    /// 21 triples per hand, hands back to back.
    pub fn from_flat(data: &[f32], hand: usize) -> Result<Self, GestureError> {
        let hand_len = HAND_LANDMARK_COUNT * LANDMARK_STRIDE;
        let start = hand * hand_len;
        let available = data.len().saturating_sub(start) / LANDMARK_STRIDE;

        if available < HAND_LANDMARK_COUNT {
            return Err(GestureError::MalformedPose {
                found: available,
                expected: HAND_LANDMARK_COUNT,
            });
        }

        let mut pose = [Landmark::default(); HAND_LANDMARK_COUNT];
        for (i, chunk) in data[start..start + hand_len].chunks_exact(LANDMARK_STRIDE).enumerate() {
            pose[i] = Landmark {
                x: chunk[0],
                y: chunk[1],
                z: chunk[2],
            };
        }
        Self::checked(pose)
    }

    fn checked(landmarks: [Landmark; HAND_LANDMARK_COUNT]) -> Result<Self, GestureError> {
        if let Some(index) = landmarks
            .iter()
            .position(|lm| !lm.x.is_finite() || !lm.y.is_finite())
        {
            return Err(GestureError::NonFiniteLandmark { index });
        }
        Ok(Self { landmarks })
    }

    pub fn landmark(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }

    pub fn landmarks(&self) -> &[Landmark; HAND_LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn wrist(&self) -> &Landmark {
        &self.landmarks[WRIST]
    }
}
