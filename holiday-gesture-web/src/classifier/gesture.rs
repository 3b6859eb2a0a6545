//! Rule-based hand gesture classification
//!
//! Combines the four non-thumb finger states into one label. Rules are
//! checked in a fixed order and the first match wins:
//!
//! 1. index + middle up, ring + pinky down → Victory
//! 2. three or more fingers up              → Open_Palm
//! 3. no fingers up                         → Closed_Fist
//! 4. anything else                         → None
//!
//! Victory goes first so its two-finger pattern is never absorbed by the
//! broader thresholds. The ≥3 / ==0 thresholds tolerate one misdetected finger.

use super::landmarks::{Finger, HandPose};

/// Gesture labels as the JS side spells them
pub const GESTURE_LABELS: [&str; 4] = ["Open_Palm", "Victory", "Closed_Fist", "None"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gesture {
    OpenPalm,
    Victory,
    ClosedFist,
    #[default]
    None,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::OpenPalm => "Open_Palm",
            Gesture::Victory => "Victory",
            Gesture::ClosedFist => "Closed_Fist",
            Gesture::None => "None",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Open_Palm" => Some(Gesture::OpenPalm),
            "Victory" => Some(Gesture::Victory),
            "Closed_Fist" => Some(Gesture::ClosedFist),
            "None" => Some(Gesture::None),
            _ => None,
        }
    }
}

/// Extension state of the four classified fingers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerStates {
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    pub fn from_pose(pose: &HandPose) -> Self {
        Self {
            index: Finger::Index.is_extended(pose),
            middle: Finger::Middle.is_extended(pose),
            ring: Finger::Ring.is_extended(pose),
            pinky: Finger::Pinky.is_extended(pose),
        }
    }

    pub fn extended_count(&self) -> usize {
        [self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|&&up| up)
            .count()
    }

    pub fn gesture(&self) -> Gesture {
        if self.index && self.middle && !self.ring && !self.pinky {
            return Gesture::Victory;
        }

        match self.extended_count() {
            3..=4 => Gesture::OpenPalm,
            0 => Gesture::ClosedFist,
            _ => Gesture::None,
        }
    }
}

/// Classify a validated hand pose. Pure and total.
pub fn classify(pose: &HandPose) -> Gesture {
    FingerStates::from_pose(pose).gesture()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::landmarks::{Landmark, THUMB_CMC, THUMB_TIP};
    use crate::classifier::test_support::{pose_from, raw_pose};
    use proptest::prelude::*;

    #[test]
    fn test_open_palm() {
        assert_eq!(classify(&pose_from([true; 4])), Gesture::OpenPalm);
        assert_eq!(classify(&pose_from([true, true, true, false])), Gesture::OpenPalm);
        assert_eq!(classify(&pose_from([false, true, true, true])), Gesture::OpenPalm);
    }

    #[test]
    fn test_closed_fist() {
        assert_eq!(classify(&pose_from([false; 4])), Gesture::ClosedFist);
    }

    #[test]
    fn test_victory() {
        assert_eq!(classify(&pose_from([true, true, false, false])), Gesture::Victory);
    }

    #[test]
    fn test_single_index_is_none() {
        // Pointing finger alone is in the dead zone, not an open palm
        assert_eq!(classify(&pose_from([true, false, false, false])), Gesture::None);
    }

    #[test]
    fn test_other_two_finger_patterns_are_none() {
        assert_eq!(classify(&pose_from([false, true, true, false])), Gesture::None);
        assert_eq!(classify(&pose_from([true, false, false, true])), Gesture::None);
        assert_eq!(classify(&pose_from([false, false, false, true])), Gesture::None);
    }

    #[test]
    fn test_victory_ignores_thumb() {
        let mut landmarks = raw_pose([true, true, false, false]);
        // Thumb tucked into the palm
        landmarks[THUMB_TIP] = Landmark::new(0.5, 0.8);
        landmarks[THUMB_CMC] = Landmark::new(0.45, 0.85);
        let pose = HandPose::from_landmarks(&landmarks).unwrap();
        assert_eq!(classify(&pose), Gesture::Victory);
    }

    #[test]
    fn test_labels() {
        for label in GESTURE_LABELS {
            let gesture = Gesture::from_label(label).unwrap();
            assert_eq!(gesture.as_str(), label);
        }
        assert_eq!(Gesture::from_label("Thumb_Up"), None);
        assert_eq!(Gesture::default(), Gesture::None);
    }

    #[test]
    fn test_extended_count() {
        let states = FingerStates { index: true, middle: false, ring: true, pinky: true };
        assert_eq!(states.extended_count(), 3);
        assert_eq!(FingerStates::default().extended_count(), 0);
    }

    fn arb_pose() -> impl Strategy<Value = HandPose> {
        prop::collection::vec((0.0f32..=1.0, 0.0f32..=1.0), 21).prop_map(|points| {
            let landmarks: Vec<Landmark> =
                points.into_iter().map(|(x, y)| Landmark::new(x, y)).collect();
            HandPose::from_landmarks(&landmarks).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_rules_follow_finger_states(pose in arb_pose()) {
            let states = FingerStates::from_pose(&pose);
            let gesture = classify(&pose);

            if states.index && states.middle && states.ring && states.pinky {
                prop_assert_eq!(gesture, Gesture::OpenPalm);
            }
            if !states.index && !states.middle && !states.ring && !states.pinky {
                prop_assert_eq!(gesture, Gesture::ClosedFist);
            }
            if states.index && states.middle && !states.ring && !states.pinky {
                prop_assert_eq!(gesture, Gesture::Victory);
            }
        }

        #[test]
        fn prop_classify_is_pure(pose in arb_pose()) {
            prop_assert_eq!(classify(&pose), classify(&pose.clone()));
        }

        #[test]
        fn prop_thumb_does_not_matter(
            pose in arb_pose(),
            thumb in prop::collection::vec((0.0f32..=1.0, 0.0f32..=1.0), 4),
        ) {
            let mut landmarks = pose.landmarks().to_vec();
            for (i, (x, y)) in thumb.into_iter().enumerate() {
                landmarks[THUMB_CMC + i] = Landmark::new(x, y);
            }
            let moved = HandPose::from_landmarks(&landmarks).unwrap();
            prop_assert_eq!(classify(&pose), classify(&moved));
        }
    }
}
