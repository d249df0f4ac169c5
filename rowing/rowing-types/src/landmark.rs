//! The 33-point body landmark vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PoseError;

/// Body side a landmark belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Subject's left.
    Left,
    /// Subject's right.
    Right,
    /// On the midline (only the nose).
    Center,
}

/// A named anatomical landmark.
///
/// Variants follow the standard 33-landmark body topology in detector order,
/// so `landmark as usize` is the detector's landmark index.
///
/// # Example
///
/// ```
/// use rowing_types::Landmark;
///
/// let knee: Landmark = "LEFT_KNEE".parse().unwrap();
/// assert_eq!(knee, Landmark::LeftKnee);
/// assert_eq!(knee.mirror(), Landmark::RightKnee);
/// assert_eq!(knee.name(), "LEFT_KNEE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum Landmark {
    Nose,
    LeftEyeInner,
    LeftEye,
    LeftEyeOuter,
    RightEyeInner,
    RightEye,
    RightEyeOuter,
    LeftEar,
    RightEar,
    MouthLeft,
    MouthRight,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftPinky,
    RightPinky,
    LeftIndex,
    RightIndex,
    LeftThumb,
    RightThumb,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

const NAMES: [&str; Landmark::COUNT] = [
    "NOSE",
    "LEFT_EYE_INNER",
    "LEFT_EYE",
    "LEFT_EYE_OUTER",
    "RIGHT_EYE_INNER",
    "RIGHT_EYE",
    "RIGHT_EYE_OUTER",
    "LEFT_EAR",
    "RIGHT_EAR",
    "MOUTH_LEFT",
    "MOUTH_RIGHT",
    "LEFT_SHOULDER",
    "RIGHT_SHOULDER",
    "LEFT_ELBOW",
    "RIGHT_ELBOW",
    "LEFT_WRIST",
    "RIGHT_WRIST",
    "LEFT_PINKY",
    "RIGHT_PINKY",
    "LEFT_INDEX",
    "RIGHT_INDEX",
    "LEFT_THUMB",
    "RIGHT_THUMB",
    "LEFT_HIP",
    "RIGHT_HIP",
    "LEFT_KNEE",
    "RIGHT_KNEE",
    "LEFT_ANKLE",
    "RIGHT_ANKLE",
    "LEFT_HEEL",
    "RIGHT_HEEL",
    "LEFT_FOOT_INDEX",
    "RIGHT_FOOT_INDEX",
];

impl Landmark {
    /// Number of landmarks in the vocabulary.
    pub const COUNT: usize = 33;

    /// Every landmark, in detector order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    /// The landmarks the stroke analysis cannot run without.
    pub const REQUIRED: [Self; 12] = [
        Self::LeftShoulder,
        Self::LeftElbow,
        Self::LeftWrist,
        Self::LeftHip,
        Self::LeftKnee,
        Self::LeftAnkle,
        Self::RightShoulder,
        Self::RightElbow,
        Self::RightWrist,
        Self::RightHip,
        Self::RightKnee,
        Self::RightAnkle,
    ];

    /// Detector index of this landmark.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks a landmark up by detector index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Uppercase snake-case name, as used in payloads.
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Body side of this landmark.
    #[must_use]
    pub const fn side(self) -> Side {
        match self as usize {
            0 => Side::Center,
            1..=3 => Side::Left,
            4..=6 => Side::Right,
            i if i % 2 == 1 => Side::Left,
            _ => Side::Right,
        }
    }

    /// The same landmark on the opposite side of the body.
    ///
    /// The nose maps to itself.
    #[must_use]
    pub fn mirror(self) -> Self {
        // Eyes come as two blocks of three; from the ears on, pairs alternate left/right.
        let i = self as usize;
        let mirrored = match i {
            0 => 0,
            1..=3 => i + 3,
            4..=6 => i - 3,
            _ if i % 2 == 1 => i + 1,
            _ => i - 1,
        };
        Self::ALL[mirrored]
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Landmark {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|landmark| landmark.name() == s)
            .ok_or_else(|| PoseError::malformed(s, "unknown landmark name"))
    }
}
