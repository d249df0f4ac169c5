//! Names of the values in a stroke analysis.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven values a [`StrokeAnalysis`](crate::StrokeAnalysis) carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Left shoulder–elbow–wrist angle.
    LeftElbowAngle,
    /// Right shoulder–elbow–wrist angle.
    RightElbowAngle,
    /// Left hip–knee–ankle angle.
    LeftKneeAngle,
    /// Right hip–knee–ankle angle.
    RightKneeAngle,
    /// Trunk angle from vertical.
    TorsoLean,
    /// `|left elbow − right elbow|`.
    ElbowSymmetry,
    /// `|left knee − right knee|`.
    KneeSymmetry,
}

impl Metric {
    /// All metrics, in report order.
    pub const ALL: [Self; 7] = [
        Self::LeftElbowAngle,
        Self::RightElbowAngle,
        Self::LeftKneeAngle,
        Self::RightKneeAngle,
        Self::TorsoLean,
        Self::ElbowSymmetry,
        Self::KneeSymmetry,
    ];

    /// Field name used in serialized reports.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LeftElbowAngle => "left_elbow_angle",
            Self::RightElbowAngle => "right_elbow_angle",
            Self::LeftKneeAngle => "left_knee_angle",
            Self::RightKneeAngle => "right_knee_angle",
            Self::TorsoLean => "torso_lean",
            Self::ElbowSymmetry => "elbow_symmetry",
            Self::KneeSymmetry => "knee_symmetry",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LeftElbowAngle => "Left elbow angle",
            Self::RightElbowAngle => "Right elbow angle",
            Self::LeftKneeAngle => "Left knee angle",
            Self::RightKneeAngle => "Right knee angle",
            Self::TorsoLean => "Torso lean",
            Self::ElbowSymmetry => "Elbow symmetry difference",
            Self::KneeSymmetry => "Knee symmetry difference",
        }
    }

    /// Returns `true` for the left/right difference metrics.
    #[must_use]
    pub const fn is_symmetry(self) -> bool {
        matches!(self, Self::ElbowSymmetry | Self::KneeSymmetry)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
