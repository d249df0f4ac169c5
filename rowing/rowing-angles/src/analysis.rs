//! Stroke analysis record.

use std::fmt;

use rowing_types::{Landmark, LandmarkMap, PoseResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::angle::{round_to_tenth, torso_lean};
use crate::{JOINT_ANGLES, Metric};

/// Joint angles and symmetry of a single captured pose, in degrees.
///
/// Every field is rounded to one decimal place.
///
/// # Example
///
/// ```
/// use rowing_angles::{Metric, StrokeAnalysis};
///
/// let analysis = StrokeAnalysis {
///     left_elbow_angle: 100.0,
///     right_elbow_angle: 95.5,
///     left_knee_angle: 145.0,
///     right_knee_angle: 140.0,
///     torso_lean: 25.0,
///     elbow_symmetry: 4.5,
///     knee_symmetry: 5.0,
/// };
/// assert!((analysis.get(Metric::ElbowSymmetry) - 4.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StrokeAnalysis {
    /// Left shoulder–elbow–wrist angle.
    pub left_elbow_angle: f64,
    /// Right shoulder–elbow–wrist angle.
    pub right_elbow_angle: f64,
    /// Left hip–knee–ankle angle.
    pub left_knee_angle: f64,
    /// Right hip–knee–ankle angle.
    pub right_knee_angle: f64,
    /// Trunk angle from the vertical reference.
    pub torso_lean: f64,
    /// Absolute difference between the elbow angles.
    pub elbow_symmetry: f64,
    /// Absolute difference between the knee angles.
    pub knee_symmetry: f64,
}

impl StrokeAnalysis {
    /// Value of a single metric.
    #[must_use]
    pub const fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::LeftElbowAngle => self.left_elbow_angle,
            Metric::RightElbowAngle => self.right_elbow_angle,
            Metric::LeftKneeAngle => self.left_knee_angle,
            Metric::RightKneeAngle => self.right_knee_angle,
            Metric::TorsoLean => self.torso_lean,
            Metric::ElbowSymmetry => self.elbow_symmetry,
            Metric::KneeSymmetry => self.knee_symmetry,
        }
    }

    /// Iterates over `(metric, value)` in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.iter().map(|&metric| (metric, self.get(metric)))
    }
}

impl fmt::Display for StrokeAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (metric, value) in self.iter() {
            writeln!(f, "{}: {value:.1}°", metric.label())?;
        }
        Ok(())
    }
}

/// Analyze a rowing pose.
///
/// Computes both elbow and knee angles, the torso lean from the left shoulder
/// and hip, and the left/right symmetry of the elbows and knees.
///
/// # Errors
///
/// - [`PoseError::MissingLandmark`](rowing_types::PoseError::MissingLandmark)
///   naming the first absent entry of [`Landmark::REQUIRED`]; nothing is
///   computed in that case.
/// - [`PoseError::DegenerateGeometry`](rowing_types::PoseError::DegenerateGeometry)
///   if two landmarks of a joint coincide.
///
/// # Example
///
/// ```
/// use rowing_angles::analyze_pose;
/// use rowing_types::{Landmark, LandmarkMap, PoseError, Point3};
///
/// let map = LandmarkMap::new().with(Landmark::LeftShoulder, Point3::origin());
/// let err = analyze_pose(&map).unwrap_err();
/// assert_eq!(err, PoseError::MissingLandmark(Landmark::LeftElbow));
/// ```
pub fn analyze_pose(map: &LandmarkMap) -> PoseResult<StrokeAnalysis> {
    map.check_required()?;

    let mut joints = [0.0; JOINT_ANGLES.len()];
    for (slot, joint) in joints.iter_mut().zip(&JOINT_ANGLES) {
        *slot = joint.measure(map)?;
    }
    let [left_elbow, right_elbow, left_knee, right_knee] = joints;

    let torso = torso_lean(
        map.require(Landmark::LeftShoulder)?,
        map.require(Landmark::LeftHip)?,
    )?;

    let analysis = StrokeAnalysis {
        left_elbow_angle: round_to_tenth(left_elbow),
        right_elbow_angle: round_to_tenth(right_elbow),
        left_knee_angle: round_to_tenth(left_knee),
        right_knee_angle: round_to_tenth(right_knee),
        torso_lean: round_to_tenth(torso),
        elbow_symmetry: round_to_tenth((left_elbow - right_elbow).abs()),
        knee_symmetry: round_to_tenth((left_knee - right_knee).abs()),
    };

    debug!(
        left_elbow = analysis.left_elbow_angle,
        right_elbow = analysis.right_elbow_angle,
        left_knee = analysis.left_knee_angle,
        right_knee = analysis.right_knee_angle,
        torso_lean = analysis.torso_lean,
        "analyzed stroke pose"
    );

    Ok(analysis)
}
