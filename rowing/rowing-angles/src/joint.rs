//! Landmark triples that define each joint angle.

use rowing_types::{Landmark, LandmarkMap, PoseResult};

use crate::Metric;
use crate::angle::angle_at;

/// A joint angle measured at `vertex` between `proximal` and `distal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointAngle {
    /// Which analysis value this joint produces.
    pub metric: Metric,
    /// Landmark on the body side of the joint (shoulder, hip).
    pub proximal: Landmark,
    /// The joint itself (elbow, knee).
    pub vertex: Landmark,
    /// Landmark on the limb side of the joint (wrist, ankle).
    pub distal: Landmark,
}

/// The four limb joints of a stroke analysis, in report order.
pub const JOINT_ANGLES: [JointAngle; 4] = [
    JointAngle {
        metric: Metric::LeftElbowAngle,
        proximal: Landmark::LeftShoulder,
        vertex: Landmark::LeftElbow,
        distal: Landmark::LeftWrist,
    },
    JointAngle {
        metric: Metric::RightElbowAngle,
        proximal: Landmark::RightShoulder,
        vertex: Landmark::RightElbow,
        distal: Landmark::RightWrist,
    },
    JointAngle {
        metric: Metric::LeftKneeAngle,
        proximal: Landmark::LeftHip,
        vertex: Landmark::LeftKnee,
        distal: Landmark::LeftAnkle,
    },
    JointAngle {
        metric: Metric::RightKneeAngle,
        proximal: Landmark::RightHip,
        vertex: Landmark::RightKnee,
        distal: Landmark::RightAnkle,
    },
];

impl JointAngle {
    /// Measures this joint's angle in degrees (unrounded).
    ///
    /// # Errors
    ///
    /// - [`PoseError::MissingLandmark`](rowing_types::PoseError::MissingLandmark)
    ///   if one of the three landmarks is absent.
    /// - [`PoseError::DegenerateGeometry`](rowing_types::PoseError::DegenerateGeometry)
    ///   if the joint coincides with a neighbour.
    pub fn measure(&self, map: &LandmarkMap) -> PoseResult<f64> {
        angle_at(
            map.require(self.vertex)?,
            map.require(self.proximal)?,
            map.require(self.distal)?,
            self.metric.key(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use rowing_types::PoseError;

    #[test]
    fn joints_are_required_landmarks() {
        for joint in JOINT_ANGLES {
            for landmark in [joint.proximal, joint.vertex, joint.distal] {
                assert!(Landmark::REQUIRED.contains(&landmark));
            }
        }
    }

    #[test]
    fn left_and_right_joints_mirror() {
        for pair in JOINT_ANGLES.chunks(2) {
            assert_eq!(pair[0].proximal.mirror(), pair[1].proximal);
            assert_eq!(pair[0].vertex.mirror(), pair[1].vertex);
            assert_eq!(pair[0].distal.mirror(), pair[1].distal);
        }
    }

    #[test]
    fn measure_bent_knee() {
        let map = LandmarkMap::new()
            .with(Landmark::LeftHip, Point3::new(0.0, 0.0, 0.0))
            .with(Landmark::LeftKnee, Point3::new(0.0, 0.5, 0.0))
            .with(Landmark::LeftAnkle, Point3::new(0.5, 0.5, 0.0));

        let knee = JOINT_ANGLES[2].measure(&map).unwrap();
        assert_relative_eq!(knee, 90.0, epsilon = 1e-10);
    }

    #[test]
    fn measure_reports_missing_landmark() {
        let map = LandmarkMap::new().with(Landmark::LeftHip, Point3::origin());
        assert_eq!(
            JOINT_ANGLES[2].measure(&map),
            Err(PoseError::MissingLandmark(Landmark::LeftKnee))
        );
    }

    #[test]
    fn degenerate_context_names_the_joint() {
        let p = Point3::new(0.1, 0.1, 0.1);
        let map = LandmarkMap::new()
            .with(Landmark::RightShoulder, p)
            .with(Landmark::RightElbow, p)
            .with(Landmark::RightWrist, Point3::origin());

        let err = JOINT_ANGLES[1].measure(&map).unwrap_err();
        assert!(format!("{err}").contains("right_elbow_angle"));
    }
}
