//! Coaching reports: analysis plus feedback, ready for rendering.

use std::fmt;

use rowing_angles::{StrokeAnalysis, analyze_pose};
use rowing_types::{LandmarkMap, PoseResult};
use serde::Serialize;

use crate::{Feedback, ReferenceRanges, classify};

/// The full result of evaluating one pose.
///
/// Serializes as a flat object: the seven analysis fields followed by
/// `feedback` and `suggestions`. The [`Display`](fmt::Display) rendering is
/// the human-readable report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachingReport {
    /// Joint angles and symmetry.
    #[serde(flatten)]
    pub analysis: StrokeAnalysis,
    /// Classifier output.
    #[serde(flatten)]
    pub feedback: Feedback,
}

impl CoachingReport {
    /// Classify `analysis` and bundle the result.
    #[must_use]
    pub fn new(analysis: StrokeAnalysis, ranges: &ReferenceRanges) -> Self {
        let feedback = classify(&analysis, ranges);
        Self { analysis, feedback }
    }
}

impl fmt::Display for CoachingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Rowing Stroke Analysis =====")?;
        write!(f, "{}", self.analysis)?;

        writeln!(f)?;
        writeln!(f, "===== Technique Assessment =====")?;
        for line in &self.feedback.feedback {
            writeln!(f, "• {line}")?;
        }

        writeln!(f)?;
        writeln!(f, "===== Coaching Suggestions =====")?;
        for (i, suggestion) in self.feedback.suggestions.iter().enumerate() {
            writeln!(f, "{}. {suggestion}", i + 1)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Note: this assessment uses standard rowing stroke biomechanics reference ranges."
        )
    }
}

/// Analyze a pose and classify it in one step.
///
/// # Errors
///
/// Propagates any [`PoseError`](rowing_types::PoseError) from
/// [`analyze_pose`]; no report is produced in that case.
///
/// # Example
///
/// ```
/// use rowing_feedback::{ReferenceRanges, evaluate};
/// use rowing_types::{Landmark, LandmarkMap, PoseError};
///
/// let err = evaluate(&LandmarkMap::new(), &ReferenceRanges::default()).unwrap_err();
/// assert_eq!(err, PoseError::MissingLandmark(Landmark::LeftShoulder));
/// ```
pub fn evaluate(map: &LandmarkMap, ranges: &ReferenceRanges) -> PoseResult<CoachingReport> {
    let analysis = analyze_pose(map)?;
    Ok(CoachingReport::new(analysis, ranges))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> CoachingReport {
        let analysis = StrokeAnalysis {
            left_elbow_angle: 168.0,
            right_elbow_angle: 100.9,
            left_knee_angle: 144.8,
            right_knee_angle: 120.1,
            torso_lean: 25.0,
            elbow_symmetry: 67.1,
            knee_symmetry: 24.7,
        };
        CoachingReport::new(analysis, &ReferenceRanges::default())
    }

    #[test]
    fn display_sections() {
        let text = report().to_string();
        assert!(text.contains("===== Rowing Stroke Analysis ====="));
        assert!(text.contains("Left elbow angle: 168.0°"));
        let left_elbow = "• Left elbow above ideal (168.0° > 120°): excessive elbow flexion";
        assert!(text.contains(left_elbow));
        assert!(text.contains("• Right elbow ideal (100.9°)"));
        assert!(text.contains("===== Coaching Suggestions ====="));
        assert!(text.contains("\n1. "));
        assert!(text.contains("\n4. "));
        assert!(!text.contains("\n5. "));
    }

    #[test]
    fn json_is_flat() {
        let json = serde_json::to_value(report()).unwrap();
        assert!((json["left_elbow_angle"].as_f64().unwrap() - 168.0).abs() < 1e-12);
        assert_eq!(json["feedback"].as_array().unwrap().len(), 7);
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 4);
        assert!(json.get("findings").is_none());
        assert!(json.get("analysis").is_none());
    }
}
