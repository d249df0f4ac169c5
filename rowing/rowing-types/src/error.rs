//! Error types for pose analysis.

use thiserror::Error;

use crate::Landmark;

/// Result type alias for pose analysis operations.
pub type PoseResult<T> = Result<T, PoseError>;

/// Errors that can occur while decoding or analyzing a pose.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoseError {
    /// A landmark required by the analysis is absent from the input.
    #[error("missing landmark: {0}")]
    MissingLandmark(Landmark),

    /// The input could not be decoded (bad JSON, wrong shape, non-finite coordinate).
    #[error("malformed input at `{field}`: {reason}")]
    MalformedInput {
        /// Path of the offending field (e.g. `LEFT_KNEE[1]`).
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Two points coincide, so an angle is undefined.
    #[error("degenerate geometry: {context}")]
    DegenerateGeometry {
        /// Which measurement could not be computed.
        context: String,
    },

    /// The upstream detector found no person in the image.
    #[error("no human detected in the input")]
    NoHumanDetected,
}

impl PoseError {
    /// Creates a malformed input error.
    #[must_use]
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a degenerate geometry error.
    #[must_use]
    pub fn degenerate(context: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            context: context.into(),
        }
    }

    /// Returns a short, stable identifier for the error kind.
    ///
    /// Used by front ends that render failures as one-line diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingLandmark(_) => "missing_landmark",
            Self::MalformedInput { .. } => "malformed_input",
            Self::DegenerateGeometry { .. } => "degenerate_geometry",
            Self::NoHumanDetected => "no_human_detected",
        }
    }

    /// Returns `true` for the non-fatal "nobody in frame" condition.
    #[must_use]
    pub const fn is_no_human(&self) -> bool {
        matches!(self, Self::NoHumanDetected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_landmark_names_the_key() {
        let err = PoseError::MissingLandmark(Landmark::LeftKnee);
        let msg = format!("{err}");
        assert!(msg.contains("missing landmark"));
        assert!(msg.contains("LEFT_KNEE"));
        assert_eq!(err.kind(), "missing_landmark");
    }

    #[test]
    fn malformed_display() {
        let err = PoseError::malformed("LEFT_KNEE[1]", "not a number");
        let msg = format!("{err}");
        assert!(msg.contains("LEFT_KNEE[1]"));
        assert!(msg.contains("not a number"));
        assert_eq!(err.kind(), "malformed_input");
    }

    #[test]
    fn degenerate_display() {
        let err = PoseError::degenerate("left elbow");
        assert!(format!("{err}").contains("left elbow"));
        assert_eq!(err.kind(), "degenerate_geometry");
        assert!(!err.is_no_human());
    }

    #[test]
    fn no_human_is_distinguishable() {
        let err = PoseError::NoHumanDetected;
        assert!(err.is_no_human());
        assert_eq!(err.kind(), "no_human_detected");
    }
}
