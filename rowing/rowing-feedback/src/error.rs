//! Error types for feedback configuration.

use thiserror::Error;

/// Result type alias for feedback operations.
pub type FeedbackResult<T> = Result<T, FeedbackError>;

/// Errors raised while building or loading reference ranges.
///
/// Classification itself never fails; these only guard configuration.
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// A band is empty or has a non-finite bound.
    #[error("invalid band for {metric}: [{low}, {high}]")]
    InvalidBand {
        /// Band name (e.g. `elbow`).
        metric: String,
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },

    /// A symmetry threshold is negative or not finite.
    #[error("invalid threshold for {metric}: {value}")]
    InvalidThreshold {
        /// Threshold name (e.g. `elbow_symmetry_max`).
        metric: String,
        /// Offending value.
        value: f64,
    },

    /// Reference range overrides could not be parsed.
    #[error("invalid reference ranges: {0}")]
    InvalidConfig(String),
}

impl FeedbackError {
    /// Create an invalid band error.
    #[must_use]
    pub fn invalid_band(metric: impl Into<String>, low: f64, high: f64) -> Self {
        Self::InvalidBand {
            metric: metric.into(),
            low,
            high,
        }
    }

    /// Create an invalid threshold error.
    #[must_use]
    pub fn invalid_threshold(metric: impl Into<String>, value: f64) -> Self {
        Self::InvalidThreshold {
            metric: metric.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedbackError::invalid_band("knee", 160.0, 130.0);
        let msg = format!("{err}");
        assert!(msg.contains("knee"));
        assert!(msg.contains("[160, 130]"));

        let err = FeedbackError::invalid_threshold("elbow_symmetry_max", -1.0);
        assert!(format!("{err}").contains("-1"));

        let err = FeedbackError::InvalidConfig("expected value".to_string());
        assert!(format!("{err}").contains("expected value"));
    }
}
