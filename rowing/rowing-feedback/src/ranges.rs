//! Biomechanical reference ranges for the rowing stroke.

use serde::{Deserialize, Serialize};

use crate::{FeedbackError, FeedbackResult};

/// A closed range of acceptable values, in degrees.
///
/// # Example
///
/// ```
/// use rowing_feedback::Band;
///
/// let band = Band::new(80.0, 120.0);
/// assert!(band.contains(80.0));
/// assert!(band.contains(120.0));
/// assert!(!band.contains(79.9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Smallest ideal value.
    pub low: f64,
    /// Largest ideal value.
    pub high: f64,
}

impl Band {
    /// Creates a band.
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Returns `true` if `value` lies within `[low, high]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    fn validate(&self, name: &str) -> FeedbackResult<()> {
        if self.low.is_finite() && self.high.is_finite() && self.low <= self.high {
            Ok(())
        } else {
            Err(FeedbackError::invalid_band(name, self.low, self.high))
        }
    }
}

/// Ideal bands and asymmetry limits used by the classifier.
///
/// Fields missing from a JSON override fall back to the defaults.
///
/// # Example
///
/// ```
/// use rowing_feedback::ReferenceRanges;
///
/// // Standard rowing ranges
/// let ranges = ReferenceRanges::default();
/// assert!((ranges.elbow.low - 80.0).abs() < 1e-10);
/// assert!((ranges.knee_symmetry_max - 10.0).abs() < 1e-10);
///
/// // Tighter torso band for a coach who wants less lean
/// let strict = ReferenceRanges::default().torso(22.0, 28.0);
/// assert!(strict.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceRanges {
    /// Ideal elbow angle, both sides.
    pub elbow: Band,
    /// Ideal knee angle, both sides.
    pub knee: Band,
    /// Ideal forward lean of the trunk.
    pub torso: Band,
    /// Elbow difference above which the stroke is flagged as asymmetric.
    pub elbow_symmetry_max: f64,
    /// Knee difference above which the stroke is flagged as asymmetric.
    pub knee_symmetry_max: f64,
}

impl Default for ReferenceRanges {
    fn default() -> Self {
        Self {
            elbow: Band::new(80.0, 120.0),
            knee: Band::new(130.0, 160.0),
            torso: Band::new(20.0, 30.0),
            elbow_symmetry_max: 15.0,
            knee_symmetry_max: 10.0,
        }
    }
}

impl ReferenceRanges {
    /// Parse overrides from JSON and validate them.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::InvalidConfig`] if the JSON cannot be parsed,
    /// or the error from [`validate`](Self::validate).
    ///
    /// # Example
    ///
    /// ```
    /// use rowing_feedback::ReferenceRanges;
    ///
    /// let ranges = ReferenceRanges::from_json(r#"{"knee": {"low": 125, "high": 165}}"#).unwrap();
    /// assert!((ranges.knee.low - 125.0).abs() < 1e-10);
    /// assert!((ranges.elbow.low - 80.0).abs() < 1e-10);
    /// ```
    pub fn from_json(text: &str) -> FeedbackResult<Self> {
        let ranges: Self =
            serde_json::from_str(text).map_err(|e| FeedbackError::InvalidConfig(e.to_string()))?;
        ranges.validate()?;
        Ok(ranges)
    }

    /// Check that every band is non-empty and every threshold usable.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::InvalidBand`] or
    /// [`FeedbackError::InvalidThreshold`] for the first bad entry.
    pub fn validate(&self) -> FeedbackResult<()> {
        self.elbow.validate("elbow")?;
        self.knee.validate("knee")?;
        self.torso.validate("torso")?;
        for (name, value) in [
            ("elbow_symmetry_max", self.elbow_symmetry_max),
            ("knee_symmetry_max", self.knee_symmetry_max),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(FeedbackError::invalid_threshold(name, value));
            }
        }
        Ok(())
    }

    /// Set the ideal elbow band.
    #[must_use]
    pub const fn elbow(mut self, low: f64, high: f64) -> Self {
        self.elbow = Band::new(low, high);
        self
    }

    /// Set the ideal knee band.
    #[must_use]
    pub const fn knee(mut self, low: f64, high: f64) -> Self {
        self.knee = Band::new(low, high);
        self
    }

    /// Set the ideal torso lean band.
    #[must_use]
    pub const fn torso(mut self, low: f64, high: f64) -> Self {
        self.torso = Band::new(low, high);
        self
    }

    /// Set the elbow asymmetry limit.
    #[must_use]
    pub const fn elbow_symmetry_max(mut self, degrees: f64) -> Self {
        self.elbow_symmetry_max = degrees;
        self
    }

    /// Set the knee asymmetry limit.
    #[must_use]
    pub const fn knee_symmetry_max(mut self, degrees: f64) -> Self {
        self.knee_symmetry_max = degrees;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_ranges() {
        let ranges = ReferenceRanges::default();
        assert_eq!(ranges.elbow, Band::new(80.0, 120.0));
        assert_eq!(ranges.knee, Band::new(130.0, 160.0));
        assert_eq!(ranges.torso, Band::new(20.0, 30.0));
        assert_relative_eq!(ranges.elbow_symmetry_max, 15.0);
        assert_relative_eq!(ranges.knee_symmetry_max, 10.0);
        assert!(ranges.validate().is_ok());
    }

    #[test]
    fn band_is_inclusive() {
        let band = Band::new(20.0, 30.0);
        assert!(band.contains(20.0));
        assert!(band.contains(30.0));
        assert!(!band.contains(19.9));
        assert!(!band.contains(30.1));
    }

    #[test]
    fn builder_setters() {
        let ranges = ReferenceRanges::default()
            .elbow(70.0, 110.0)
            .knee(120.0, 150.0)
            .torso(15.0, 35.0)
            .elbow_symmetry_max(20.0)
            .knee_symmetry_max(5.0);

        assert_eq!(ranges.elbow, Band::new(70.0, 110.0));
        assert_eq!(ranges.knee, Band::new(120.0, 150.0));
        assert_eq!(ranges.torso, Band::new(15.0, 35.0));
        assert_relative_eq!(ranges.elbow_symmetry_max, 20.0);
        assert_relative_eq!(ranges.knee_symmetry_max, 5.0);
    }

    #[test]
    fn validate_rejects_inverted_band() {
        let err = ReferenceRanges::default().knee(160.0, 130.0).validate();
        assert!(matches!(err, Err(FeedbackError::InvalidBand { .. })));
    }

    #[test]
    fn validate_rejects_non_finite() {
        let err = ReferenceRanges::default().torso(f64::NAN, 30.0).validate();
        assert!(matches!(err, Err(FeedbackError::InvalidBand { .. })));

        let err = ReferenceRanges::default()
            .elbow_symmetry_max(f64::INFINITY)
            .validate();
        assert!(matches!(err, Err(FeedbackError::InvalidThreshold { .. })));

        let err = ReferenceRanges::default().knee_symmetry_max(-1.0).validate();
        assert!(matches!(err, Err(FeedbackError::InvalidThreshold { .. })));
    }

    #[test]
    fn degenerate_band_is_allowed() {
        assert!(ReferenceRanges::default().torso(25.0, 25.0).validate().is_ok());
    }

    #[test]
    fn from_json_partial_override() {
        let json = r#"{"elbow_symmetry_max": 12.5, "torso": {"low": 18, "high": 32}}"#;
        let ranges = ReferenceRanges::from_json(json).unwrap();
        assert_relative_eq!(ranges.elbow_symmetry_max, 12.5);
        assert_eq!(ranges.torso, Band::new(18.0, 32.0));
        assert_eq!(ranges.knee, ReferenceRanges::default().knee);
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = ReferenceRanges::from_json("not json");
        assert!(matches!(err, Err(FeedbackError::InvalidConfig(_))));

        let err = ReferenceRanges::from_json(r#"{"elbow": {"low": 130, "high": 90}}"#);
        assert!(matches!(err, Err(FeedbackError::InvalidBand { .. })));
    }

    #[test]
    fn from_json_empty_object_is_default() {
        let ranges = ReferenceRanges::from_json("{}").unwrap();
        assert_eq!(ranges, ReferenceRanges::default());
    }
}
