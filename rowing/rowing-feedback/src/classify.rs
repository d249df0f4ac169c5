//! Rule-based classification of a stroke analysis.

use rowing_angles::{Metric, StrokeAnalysis};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ReferenceRanges;
use crate::rules::{FALLBACK_SUGGESTION, RANGE_RULES, SYMMETRY_RULES};

/// Outcome of checking one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Below the ideal band.
    Below,
    /// Within the ideal band.
    Ideal,
    /// Above the ideal band.
    Above,
    /// Left/right difference over the limit.
    Asymmetric,
}

/// A single checked metric and what was said about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Metric checked.
    pub metric: Metric,
    /// Value that was checked.
    pub value: f64,
    /// How it compared to its reference.
    pub verdict: Verdict,
    /// Feedback line.
    pub message: String,
    /// Corrective suggestion, if one is warranted.
    pub suggestion: Option<String>,
}

/// Feedback and suggestions for one stroke analysis.
///
/// `feedback` has one line per band check plus one per flagged asymmetry.
/// `suggestions` has one entry per out-of-range metric in the same order, or
/// the single fallback entry when nothing is out of range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    /// Feedback lines, in report order.
    pub feedback: Vec<String>,
    /// Numbered coaching suggestions, in report order.
    pub suggestions: Vec<String>,
    /// The typed findings behind `feedback`.
    #[serde(skip)]
    pub findings: Vec<Finding>,
}

impl Feedback {
    /// Returns `true` if no metric needed correcting.
    #[must_use]
    pub fn is_ideal(&self) -> bool {
        self.findings.iter().all(|f| f.suggestion.is_none())
    }

    /// Findings that produced a suggestion.
    pub fn corrections(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.suggestion.is_some())
    }
}

/// Classify a stroke analysis against reference ranges.
///
/// Band checks are inclusive at both ends; asymmetry checks flag only a
/// difference strictly greater than the limit. Never fails: any value,
/// including one outside `[0, 180]`, goes through the same comparisons.
///
/// # Example
///
/// ```
/// use rowing_angles::StrokeAnalysis;
/// use rowing_feedback::{ReferenceRanges, classify};
///
/// let analysis = StrokeAnalysis {
///     left_elbow_angle: 79.9,
///     right_elbow_angle: 80.0,
///     left_knee_angle: 145.0,
///     right_knee_angle: 145.0,
///     torso_lean: 25.0,
///     elbow_symmetry: 0.1,
///     knee_symmetry: 0.0,
/// };
///
/// let feedback = classify(&analysis, &ReferenceRanges::default());
/// assert!(feedback.feedback[0].contains("below ideal (79.9° < 80°)"));
/// assert!(feedback.feedback[1].contains("ideal (80.0°)"));
/// assert_eq!(feedback.suggestions.len(), 1);
/// ```
#[must_use]
pub fn classify(analysis: &StrokeAnalysis, ranges: &ReferenceRanges) -> Feedback {
    let mut findings = Vec::with_capacity(RANGE_RULES.len() + SYMMETRY_RULES.len());

    for rule in &RANGE_RULES {
        let value = analysis.get(rule.metric);
        let band = rule.band(ranges);
        let finding = if value < band.low {
            Finding {
                metric: rule.metric,
                value,
                verdict: Verdict::Below,
                message: format!(
                    "{} below ideal ({value:.1}° < {}°): {}",
                    rule.subject, band.low, rule.below.problem
                ),
                suggestion: Some(rule.below.suggestion.to_string()),
            }
        } else if value > band.high {
            Finding {
                metric: rule.metric,
                value,
                verdict: Verdict::Above,
                message: format!(
                    "{} above ideal ({value:.1}° > {}°): {}",
                    rule.subject, band.high, rule.above.problem
                ),
                suggestion: Some(rule.above.suggestion.to_string()),
            }
        } else {
            Finding {
                metric: rule.metric,
                value,
                verdict: Verdict::Ideal,
                message: format!("{} ideal ({value:.1}°)", rule.subject),
                suggestion: None,
            }
        };
        findings.push(finding);
    }

    for rule in &SYMMETRY_RULES {
        let value = analysis.get(rule.metric);
        let threshold = rule.threshold(ranges);
        if value > threshold {
            findings.push(Finding {
                metric: rule.metric,
                value,
                verdict: Verdict::Asymmetric,
                message: format!(
                    "{} {} ({value:.1}° > {threshold}°)",
                    rule.subject, rule.advice.problem
                ),
                suggestion: Some(rule.advice.suggestion.to_string()),
            });
        }
    }

    let feedback = findings.iter().map(|f| f.message.clone()).collect();
    let mut suggestions: Vec<String> = findings
        .iter()
        .filter_map(|f| f.suggestion.clone())
        .collect();
    if suggestions.is_empty() {
        suggestions.push(FALLBACK_SUGGESTION.to_string());
    }

    debug!(
        findings = findings.len(),
        corrections = suggestions.len(),
        "classified stroke analysis"
    );

    Feedback {
        feedback,
        suggestions,
        findings,
    }
}
