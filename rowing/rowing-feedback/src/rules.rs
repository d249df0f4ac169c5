//! The coaching rule table.
//!
//! Each entry names the metric it checks, where its limits live in
//! [`ReferenceRanges`], and the wording used when the metric falls outside.

use rowing_angles::Metric;

use crate::{Band, ReferenceRanges};

/// Wording for one side of a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    /// What is wrong, appended to the feedback line.
    pub problem: &'static str,
    /// Corrective suggestion.
    pub suggestion: &'static str,
}

/// Checks a joint angle against an inclusive ideal band.
#[derive(Debug, Clone, Copy)]
pub struct RangeRule {
    /// Metric checked.
    pub metric: Metric,
    /// Subject of the feedback line (e.g. "Left elbow").
    pub subject: &'static str,
    /// Wording when the value is below the band.
    pub below: Advice,
    /// Wording when the value is above the band.
    pub above: Advice,
    band: fn(&ReferenceRanges) -> Band,
}

impl RangeRule {
    /// The band this rule checks against.
    #[must_use]
    pub fn band(&self, ranges: &ReferenceRanges) -> Band {
        (self.band)(ranges)
    }
}

/// Flags a left/right difference strictly above a limit.
#[derive(Debug, Clone, Copy)]
pub struct SymmetryRule {
    /// Metric checked.
    pub metric: Metric,
    /// Subject of the feedback line (e.g. "Elbows").
    pub subject: &'static str,
    /// Wording when the difference exceeds the limit.
    pub advice: Advice,
    threshold: fn(&ReferenceRanges) -> f64,
}

impl SymmetryRule {
    /// The limit this rule checks against.
    #[must_use]
    pub fn threshold(&self, ranges: &ReferenceRanges) -> f64 {
        (self.threshold)(ranges)
    }
}

const ELBOW_BELOW: Advice = Advice {
    problem: "insufficient elbow flexion",
    suggestion: "Extend the arms further and make sure the blade is fully buried at the catch",
};

const ELBOW_ABOVE: Advice = Advice {
    problem: "excessive elbow flexion",
    suggestion: "Bend the arms less and keep the forearms parallel to the oar shaft",
};

const KNEE_BELOW: Advice = Advice {
    problem: "insufficient leg drive",
    suggestion: "Drive harder through the legs and push them down fully",
};

const KNEE_ABOVE: Advice = Advice {
    problem: "knee over-extension",
    suggestion: "Control the leg drive and avoid locking the knees",
};

const fn elbow_band(ranges: &ReferenceRanges) -> Band {
    ranges.elbow
}

const fn knee_band(ranges: &ReferenceRanges) -> Band {
    ranges.knee
}

const fn torso_band(ranges: &ReferenceRanges) -> Band {
    ranges.torso
}

const fn elbow_symmetry_max(ranges: &ReferenceRanges) -> f64 {
    ranges.elbow_symmetry_max
}

const fn knee_symmetry_max(ranges: &ReferenceRanges) -> f64 {
    ranges.knee_symmetry_max
}

/// Band checks, in report order.
pub const RANGE_RULES: [RangeRule; 5] = [
    RangeRule {
        metric: Metric::LeftElbowAngle,
        subject: "Left elbow",
        below: ELBOW_BELOW,
        above: ELBOW_ABOVE,
        band: elbow_band,
    },
    RangeRule {
        metric: Metric::RightElbowAngle,
        subject: "Right elbow",
        below: ELBOW_BELOW,
        above: ELBOW_ABOVE,
        band: elbow_band,
    },
    RangeRule {
        metric: Metric::LeftKneeAngle,
        subject: "Left knee",
        below: KNEE_BELOW,
        above: KNEE_ABOVE,
        band: knee_band,
    },
    RangeRule {
        metric: Metric::RightKneeAngle,
        subject: "Right knee",
        below: KNEE_BELOW,
        above: KNEE_ABOVE,
        band: knee_band,
    },
    RangeRule {
        metric: Metric::TorsoLean,
        subject: "Torso lean",
        below: Advice {
            problem: "insufficient forward lean",
            suggestion: "Lean further forward from the hips to engage the core",
        },
        above: Advice {
            problem: "excessive forward lean",
            suggestion: "Keep the back straight and avoid rounding the lower back",
        },
        band: torso_band,
    },
];

/// Asymmetry checks, evaluated after the band checks.
pub const SYMMETRY_RULES: [SymmetryRule; 2] = [
    SymmetryRule {
        metric: Metric::ElbowSymmetry,
        subject: "Elbows",
        advice: Advice {
            problem: "asymmetric left to right",
            suggestion: "Train the weaker arm to balance strength on both sides",
        },
        threshold: elbow_symmetry_max,
    },
    SymmetryRule {
        metric: Metric::KneeSymmetry,
        subject: "Knees",
        advice: Advice {
            problem: "asymmetric left to right",
            suggestion: "Check leg-drive balance to keep your weight centred",
        },
        threshold: knee_symmetry_max,
    },
];

/// Suggestion given when every metric is within range.
pub const FALLBACK_SUGGESTION: &str =
    "Form is standard, maintain it; consider increasing training intensity";
