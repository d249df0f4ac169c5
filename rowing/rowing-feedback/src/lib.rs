//! Coaching feedback for the rowing stroke.
//!
//! This crate checks a [`StrokeAnalysis`](rowing_angles::StrokeAnalysis)
//! against biomechanical reference ranges and produces feedback lines and
//! corrective suggestions.
//!
//! # Rules
//!
//! | Metric | Ideal band | Check |
//! |---|---|---|
//! | Left/right elbow angle | 80–120° | inclusive band |
//! | Left/right knee angle | 130–160° | inclusive band |
//! | Torso lean | 20–30° | inclusive band |
//! | Elbow symmetry | ≤ 15° | flagged when strictly greater |
//! | Knee symmetry | ≤ 10° | flagged when strictly greater |
//!
//! The rules live in a single table; limits come from [`ReferenceRanges`],
//! which can be overridden from JSON.
//!
//! # Example
//!
//! ```
//! use rowing_angles::StrokeAnalysis;
//! use rowing_feedback::{ReferenceRanges, classify};
//!
//! let analysis = StrokeAnalysis {
//!     left_elbow_angle: 100.0,
//!     right_elbow_angle: 102.0,
//!     left_knee_angle: 150.0,
//!     right_knee_angle: 148.5,
//!     torso_lean: 24.0,
//!     elbow_symmetry: 2.0,
//!     knee_symmetry: 1.5,
//! };
//!
//! let feedback = classify(&analysis, &ReferenceRanges::default());
//! assert_eq!(feedback.feedback.len(), 5);
//! assert_eq!(feedback.suggestions.len(), 1); // the "keep it up" fallback
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod classify;
mod error;
mod ranges;
mod report;
mod rules;

pub use classify::{Feedback, Finding, Verdict, classify};
pub use error::{FeedbackError, FeedbackResult};
pub use ranges::{Band, ReferenceRanges};
pub use report::{CoachingReport, evaluate};
pub use rules::{Advice, FALLBACK_SUGGESTION, RANGE_RULES, RangeRule, SYMMETRY_RULES, SymmetryRule};
