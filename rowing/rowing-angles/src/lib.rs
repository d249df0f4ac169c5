//! Joint angle extraction for rowing stroke analysis.
//!
//! This crate turns a [`LandmarkMap`](rowing_types::LandmarkMap) into a
//! [`StrokeAnalysis`]: elbow and knee angles for both sides, torso lean, and
//! left/right symmetry.
//!
//! # Features
//!
//! - **Vertex angles**: The angle at a joint between its two adjacent segments
//! - **Torso lean**: Trunk angle relative to a vertical reference
//! - **Symmetry**: Absolute left/right difference of paired joint angles
//!
//! # Example
//!
//! ```
//! use rowing_angles::vertex_angle;
//! use nalgebra::Point3;
//!
//! let angle = vertex_angle(
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::origin(),
//!     Point3::new(0.0, 1.0, 0.0),
//! )
//! .unwrap();
//! assert!((angle - 90.0).abs() < 1e-10);
//! ```
//!
//! # Rounding
//!
//! Every field of a [`StrokeAnalysis`] is rounded to one decimal place. The
//! symmetry fields are differenced from the unrounded side angles and rounded
//! afterwards, so they never carry double-rounding error.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod analysis;
mod angle;
mod joint;
mod metric;

pub use analysis::{StrokeAnalysis, analyze_pose};
pub use angle::{round_to_tenth, torso_lean, vertex_angle};
pub use joint::{JOINT_ANGLES, JointAngle};
pub use metric::Metric;
