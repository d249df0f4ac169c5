//! Body landmark types for rowing pose analysis.
//!
//! This crate provides the foundational input types shared by the rowing
//! analysis crates:
//! - [`Landmark`] - The 33-point body landmark vocabulary
//! - [`LandmarkMap`] - A read-only map from landmark to 3D position
//! - [`parse_payload`] - Decoding of the JSON payload produced by a pose
//!   detector (`{"landmarks": {"LEFT_SHOULDER": ["0.07", "-0.47", "-0.08"], ...}}`)
//! - [`PoseError`] - The error kinds every stage of the analysis reports
//!
//! # Layer 0 Crate
//!
//! This crate has no rendering or detection dependencies. Landmark extraction
//! from images is delegated to an external detector; this crate only consumes
//! its output.
//!
//! # Coordinate System
//!
//! Coordinates are in an arbitrary normalized unit. The analysis treats `y` as
//! the vertical axis and `x` as the left/right (sagittal plane normal) axis.
//!
//! # Example
//!
//! ```
//! use rowing_types::{Landmark, parse_payload};
//!
//! let json = r#"{"landmarks": {"LEFT_KNEE": ["0.24591", "0.32195", "-0.16415"]}}"#;
//! let map = parse_payload(json).unwrap();
//!
//! let knee = map.get(Landmark::LeftKnee).unwrap();
//! assert!((knee.y - 0.32195).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod landmark;
mod map;
mod payload;

pub use error::{PoseError, PoseResult};
pub use landmark::{Landmark, Side};
pub use map::LandmarkMap;
pub use payload::{decode_landmarks, parse_payload};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
