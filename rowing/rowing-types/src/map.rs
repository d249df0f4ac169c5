//! Read-only landmark position maps.

use hashbrown::HashMap;
use nalgebra::Point3;

use crate::{Landmark, PoseError, PoseResult};

/// Positions of the landmarks captured for a single pose.
///
/// A map is assembled once (from a payload, an iterator, or the [`with`]
/// builder) and is only read afterwards.
///
/// [`with`]: LandmarkMap::with
///
/// # Example
///
/// ```
/// use rowing_types::{Landmark, LandmarkMap, Point3};
///
/// let map = LandmarkMap::new()
///     .with(Landmark::LeftHip, Point3::new(0.09, -0.01, -0.07))
///     .with(Landmark::LeftKnee, Point3::new(0.25, 0.32, -0.16));
///
/// assert_eq!(map.len(), 2);
/// assert!(map.require(Landmark::LeftKnee).is_ok());
/// assert!(map.require(Landmark::LeftAnkle).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkMap {
    points: HashMap<Landmark, Point3<f64>>,
}

impl LandmarkMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map with `landmark` placed at `position`.
    ///
    /// A later position for the same landmark replaces the earlier one.
    #[must_use]
    pub fn with(mut self, landmark: Landmark, position: Point3<f64>) -> Self {
        self.points.insert(landmark, position);
        self
    }

    /// Number of landmarks present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no landmarks are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if `landmark` is present.
    #[must_use]
    pub fn contains(&self, landmark: Landmark) -> bool {
        self.points.contains_key(&landmark)
    }

    /// Position of `landmark`, if present.
    #[must_use]
    pub fn get(&self, landmark: Landmark) -> Option<Point3<f64>> {
        self.points.get(&landmark).copied()
    }

    /// Position of `landmark`.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::MissingLandmark`] if it is absent.
    pub fn require(&self, landmark: Landmark) -> PoseResult<Point3<f64>> {
        self.get(landmark)
            .ok_or(PoseError::MissingLandmark(landmark))
    }

    /// Required landmarks that are absent, in [`Landmark::REQUIRED`] order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<Landmark> {
        Landmark::REQUIRED
            .iter()
            .copied()
            .filter(|landmark| !self.contains(*landmark))
            .collect()
    }

    /// Checks that every required landmark is present.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::MissingLandmark`] naming the first absent landmark.
    pub fn check_required(&self) -> PoseResult<()> {
        match self.missing_required().first() {
            Some(&landmark) => Err(PoseError::MissingLandmark(landmark)),
            None => Ok(()),
        }
    }

    /// Iterates over the present landmarks in detector order.
    pub fn iter(&self) -> impl Iterator<Item = (Landmark, Point3<f64>)> + '_ {
        Landmark::ALL
            .iter()
            .filter_map(|&landmark| self.get(landmark).map(|p| (landmark, p)))
    }

    /// Reflects the pose across the sagittal plane.
    ///
    /// Negates `x` and swaps every landmark with its left/right counterpart,
    /// producing the mirror-image subject.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        self.points
            .iter()
            .map(|(&landmark, p)| (landmark.mirror(), Point3::new(-p.x, p.y, p.z)))
            .collect()
    }
}

impl FromIterator<(Landmark, Point3<f64>)> for LandmarkMap {
    fn from_iter<I: IntoIterator<Item = (Landmark, Point3<f64>)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
