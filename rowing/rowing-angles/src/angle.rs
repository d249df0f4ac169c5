//! Angle primitives.

use nalgebra::{Point3, Vector3};
use rowing_types::{PoseError, PoseResult};

/// Compute the angle ∠ABC at vertex `b`, in degrees.
///
/// The angle is between the rays `b → a` and `b → c` and lies in `[0, 180]`.
///
/// # Errors
///
/// - [`PoseError::DegenerateGeometry`] if `a` or `c` coincides with `b`.
/// - [`PoseError::MalformedInput`] if any coordinate, or the difference of
///   two points, is not finite.
///
/// # Example
///
/// ```
/// use rowing_angles::vertex_angle;
/// use nalgebra::Point3;
///
/// // Straight arm: shoulder, elbow and wrist on one line
/// let angle = vertex_angle(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 2.0, 0.0),
/// )
/// .unwrap();
/// assert!((angle - 180.0).abs() < 1e-10);
/// ```
pub fn vertex_angle(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> PoseResult<f64> {
    angle_at(b, a, c, "vertex angle")
}

/// Compute the forward lean of the trunk, in degrees.
///
/// The reference point is `(shoulder.x, 1, shoulder.z)`: directly above or
/// below the shoulder at height 1. The lean is the angle at the shoulder
/// between the hip and that reference point, so a small value means an
/// upright trunk in a y-down frame with the shoulder below `y = 1`.
///
/// # Errors
///
/// - [`PoseError::DegenerateGeometry`] if the hip coincides with the shoulder
///   or the shoulder sits exactly at `y = 1`.
/// - [`PoseError::MalformedInput`] if any coordinate, or the difference of
///   two points, is not finite.
///
/// # Example
///
/// ```
/// use rowing_angles::torso_lean;
/// use nalgebra::Point3;
///
/// let shoulder = Point3::new(0.0, -0.5, 0.0);
/// let hip = Point3::new(0.5, 0.0, 0.0);
/// let lean = torso_lean(shoulder, hip).unwrap();
/// assert!((lean - 45.0).abs() < 1e-10);
/// ```
pub fn torso_lean(shoulder: Point3<f64>, hip: Point3<f64>) -> PoseResult<f64> {
    let reference = Point3::new(shoulder.x, 1.0, shoulder.z);
    angle_at(shoulder, hip, reference, "torso lean")
}

/// Round to one decimal place, halves away from zero.
///
/// # Example
///
/// ```
/// use rowing_angles::round_to_tenth;
///
/// assert!((round_to_tenth(167.958) - 168.0).abs() < 1e-12);
/// assert!((round_to_tenth(-0.25) + 0.3).abs() < 1e-12);
/// ```
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Angle at `vertex` between the rays towards `a` and `c`.
pub(crate) fn angle_at(
    vertex: Point3<f64>,
    a: Point3<f64>,
    c: Point3<f64>,
    context: &str,
) -> PoseResult<f64> {
    if ![a, vertex, c]
        .iter()
        .all(|p| p.coords.iter().all(|v| v.is_finite()))
    {
        return Err(PoseError::malformed(context, "coordinate is not finite"));
    }

    let ba = a - vertex;
    let bc = c - vertex;
    if !ba.iter().chain(bc.iter()).all(|v| v.is_finite()) {
        return Err(PoseError::malformed(
            context,
            "coordinates too far apart to compare",
        ));
    }

    let (Some(ba), Some(bc)) = (unit_ray(ba), unit_ray(bc)) else {
        return Err(PoseError::degenerate(format!(
            "{context}: coincident points leave the angle undefined"
        )));
    };

    // Rounding can push the cosine a hair outside [-1, 1]
    let cosine = ba.dot(&bc).clamp(-1.0, 1.0);
    Ok(cosine.acos().to_degrees())
}

/// Direction of `ray` as a unit vector, or `None` for a zero-length ray.
///
/// The ray is scaled by its largest component before measuring, so squaring
/// never overflows or underflows for finite input.
fn unit_ray(ray: Vector3<f64>) -> Option<Vector3<f64>> {
    let scale = ray.amax();
    if scale <= 0.0 {
        return None;
    }
    let scaled = ray / scale;
    let scaled_len = scaled.norm();
    if scaled_len * scale < f64::EPSILON {
        return None;
    }
    Some(scaled / scaled_len)
}
