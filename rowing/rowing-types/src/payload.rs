//! Decoding of pose detector JSON payloads.
//!
//! The detector emits `{"landmarks": {NAME: [x, y, z], ...}}` where each
//! coordinate is either a JSON number or a numeric string. When nobody is in
//! frame it emits `{"error": "..."}` or a null/empty landmark set instead.

use nalgebra::Point3;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{Landmark, LandmarkMap, PoseError, PoseResult};

const LANDMARKS_KEY: &str = "landmarks";
const ERROR_KEY: &str = "error";

/// Parses a detector payload into a [`LandmarkMap`].
///
/// Names outside the landmark vocabulary are skipped. Every coordinate of a
/// recognized landmark is validated, whether or not the analysis uses it.
///
/// # Errors
///
/// - [`PoseError::NoHumanDetected`] if the payload carries no landmarks.
/// - [`PoseError::MalformedInput`] for invalid JSON, a missing `landmarks`
///   key, a coordinate list that is not three long, or a coordinate that is
///   not a finite number.
///
/// A JSON number literal outside the `f64` range (e.g. `1e400`) is rejected
/// by the JSON parser itself, so its error names the `payload` field rather
/// than the coordinate. The same value written as a string (`"1e400"`)
/// parses to infinity and is reported against its coordinate.
///
/// # Example
///
/// ```
/// use rowing_types::{PoseError, parse_payload};
///
/// let err = parse_payload(r#"{"landmarks": null}"#).unwrap_err();
/// assert_eq!(err, PoseError::NoHumanDetected);
/// ```
pub fn parse_payload(text: &str) -> PoseResult<LandmarkMap> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| PoseError::malformed("payload", e.to_string()))?;
    decode_landmarks(&value)
}

/// Decodes an already-parsed detector payload.
///
/// # Errors
///
/// Same as [`parse_payload`], minus JSON syntax errors.
pub fn decode_landmarks(value: &Value) -> PoseResult<LandmarkMap> {
    let Some(payload) = value.as_object() else {
        return Err(PoseError::malformed("payload", "expected a JSON object"));
    };

    let entries = match payload.get(LANDMARKS_KEY) {
        Some(Value::Object(entries)) if !entries.is_empty() => entries,
        Some(Value::Object(_) | Value::Null) => return Err(PoseError::NoHumanDetected),
        Some(_) => {
            return Err(PoseError::malformed(
                LANDMARKS_KEY,
                "expected an object of landmark coordinates",
            ));
        }
        None => {
            if let Some(message) = payload.get(ERROR_KEY) {
                warn!(%message, "detector reported no landmarks");
                return Err(PoseError::NoHumanDetected);
            }
            return Err(PoseError::malformed(LANDMARKS_KEY, "key is missing"));
        }
    };

    let map = decode_entries(entries)?;
    debug!(landmarks = map.len(), "decoded landmark payload");
    Ok(map)
}

fn decode_entries(entries: &Map<String, Value>) -> PoseResult<LandmarkMap> {
    let mut points = Vec::with_capacity(entries.len());
    for (name, coords) in entries {
        let Ok(landmark) = name.parse::<Landmark>() else {
            warn!(name = %name, "ignoring unknown landmark");
            continue;
        };
        points.push((landmark, decode_point(name, coords)?));
    }
    Ok(points.into_iter().collect())
}

fn decode_point(name: &str, coords: &Value) -> PoseResult<Point3<f64>> {
    let Some(items) = coords.as_array() else {
        return Err(PoseError::malformed(name, "expected an [x, y, z] array"));
    };
    if items.len() != 3 {
        return Err(PoseError::malformed(
            name,
            format!("expected 3 coordinates, got {}", items.len()),
        ));
    }

    let mut xyz = [0.0; 3];
    for (axis, (slot, item)) in xyz.iter_mut().zip(items).enumerate() {
        *slot = decode_coordinate(item).map_err(|reason| {
            PoseError::malformed(format!("{name}[{axis}]"), reason)
        })?;
    }
    Ok(Point3::from(xyz))
}

fn decode_coordinate(item: &Value) -> Result<f64, String> {
    let value = match item {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| format!("{n} is not representable as f64"))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("{s:?} is not a number"))?,
        other => return Err(format!("expected a number, got {other}")),
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{value} is not finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_string_coordinates() {
        let map = parse_payload(
            r#"{"landmarks": {"LEFT_KNEE": ["0.24591", "0.32195", "-0.16415"]}}"#,
        )
        .unwrap();
        let knee = map.get(Landmark::LeftKnee).unwrap();
        assert_relative_eq!(knee.x, 0.24591);
        assert_relative_eq!(knee.y, 0.32195);
        assert_relative_eq!(knee.z, -0.16415);
    }

    #[test]
    fn parses_numeric_coordinates() {
        let map = parse_payload(r#"{"landmarks": {"NOSE": [1, -2.5, 3e-1]}}"#).unwrap();
        let nose = map.get(Landmark::Nose).unwrap();
        assert_relative_eq!(nose.x, 1.0);
        assert_relative_eq!(nose.y, -2.5);
        assert_relative_eq!(nose.z, 0.3);
    }

    #[test]
    fn skips_unknown_names() {
        let map = parse_payload(
            r#"{"landmarks": {"NOSE": [0, 0, 0], "TAIL": ["x", "y", "z"]}}"#,
        )
        .unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn null_or_empty_landmarks_mean_no_human() {
        assert_eq!(
            parse_payload(r#"{"landmarks": null}"#),
            Err(PoseError::NoHumanDetected)
        );
        assert_eq!(
            parse_payload(r#"{"landmarks": {}}"#),
            Err(PoseError::NoHumanDetected)
        );
        assert_eq!(
            parse_payload(r#"{"error": "No human detected in the image."}"#),
            Err(PoseError::NoHumanDetected)
        );
    }

    #[test]
    fn missing_landmarks_key_is_malformed() {
        let err = parse_payload(r#"{"points": {}}"#).unwrap_err();
        assert_eq!(err.kind(), "malformed_input");
        assert!(format!("{err}").contains("landmarks"));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse_payload("{\"landmarks\": ").unwrap_err();
        assert_eq!(err.kind(), "malformed_input");

        let err = parse_payload("[1, 2, 3]").unwrap_err();
        assert_eq!(err.kind(), "malformed_input");
    }

    #[test]
    fn bad_coordinate_names_the_field() {
        let err =
            parse_payload(r#"{"landmarks": {"LEFT_KNEE": ["0.1", "abc", "0.3"]}}"#).unwrap_err();
        match err {
            PoseError::MalformedInput { field, reason } => {
                assert_eq!(field, "LEFT_KNEE[1]");
                assert!(reason.contains("abc"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_finite_coordinate_is_malformed() {
        let err =
            parse_payload(r#"{"landmarks": {"LEFT_HIP": ["NaN", "0", "0"]}}"#).unwrap_err();
        assert_eq!(err.kind(), "malformed_input");

        let err =
            parse_payload(r#"{"landmarks": {"LEFT_HIP": ["0", "inf", "0"]}}"#).unwrap_err();
        assert_eq!(err.kind(), "malformed_input");
    }

    #[test]
    fn out_of_range_number_is_malformed() {
        let literal = r#"{"landmarks": {"LEFT_HIP": [1e400, 0, 0]}}"#;
        let err = parse_payload(literal).unwrap_err();
        assert_eq!(err.kind(), "malformed_input");
        assert!(format!("{err}").contains("`payload`"));

        let quoted = r#"{"landmarks": {"LEFT_HIP": ["1e400", "0", "0"]}}"#;
        let err = parse_payload(quoted).unwrap_err();
        assert!(format!("{err}").contains("LEFT_HIP[0]"));
    }

    #[test]
    fn wrong_arity_is_malformed() {
        let err = parse_payload(r#"{"landmarks": {"LEFT_HIP": [0, 0]}}"#).unwrap_err();
        assert!(format!("{err}").contains("got 2"));

        let err = parse_payload(r#"{"landmarks": {"LEFT_HIP": "0,0,0"}}"#).unwrap_err();
        assert_eq!(err.kind(), "malformed_input");
    }

    #[test]
    fn non_numeric_json_type_is_malformed() {
        let err = parse_payload(r#"{"landmarks": {"LEFT_HIP": [0, true, 0]}}"#).unwrap_err();
        assert!(format!("{err}").contains("LEFT_HIP[1]"));
    }
}
