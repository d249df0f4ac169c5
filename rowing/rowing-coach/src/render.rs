//! Output rendering for evaluated payloads.

use std::fmt::Write as _;

use rowing_feedback::CoachingReport;
use rowing_types::PoseError;
use serde::Serialize;

use crate::Outcome;

/// Human-readable text for one outcome, newline terminated.
pub fn pretty(outcome: &Outcome, labelled: bool) -> String {
    let mut out = String::new();
    if labelled {
        let _ = writeln!(out, "== {} ==", outcome.source);
    }
    match &outcome.result {
        Ok(report) => {
            let _ = writeln!(out, "{report}");
        }
        Err(err) if err.is_no_human() => {
            let _ = writeln!(
                out,
                "error[{}]: no person found in the frame; check camera framing and lighting",
                err.kind()
            );
        }
        Err(err) => {
            let _ = writeln!(out, "error[{}]: {err}", err.kind());
        }
    }
    out
}

#[derive(Serialize)]
struct ErrorEntry {
    kind: &'static str,
    message: String,
}

impl From<&PoseError> for ErrorEntry {
    fn from(err: &PoseError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[derive(Serialize)]
struct Entry<'a> {
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a CoachingReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorEntry>,
}

impl<'a> From<&'a Outcome> for Entry<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        let (report, error) = match &outcome.result {
            Ok(report) => (Some(report), None),
            Err(err) => (None, Some(ErrorEntry::from(err))),
        };
        Self {
            source: &outcome.source,
            report,
            error,
        }
    }
}

/// Pretty-printed JSON: one object for a single outcome, an array otherwise.
pub fn json(outcomes: &[Outcome]) -> serde_json::Result<String> {
    let entries: Vec<Entry<'_>> = outcomes.iter().map(Entry::from).collect();
    match entries.as_slice() {
        [single] => serde_json::to_string_pretty(single),
        _ => serde_json::to_string_pretty(&entries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowing_angles::StrokeAnalysis;
    use rowing_feedback::ReferenceRanges;
    use rowing_types::Landmark;
    use serde_json::Value;

    fn ideal_report() -> CoachingReport {
        let analysis = StrokeAnalysis {
            left_elbow_angle: 100.0,
            right_elbow_angle: 100.0,
            left_knee_angle: 150.0,
            right_knee_angle: 150.0,
            torso_lean: 25.0,
            elbow_symmetry: 0.0,
            knee_symmetry: 0.0,
        };
        CoachingReport::new(analysis, &ReferenceRanges::default())
    }

    fn ok(name: &str) -> Outcome {
        Outcome {
            source: name.to_string(),
            result: Ok(ideal_report()),
        }
    }

    fn failed(name: &str, err: PoseError) -> Outcome {
        Outcome {
            source: name.to_string(),
            result: Err(err),
        }
    }

    #[test]
    fn pretty_report_without_label() {
        let text = pretty(&ok("a.json"), false);
        assert!(!text.contains("== a.json =="));
        assert!(text.contains("Left elbow angle: 100.0°"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn pretty_labels_multiple_sources() {
        let text = pretty(&ok("a.json"), true);
        assert!(text.starts_with("== a.json ==\n"));
    }

    #[test]
    fn pretty_error_carries_kind() {
        let outcome = failed("b", PoseError::MissingLandmark(Landmark::LeftKnee));
        let text = pretty(&outcome, false);
        assert!(text.starts_with("error[missing_landmark]:"));
        assert!(text.contains("LEFT_KNEE"));
    }

    #[test]
    fn pretty_no_human_is_friendly() {
        let text = pretty(&failed("c", PoseError::NoHumanDetected), false);
        assert!(text.starts_with("error[no_human_detected]:"));
        assert!(text.contains("no person found"));
    }

    #[test]
    fn json_single_is_object() {
        let text = json(&[ok("a.json")]).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["source"], "a.json");
        assert_eq!(value["report"]["left_elbow_angle"], 100.0);
        assert!(value["report"]["feedback"].is_array());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn json_many_is_array_in_order() {
        let outcomes = [
            ok("a.json"),
            failed("b.json", PoseError::malformed("landmarks", "expected an object")),
        ];
        let value: Value = serde_json::from_str(&json(&outcomes).unwrap()).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["source"], "a.json");
        assert_eq!(entries[1]["error"]["kind"], "malformed_input");
        assert!(entries[1].get("report").is_none());
    }
}
