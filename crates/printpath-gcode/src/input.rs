//! Segment input boundary.
//!
//! Segment files are JSON. A file holds either an array of segment objects
//! or a single segment object, which is read as a one-element sequence.
//! Everything past this module works on explicit sequences only.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{GcodeError, Result};
use crate::geometry::RawSegment;

#[derive(Deserialize)]
#[serde(untagged)]
enum SegmentInput {
    Many(Vec<RawSegment>),
    One(RawSegment),
}

impl From<SegmentInput> for Vec<RawSegment> {
    fn from(input: SegmentInput) -> Self {
        match input {
            SegmentInput::Many(segments) => segments,
            SegmentInput::One(segment) => vec![segment],
        }
    }
}

/// Parse a segment sequence from JSON.
pub fn parse_segments(json: &str) -> Result<Vec<RawSegment>> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| GcodeError::MalformedInput(e.to_string()))?;

    match &value {
        Value::Array(_) | Value::Object(_) => {}
        other => {
            return Err(GcodeError::MalformedInput(format!(
                "expected a segment or a list of segments, found {}",
                kind_of(other)
            )))
        }
    }

    let input: SegmentInput = serde_json::from_value(value).map_err(|e| {
        GcodeError::MalformedInput(format!("not a segment sequence: {}", e))
    })?;
    Ok(input.into())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
