//! String-in, string-out conversions in either direction.
//!
//! [`to_json`] and [`to_outline`] return typed errors. [`convert`] is the
//! boundary used by front ends that only care about "some text to display":
//! it never fails and substitutes the per-direction sentinel instead.

use std::fmt;
use std::str::FromStr;

use crate::error::{GdobError, Result, INVALID_FORMAT, INVALID_JSON};
use crate::parser::{parse_with, BOM};
use crate::serializer::serialize_with;
use crate::value::Value;

/// Nesting limit applied when no [`Options`] are given.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Which engine a conversion runs through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Outline text to JSON.
    ToJson,
    /// JSON to outline text.
    ToOutline,
}

impl Direction {
    /// The fixed text rendered in place of a failed conversion.
    ///
    /// Each direction has exactly one failure output, whatever the cause.
    pub fn sentinel(self) -> &'static str {
        match self {
            Direction::ToJson => INVALID_FORMAT,
            Direction::ToOutline => INVALID_JSON,
        }
    }
}

impl FromStr for Direction {
    type Err = GdobError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "to-json" | "json" => Ok(Direction::ToJson),
            "to-outline" | "outline" | "to-text" | "text" => Ok(Direction::ToOutline),
            other => Err(GdobError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ToJson => f.write_str("to-json"),
            Direction::ToOutline => f.write_str("to-outline"),
        }
    }
}

/// Layout of the JSON produced by the forward direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Two-space indented.
    #[default]
    Pretty,
    /// Single line, no whitespace.
    Compact,
}

/// Knobs shared by both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of containers open at once, root included.
    pub max_depth: usize,
    pub json_style: JsonStyle,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            json_style: JsonStyle::Pretty,
        }
    }
}

/// Convert outline text into pretty-printed JSON.
///
/// Blank input yields an empty string.
///
/// # Example
/// ```
/// let json = gdob_core::to_json("Line one\nLine two|\nAnother|").unwrap();
/// assert_eq!(json, "[\n  \"Line one\\nLine two\",\n  \"Another\"\n]");
/// ```
pub fn to_json(text: &str) -> Result<String> {
    to_json_with(text, &Options::default())
}

/// Convert outline text into JSON laid out per `options.json_style`.
pub fn to_json_with(text: &str, options: &Options) -> Result<String> {
    let Some(value) = parse_with(text, options)? else {
        return Ok(String::new());
    };
    let json = match options.json_style {
        JsonStyle::Pretty => serde_json::to_string_pretty(&value)?,
        JsonStyle::Compact => serde_json::to_string(&value)?,
    };
    Ok(json)
}

/// Convert a JSON document into outline text.
///
/// Blank input, a `null` root and scalar roots all yield an empty string.
pub fn to_outline(json: &str) -> Result<String> {
    to_outline_with(json, &Options::default())
}

/// Convert a JSON document into outline text, honouring `options.max_depth`.
///
/// A leading byte-order mark is ignored.
pub fn to_outline_with(json: &str, options: &Options) -> Result<String> {
    let json = json.strip_prefix(BOM).unwrap_or(json);
    if json.trim().is_empty() {
        return Ok(String::new());
    }
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    match Value::from_json(parsed) {
        Some(value) => serialize_with(&value, options),
        None => Ok(String::new()),
    }
}

/// Run one conversion and always hand back displayable text.
///
/// Failures are replaced by [`INVALID_FORMAT`](crate::INVALID_FORMAT) or
/// [`INVALID_JSON`](crate::INVALID_JSON) depending on `direction`; a partial
/// result is never returned.
pub fn convert(text: &str, direction: Direction, options: &Options) -> String {
    let result = match direction {
        Direction::ToJson => to_json_with(text, options),
        Direction::ToOutline => to_outline_with(text, options),
    };
    result.unwrap_or_else(|err| {
        tracing::warn!(%direction, error = %err, "conversion failed");
        direction.sentinel().to_string()
    })
}
