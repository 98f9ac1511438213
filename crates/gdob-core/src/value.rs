//! Value tree shared by the parser and the serializer, plus the scalar tag encoding.
//!
//! The outline notation has only one native scalar type (text), so numbers and
//! booleans carry a tag prefix on the way in and get it re-applied on the way out:
//!
//! | Value            | Outline form      |
//! |------------------|-------------------|
//! | `Number(5.0)`    | `#5`              |
//! | `Boolean(true)`  | `@true`           |
//! | `String("Bob")`  | `Bob`             |
//!
//! Objects are stored as `Vec<(String, Value)>` so insertion order is kept
//! without reaching for an ordered map type.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Line prefix introducing an object field (`- key: value`).
pub(crate) const STRUCT_MARKER: &str = "- ";
/// Separates a key from its scalar value.
pub(crate) const KEY_SEPARATOR: &str = ": ";
/// Suffix on a container-opening key that makes the container an array.
pub(crate) const ARRAY_SUFFIX: &str = "[]";
/// Closes one array element, possibly after several buffered lines.
pub(crate) const TERMINATOR: char = '|';

const NUMBER_TAG: char = '#';
const TRUE_TAG: &str = "@true";
const FALSE_TAG: &str = "@false";

/// Largest integer an IEEE double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
/// Magnitude from which JavaScript prints whole numbers in exponent form.
const EXPONENT_FORM_FROM: f64 = 1e21;

/// A node in a converted document.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    /// Key-value pairs in insertion order. Keys are unique.
    Object(Vec<(String, Value)>),
    Array(Vec<Value>),
}

impl Value {
    /// Empty object container.
    pub fn object() -> Self {
        Value::Object(Vec::new())
    }

    /// Empty array container.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// True for `Object` and `Array`.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up an object field by key. `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Short lowercase name of the variant, for log and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }

    /// Add `child` to this container.
    ///
    /// Objects set `key` (an existing key keeps its position and gets the new
    /// value); arrays append and ignore the key. Scalars are left untouched.
    pub fn insert(&mut self, key: String, child: Value) {
        match self {
            Value::Object(fields) => match fields.iter_mut().find(|(k, _)| *k == key) {
                Some((_, slot)) => *slot = child,
                None => fields.push((key, child)),
            },
            Value::Array(items) => items.push(child),
            _ => {}
        }
    }

    /// Build a value from parsed JSON.
    ///
    /// `null` has no counterpart: the root returns `None`, an object field
    /// becomes the text `"null"` and an array element is dropped.
    pub fn from_json(json: serde_json::Value) -> Option<Value> {
        use serde_json::Value as Json;
        match json {
            Json::Null => None,
            Json::Bool(b) => Some(Value::Boolean(b)),
            Json::Number(n) => n.as_f64().map(Value::Number),
            Json::String(s) => Some(Value::String(s)),
            Json::Array(items) => Some(Value::Array(
                items.into_iter().filter_map(Value::from_json).collect(),
            )),
            Json::Object(map) => Some(Value::Object(
                map.into_iter()
                    .map(|(k, v)| {
                        let v = Value::from_json(v).unwrap_or_else(|| Value::from("null"));
                        (k, v)
                    })
                    .collect(),
            )),
        }
    }

    /// Scalar text with its type tag applied (`#5`, `@true`, `Bob`).
    /// `None` for containers.
    pub fn tagged_scalar(&self) -> Option<String> {
        match self {
            Value::Number(n) => Some(format!("{NUMBER_TAG}{}", format_number(*n))),
            Value::Boolean(true) => Some(TRUE_TAG.to_string()),
            Value::Boolean(false) => Some(FALSE_TAG.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Object(_) | Value::Array(_) => None,
        }
    }

    /// Scalar text without a type tag, as written for array elements.
    /// `None` for containers.
    pub fn plain_scalar(&self) -> Option<String> {
        match self {
            Value::Number(n) => Some(format_number(*n)),
            Value::Boolean(b) => Some(b.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Object(_) | Value::Array(_) => None,
        }
    }
}

/// Decode the raw text on the right of `key: ` into a scalar.
///
/// Returns `None` when a numeric tag does not hold a finite number.
pub fn decode_scalar(raw: &str) -> Option<Value> {
    if let Some(digits) = raw.strip_prefix(NUMBER_TAG) {
        return digits
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Value::Number);
    }
    match raw {
        TRUE_TAG => Some(Value::Boolean(true)),
        FALSE_TAG => Some(Value::Boolean(false)),
        _ => Some(Value::String(raw.to_string())),
    }
}

/// Print a number the way JavaScript's `Number.prototype.toString` does:
/// shortest round-trip digits, plain notation for decimal exponents in
/// `-7..21` and `1e+21` / `1.5e-7` style outside it.
fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let sign = if n < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest digits that round-trip, e.g. `1.2345e3`.
    let sci = format!("{:e}", n.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Digits are `0.d1d2..dk * 10^point`.
    let point = exp.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let e = point - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{head}e{e_sign}{}", e.abs())
        } else {
            format!("{head}.{tail}e{e_sign}{}", e.abs())
        }
    };
    format!("{sign}{body}")
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            // Shortest digits padded with zeros, as JSON.stringify prints them.
            Value::Number(n) if n.fract() == 0.0 && n.abs() < EXPONENT_FORM_FROM => {
                let digits = format_number(*n).parse::<i128>().unwrap_or(*n as i128);
                serializer.serialize_i128(digits)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (k, v) in fields {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
