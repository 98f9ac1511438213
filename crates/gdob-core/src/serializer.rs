//! Reverse serializer: a [`Value`] tree back into outline text.
//!
//! Output shape, two spaces of indent per nesting level:
//!
//! ```text
//! - Name: Alice        scalar field, tag re-applied
//! - Stats              nested object
//!   - Level: #5
//! - Tags[]             nested array
//!   brave|             array element, terminator re-appended
//! ```
//!
//! Containers inside an array have no key to open them, so they are rendered
//! one column deeper without a header line.

use crate::convert::Options;
use crate::error::{GdobError, Result};
use crate::value::{Value, ARRAY_SUFFIX, KEY_SEPARATOR, STRUCT_MARKER, TERMINATOR};

/// Serialize a value tree with the default [`Options`].
///
/// # Example
/// ```
/// use gdob_core::{serialize, Value};
/// let tags = Value::Object(vec![(
///     "Tags".to_string(),
///     Value::Array(vec!["a".into(), "b".into()]),
/// )]);
/// assert_eq!(serialize(&tags).unwrap(), "- Tags[]\n  a|\n  b|");
/// ```
pub fn serialize(value: &Value) -> Result<String> {
    serialize_with(value, &Options::default())
}

/// Serialize a value tree, failing with [`GdobError::DepthLimit`] when it nests
/// deeper than `options.max_depth` containers.
///
/// A scalar root has nothing to render and produces an empty string.
pub fn serialize_with(value: &Value, options: &Options) -> Result<String> {
    let mut writer = Writer {
        out: String::new(),
        max_depth: options.max_depth,
    };
    writer.write_root(value)?;
    let text = writer.out.trim_end().to_string();
    tracing::debug!(root = value.kind_name(), bytes = text.len(), "value serialized");
    Ok(text)
}

struct Writer {
    out: String,
    max_depth: usize,
}

impl Writer {
    fn write_root(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Object(fields) => self.write_object(fields, 0, 1),
            Value::Array(items) => self.write_array(items, 0, 1),
            _ => Ok(()),
        }
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(GdobError::DepthLimit {
                max: self.max_depth,
            });
        }
        Ok(())
    }

    fn write_array(&mut self, items: &[Value], indent: usize, depth: usize) -> Result<()> {
        self.enter(depth)?;
        for item in items {
            match item {
                Value::Object(fields) => self.write_object(fields, indent + 1, depth + 1)?,
                Value::Array(inner) => self.write_array(inner, indent + 1, depth + 1)?,
                scalar => {
                    let text = scalar.plain_scalar().unwrap_or_default();
                    self.line(indent, &text);
                    self.out.push(TERMINATOR);
                    self.out.push('\n');
                }
            }
        }
        Ok(())
    }

    fn write_object(
        &mut self,
        fields: &[(String, Value)],
        indent: usize,
        depth: usize,
    ) -> Result<()> {
        self.enter(depth)?;
        for (key, value) in fields {
            match value {
                Value::Array(items) => {
                    self.header(indent, key, ARRAY_SUFFIX);
                    self.write_array(items, indent + 2, depth + 1)?;
                }
                Value::Object(inner) => {
                    self.header(indent, key, "");
                    self.write_object(inner, indent + 2, depth + 1)?;
                }
                scalar => {
                    let tagged = scalar.tagged_scalar().unwrap_or_default();
                    self.line(indent, STRUCT_MARKER);
                    self.out.push_str(key);
                    self.out.push_str(KEY_SEPARATOR);
                    self.out.push_str(&tagged);
                    self.out.push('\n');
                }
            }
        }
        Ok(())
    }

    /// Emit `- key[]` or `- key` opening a nested container.
    fn header(&mut self, indent: usize, key: &str, suffix: &str) {
        self.line(indent, STRUCT_MARKER);
        self.out.push_str(key);
        self.out.push_str(suffix);
        self.out.push('\n');
    }

    /// Start a line: indentation followed by `text`, no newline.
    fn line(&mut self, indent: usize, text: &str) {
        self.out.push_str(&" ".repeat(indent));
        self.out.push_str(text);
    }
}
