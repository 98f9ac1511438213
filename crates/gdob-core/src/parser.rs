//! Forward parser: outline text into a [`Value`] tree.
//!
//! The notation is line oriented. Each line is handled in one of two modes,
//! chosen by the container on top of the frame stack:
//!
//! - **Array buffering**: the top frame is an array and the line has no `- `
//!   marker. The line is element text. A trailing `|` closes the element;
//!   without it the element continues on the next line.
//! - **Structured**: anything else. Frames at or deeper than the line's
//!   indent are closed first, then the line either assigns `key: value` or
//!   opens a new container (`key` for an object, `key[]` for an array).
//!
//! # Frame ownership
//!
//! Each open container lives in its [`Frame`] until the frame is popped, at
//! which point it moves into its parent. Pops only ever happen to the top
//! frame and nothing is added to a parent while a child is open, so attaching
//! on pop keeps the order in which containers were opened.

use crate::convert::Options;
use crate::error::{GdobError, Result};
use crate::value::{
    decode_scalar, Value, ARRAY_SUFFIX, KEY_SEPARATOR, STRUCT_MARKER, TERMINATOR,
};

/// Full-width (ideographic) space, common in text typed with a CJK input method.
const FULL_WIDTH_SPACE: char = '\u{3000}';

/// Byte-order mark some editors write at the start of UTF-8 files.
pub(crate) const BOM: char = '\u{FEFF}';

/// Parse outline text with the default [`Options`].
///
/// Returns `Ok(None)` for empty or whitespace-only input.
///
/// # Example
/// ```
/// use gdob_core::{parse, Value};
/// let value = parse("- Level: #5\n- Name: Alice").unwrap().unwrap();
/// assert_eq!(value.get("Level"), Some(&Value::Number(5.0)));
/// ```
pub fn parse(text: &str) -> Result<Option<Value>> {
    parse_with(text, &Options::default())
}

/// Parse outline text, failing with [`GdobError::DepthLimit`] once more than
/// `options.max_depth` containers are open at the same time. The root counts,
/// so a `max_depth` of zero rejects every non-blank input.
///
/// A leading byte-order mark is ignored.
pub fn parse_with(text: &str, options: &Options) -> Result<Option<Value>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let Some(first) = text.lines().find(|line| !line.trim().is_empty()) else {
        return Ok(None);
    };
    if options.max_depth == 0 {
        return Err(GdobError::DepthLimit { max: 0 });
    }

    let root = if first.trim().starts_with(STRUCT_MARKER) {
        Value::object()
    } else {
        Value::array()
    };
    tracing::debug!(root = root.kind_name(), "parsing outline");

    let mut stack = FrameStack::new(root, options.max_depth);
    for (idx, line) in text.lines().enumerate() {
        stack.feed(idx + 1, line)?;
    }
    let value = stack.finish();

    tracing::debug!(root = value.kind_name(), "outline parsed");
    Ok(Some(value))
}

/// Parser state for one open container.
#[derive(Debug)]
struct Frame {
    /// Indent column of the line that opened this container; `-1` for the root.
    indent: isize,
    /// Key under which the container attaches to its parent object.
    key: String,
    container: Value,
    /// Text of an array element whose terminator has not been seen yet.
    pending: String,
}

impl Frame {
    fn new(indent: isize, key: String, container: Value) -> Self {
        Self {
            indent,
            key,
            container,
            pending: String::new(),
        }
    }

    fn is_array(&self) -> bool {
        matches!(self.container, Value::Array(_))
    }

    /// Append a line of element text to the pending buffer.
    fn buffer(&mut self, text: &str) {
        if !self.pending.is_empty() {
            self.pending.push('\n');
        }
        self.pending.push_str(text);
    }

    /// Close the pending element, pushing it as one trimmed string.
    fn close_element(&mut self) {
        let element = self.pending.trim().to_string();
        self.pending.clear();
        self.container.insert(String::new(), Value::String(element));
    }

    /// Flush an unterminated element, if any. Whitespace-only buffers are dropped.
    fn flush(&mut self) {
        if self.is_array() && !self.pending.trim().is_empty() {
            self.close_element();
        }
    }
}

/// Frame stack; the root frame sits at index 0 and is never popped before
/// [`FrameStack::finish`].
#[derive(Debug)]
struct FrameStack {
    frames: Vec<Frame>,
    max_depth: usize,
}

impl FrameStack {
    fn new(root: Value, max_depth: usize) -> Self {
        Self {
            frames: vec![Frame::new(-1, String::new(), root)],
            max_depth,
        }
    }

    fn top(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        let trimmed = line.trim();
        let top_is_array = self.top().is_array();

        if trimmed.is_empty() && !top_is_array {
            return Ok(());
        }

        if top_is_array && !trimmed.starts_with(STRUCT_MARKER) {
            self.buffer_element_line(trimmed);
            return Ok(());
        }

        let indent = indent_of(line);
        self.close_to(indent);

        let content = match trimmed.strip_prefix(STRUCT_MARKER) {
            Some(rest) => rest.trim(),
            None => trimmed,
        };

        match content.split_once(KEY_SEPARATOR) {
            Some((key, raw)) => {
                let value = decode_scalar(raw.trim()).ok_or_else(|| GdobError::OutlineParse {
                    line: line_no,
                    message: format!("numeric tag in '{}' is not a number", raw.trim()),
                })?;
                self.top().container.insert(key.trim().to_string(), value);
            }
            None => {
                let (key, container) = match content.strip_suffix(ARRAY_SUFFIX) {
                    Some(key) => (key, Value::array()),
                    None => (content, Value::object()),
                };
                self.open(indent, key.to_string(), container)?;
            }
        }
        Ok(())
    }

    fn buffer_element_line(&mut self, trimmed: &str) {
        let top = self.top();
        match trimmed.strip_suffix(TERMINATOR) {
            Some(text) => {
                top.buffer(text);
                top.close_element();
            }
            None => top.buffer(trimmed),
        }
    }

    /// Pop every frame opened at or deeper than `indent`.
    fn close_to(&mut self, indent: isize) {
        while self.frames.len() > 1 && self.top().indent >= indent {
            self.pop();
        }
    }

    fn open(&mut self, indent: isize, key: String, container: Value) -> Result<()> {
        if self.frames.len() >= self.max_depth {
            return Err(GdobError::DepthLimit {
                max: self.max_depth,
            });
        }
        tracing::trace!(indent, key = %key, kind = container.kind_name(), "open container");
        self.frames.push(Frame::new(indent, key, container));
        Ok(())
    }

    /// Pop the top frame and move its container into the parent.
    fn pop(&mut self) {
        let Some(mut frame) = self.frames.pop() else {
            return;
        };
        frame.flush();
        tracing::trace!(indent = frame.indent, key = %frame.key, "close container");
        self.top().container.insert(frame.key, frame.container);
    }

    /// Close every open frame and return the root container.
    fn finish(mut self) -> Value {
        while self.frames.len() > 1 {
            self.pop();
        }
        match self.frames.pop() {
            Some(mut root) => {
                root.flush();
                root.container
            }
            None => Value::array(),
        }
    }
}

/// Column of the first non-blank character, counting full-width spaces as one
/// column each.
fn indent_of(line: &str) -> isize {
    let normalized = line.replace(FULL_WIDTH_SPACE, " ");
    normalized
        .chars()
        .take_while(|c| c.is_whitespace())
        .count() as isize
}
