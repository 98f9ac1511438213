//! # gdob-core
//!
//! Converter between an indentation-based outline notation and JSON, for
//! authoring GDevelop structure and array variables in a plain-text list
//! editor such as Obsidian.
//!
//! ## The notation
//!
//! ```text
//! - Name: Alice          string field
//! - Level: #5            number field (`#` tag)
//! - Active: @true        boolean field (`@true` / `@false`)
//! - Stats                nested object
//!   - Hp: #30
//! - Lines[]              nested array
//!   Hello there.|        one element per `|` terminator
//!   A second line
//!   of the same element.|
//! ```
//!
//! Text whose first non-blank line does not start with `- ` is a bare array.
//!
//! ## Quick start
//!
//! ```rust
//! use gdob_core::{to_json, to_outline};
//!
//! // Outline → JSON
//! let json = to_json("- Level: #5\n- Active: @true\n- Name: Alice").unwrap();
//! assert_eq!(json, "{\n  \"Level\": 5,\n  \"Active\": true,\n  \"Name\": \"Alice\"\n}");
//!
//! // JSON → outline (roundtrip)
//! let back = to_outline(&json).unwrap();
//! assert_eq!(back, "- Level: #5\n- Active: @true\n- Name: Alice");
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — outline text → [`Value`]
//! - [`serializer`] — [`Value`] → outline text
//! - [`convert`](mod@convert) — string conversions, [`Direction`] and [`Options`]
//! - [`value`] — the shared [`Value`] tree and scalar tags
//! - [`error`] — [`GdobError`] and the failure sentinels

pub mod convert;
pub mod error;
pub mod parser;
pub mod serializer;
pub mod value;

pub use convert::{
    convert, to_json, to_json_with, to_outline, to_outline_with, Direction, JsonStyle, Options,
    DEFAULT_MAX_DEPTH,
};
pub use error::{GdobError, INVALID_FORMAT, INVALID_JSON};
pub use parser::{parse, parse_with};
pub use serializer::{serialize, serialize_with};
pub use value::{decode_scalar, Value};
