/// Property-based roundtrip tests.
///
/// Generates value trees within the notation's expressible subset and checks
/// `parse(serialize(v)) == v`. The subset excludes what the notation cannot
/// carry back:
/// - array elements other than strings (they are written untagged)
/// - containers inside arrays (they have no key line to reopen them)
/// - strings with leading/trailing whitespace, tag prefixes, `- ` or `|`
/// - empty root containers (they serialize to nothing)
///
/// Also checks that neither direction panics on arbitrary input.
use gdob_core::{convert, parse, serialize, Direction, Options, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,11}").unwrap()
}

/// One line of text with no surrounding whitespace and no notation symbols.
fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[A-Za-z0-9]").unwrap(),
        prop::string::string_regex("[A-Za-z0-9][A-Za-z0-9 .,!?']{0,18}[A-Za-z0-9.!?]").unwrap(),
        Just("caf\u{00e9}".to_string()),
        Just("\u{52c7}\u{8005}\u{306e}\u{5263}".to_string()),
    ]
}

fn arb_field_string() -> impl Strategy<Value = Value> {
    arb_line().prop_map(Value::String)
}

/// Array element: empty, single line, or several lines (blank lines allowed
/// between them).
fn arb_element() -> impl Strategy<Value = Value> {
    prop_oneof![
        1 => Just(Value::from("")),
        4 => arb_line().prop_map(Value::String),
        2 => prop::collection::vec(
            prop_oneof![4 => arb_line(), 1 => Just(String::new())],
            2..4,
        )
        .prop_filter_map("first and last lines must have text", |lines| {
            let first_ok = lines.first().is_some_and(|l| !l.is_empty());
            let last_ok = lines.last().is_some_and(|l| !l.is_empty());
            (first_ok && last_ok).then(|| Value::String(lines.join("\n")))
        }),
    ]
}

fn arb_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => (-1_000_000i64..1_000_000i64).prop_map(Value::from),
        1 => (-10_000_000i64..10_000_000i64, 1u32..4u32).prop_map(|(mantissa, decimals)| {
            Value::Number(mantissa as f64 / 10f64.powi(decimals as i32))
        }),
    ]
}

fn arb_field_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => arb_field_string(),
        2 => arb_number(),
        1 => any::<bool>().prop_map(Value::Boolean),
    ]
}

fn arb_string_array() -> impl Strategy<Value = Value> {
    prop::collection::vec(arb_element(), 0..5).prop_map(Value::Array)
}

/// Build an object through `Value::insert` so duplicate generated keys collapse.
fn build_object(pairs: Vec<(String, Value)>) -> Value {
    let mut object = Value::object();
    for (k, v) in pairs {
        object.insert(k, v);
    }
    object
}

fn arb_field_value(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        prop_oneof![4 => arb_field_scalar(), 1 => arb_string_array()].boxed()
    } else {
        prop_oneof![
            4 => arb_field_scalar(),
            1 => arb_string_array(),
            2 => prop::collection::vec((arb_key(), arb_field_value(depth - 1)), 0..4)
                .prop_map(build_object),
        ]
        .boxed()
    }
}

fn arb_root() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => prop::collection::vec((arb_key(), arb_field_value(3)), 1..6).prop_map(build_object),
        1 => prop::collection::vec(arb_element(), 1..6).prop_map(Value::Array),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn roundtrip_value_tree(value in arb_root()) {
        let text = serialize(&value).unwrap();
        let back = parse(&text).unwrap();
        prop_assert_eq!(back, Some(value), "outline was:\n{}", text);
    }

    #[test]
    fn serialized_output_has_no_trailing_whitespace(value in arb_root()) {
        let text = serialize(&value).unwrap();
        prop_assert_eq!(text.trim_end(), text.as_str());
    }

    #[test]
    fn parse_never_panics(text in "(?s).{0,200}") {
        let _ = parse(&text);
    }

    #[test]
    fn parse_never_panics_on_outline_like_text(
        lines in prop::collection::vec("( {0,6})(- )?[A-Za-z#@|: \\[\\]]{0,12}", 0..20)
    ) {
        let _ = parse(&lines.join("\n"));
    }

    #[test]
    fn convert_is_total(text in "(?s).{0,200}") {
        let options = Options::default();
        let _ = convert(&text, Direction::ToJson, &options);
        let _ = convert(&text, Direction::ToOutline, &options);
    }
}
