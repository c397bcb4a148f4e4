//! Coercion between the stored text form of a setting and its logical
//! JSON value.
//!
//! The two functions are inverses up to normalization: numbers come back
//! as floats, and only the canonical `true`/`false` literals round-trip
//! for booleans. Invalid stored JSON falls back to the raw text rather
//! than erroring, so a read never fails.

use serde_json::Value;

use super::model::SettingType;

/// Parses the stored text into the logical value for `ty`.
///
/// A missing stored value is null regardless of type. `number` text is
/// parsed by its longest numeric prefix (`"30 minutes"` is 30), null
/// when no prefix parses; for `boolean`, anything but the exact literal
/// `"true"` is `false`.
pub fn parse_value(stored: Option<&str>, ty: SettingType) -> Value {
    let Some(raw) = stored else {
        return Value::Null;
    };

    match ty {
        SettingType::Number => numeric_prefix(raw)
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        SettingType::Boolean => Value::Bool(raw == "true"),
        SettingType::Json => {
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
        }
        SettingType::String => Value::String(raw.to_string()),
    }
}

/// Longest prefix of the trimmed text that parses as a float.
fn numeric_prefix(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    (1..=trimmed.len())
        .rev()
        .find_map(|end| trimmed.get(..end)?.parse::<f64>().ok())
}

/// Renders a logical value into its stored text form for `ty`.
///
/// Null maps to no stored value. `json` serializes; everything else uses
/// the textual representation, with strings passed through unquoted.
pub fn stringify_value(value: &Value, ty: SettingType) -> Option<String> {
    if value.is_null() {
        return None;
    }

    let text = match ty {
        SettingType::Json => value.to_string(),
        SettingType::String | SettingType::Number | SettingType::Boolean => match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    };

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_maps_to_null_both_ways() {
        for ty in [
            SettingType::String,
            SettingType::Number,
            SettingType::Boolean,
            SettingType::Json,
        ] {
            assert_eq!(parse_value(None, ty), Value::Null);
            assert_eq!(stringify_value(&Value::Null, ty), None);
        }
    }

    #[test]
    fn number_round_trip() {
        let stored = stringify_value(&json!(42), SettingType::Number).unwrap();
        assert_eq!(stored, "42");
        assert_eq!(parse_value(Some(&stored), SettingType::Number), json!(42.0));

        let stored = stringify_value(&json!(3.5), SettingType::Number).unwrap();
        assert_eq!(parse_value(Some(&stored), SettingType::Number), json!(3.5));
    }

    #[test]
    fn number_parses_longest_numeric_prefix() {
        assert_eq!(parse_value(Some("3,14"), SettingType::Number), json!(3.0));
        assert_eq!(
            parse_value(Some("30 minutes"), SettingType::Number),
            json!(30.0)
        );
        assert_eq!(
            parse_value(Some("-2.5e1x"), SettingType::Number),
            json!(-25.0)
        );
    }

    #[test]
    fn unparseable_number_is_null() {
        assert_eq!(
            parse_value(Some("not-a-number"), SettingType::Number),
            Value::Null
        );
        assert_eq!(
            parse_value(Some("minutes 30"), SettingType::Number),
            Value::Null
        );
        assert_eq!(parse_value(Some(""), SettingType::Number), Value::Null);
    }

    #[test]
    fn boolean_only_true_literal_is_true() {
        assert_eq!(parse_value(Some("true"), SettingType::Boolean), json!(true));
        assert_eq!(
            parse_value(Some("false"), SettingType::Boolean),
            json!(false)
        );
        assert_eq!(
            parse_value(Some("anything-else"), SettingType::Boolean),
            json!(false)
        );
        assert_eq!(parse_value(Some("TRUE"), SettingType::Boolean), json!(false));
    }

    #[test]
    fn boolean_canonical_round_trip() {
        for flag in [true, false] {
            let stored = stringify_value(&json!(flag), SettingType::Boolean).unwrap();
            assert_eq!(stored, flag.to_string());
            assert_eq!(
                parse_value(Some(&stored), SettingType::Boolean),
                json!(flag)
            );
        }
    }

    #[test]
    fn json_round_trip() {
        let value = json!({"a": 1, "b": ["x", "y"]});
        let stored = stringify_value(&value, SettingType::Json).unwrap();
        assert_eq!(parse_value(Some(&stored), SettingType::Json), value);
    }

    #[test]
    fn invalid_json_falls_back_to_raw_text() {
        assert_eq!(
            parse_value(Some("{not json"), SettingType::Json),
            json!("{not json")
        );
    }

    #[test]
    fn string_round_trip_is_identity() {
        let stored = stringify_value(&json!("hello world"), SettingType::String).unwrap();
        assert_eq!(stored, "hello world");
        assert_eq!(
            parse_value(Some(&stored), SettingType::String),
            json!("hello world")
        );
    }

    #[test]
    fn string_type_does_not_quote() {
        // A plain string stored as json would gain quotes; string must not.
        assert_eq!(
            stringify_value(&json!("plain"), SettingType::String).unwrap(),
            "plain"
        );
        assert_eq!(
            stringify_value(&json!("plain"), SettingType::Json).unwrap(),
            "\"plain\""
        );
    }
}
