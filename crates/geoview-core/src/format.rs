// crates/geoview-core/src/format.rs

//! Display helpers.
//!
//! Numbers are formatted the way an en-US locale prints them (thousands
//! separators, at most three fraction digits). JSON values are turned into
//! display text with the same rules a browser uses when a value is assigned
//! as text content, so what the summary shows matches what the page showed.

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};
use serde_json::Value;
use std::io;

const MAX_FRACTION_DIGITS: usize = 3;

/// Groups the digits of an integer with `,` every three places.
///
/// ```rust
/// use geoview_core::format::format_integer;
/// assert_eq!(format_integer(594833), "594,833");
/// assert_eq!(format_integer(-1200), "-1,200");
/// ```
pub fn format_integer(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let grouped = group_digits(&digits);
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Locale-style formatting of an arbitrary number.
///
/// Integral values get separators only; fractional values are rounded to
/// three digits with trailing zeros dropped.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞".into() } else { "-∞".into() };
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    // -0.0004 rounds to zero and prints without a sign.
    if n < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a JSON number for display, keeping integer precision where the
/// value is stored as an integer.
pub fn format_json_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        format_integer(i)
    } else if let Some(u) = n.as_u64() {
        group_digits(&u.to_string())
    } else {
        format_number(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/* --------------------------------------------------------------------------
   Browser-style value semantics
-------------------------------------------------------------------------- */

/// The string a browser produces for `String(value)`.
///
/// Arrays join their items with `,` (null items become empty), objects
/// become `[object Object]`.
pub fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => js_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn js_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    }
}

/* --------------------------------------------------------------------------
   JSON text
-------------------------------------------------------------------------- */

/// Writes numbers the way `JSON.stringify` does: a whole float prints
/// without `.0` and negative zero prints as `0`. Layout comes from `F`.
struct JsNumbers<F>(F);

impl<F: Formatter> Formatter for JsNumbers<F> {
    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        if value == 0.0 {
            return writer.write_all(b"0");
        }
        if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e21 {
            return writer.write_all(format!("{value}").as_bytes());
        }
        self.0.write_f64(writer, value)
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }
}

fn write_json<T: Serialize + ?Sized, F: Formatter>(value: &T, formatter: F) -> String {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, JsNumbers(formatter));
    // JSON values always serialise; only the in-memory writer is involved.
    if value.serialize(&mut ser).is_err() {
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}

/// Compact JSON text, as `JSON.stringify(value)` prints it.
pub fn json_string<T: Serialize + ?Sized>(value: &T) -> String {
    write_json(value, CompactFormatter)
}

/// Two-space indented JSON text, as `JSON.stringify(value, null, 2)`.
pub fn json_pretty<T: Serialize + ?Sized>(value: &T) -> String {
    write_json(value, PrettyFormatter::new())
}

/// Truthiness as a browser sees it: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(27244, "27,244")]
    #[case(15000000, "15,000,000")]
    #[case(-1234567, "-1,234,567")]
    fn integers_get_separators(#[case] n: i64, #[case] expected: &str) {
        assert_eq!(format_integer(n), expected);
    }

    #[rstest]
    #[case(1234.5, "1,234.5")]
    #[case(1234.56789, "1,234.568")]
    #[case(1000000.0, "1,000,000")]
    #[case(0.0001, "0")]
    #[case(-2500.25, "-2,500.25")]
    fn floats_use_three_fraction_digits(#[case] n: f64, #[case] expected: &str) {
        assert_eq!(format_number(n), expected);
    }

    #[test]
    fn json_numbers_keep_integer_precision() {
        let n: serde_json::Number = serde_json::from_str("9007199254740993").unwrap();
        assert_eq!(format_json_number(&n), "9,007,199,254,740,993");
    }

    #[test]
    fn js_string_matches_browser_coercion() {
        assert_eq!(js_string(&json!("Lagos")), "Lagos");
        assert_eq!(js_string(&json!(12)), "12");
        assert_eq!(js_string(&json!(1.5)), "1.5");
        assert_eq!(js_string(&json!([1, null, "a"])), "1,,a");
        assert_eq!(js_string(&json!([])), "");
        assert_eq!(js_string(&json!({"a": 1})), "[object Object]");
        assert_eq!(js_string(&json!(true)), "true");
    }

    #[rstest]
    #[case(json!([10.0, 20.0]), "[10,20]")]
    #[case(json!([-0.0, 1.5, 3]), "[0,1.5,3]")]
    #[case(json!({"b": 2.0, "a": [1e20]}), r#"{"b":2,"a":[100000000000000000000]}"#)]
    fn json_text_prints_whole_floats_like_a_browser(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(json_string(&value), expected);
    }

    #[test]
    fn pretty_json_text_keeps_layout() {
        let value = json!({"coordinates": [10.0, 20.5]});
        assert_eq!(
            json_pretty(&value),
            "{\n  \"coordinates\": [\n    10,\n    20.5\n  ]\n}"
        );
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!(0.5)));
    }
}
