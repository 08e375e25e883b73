// crates/geoview-core/src/preview.rs

use crate::document::Geometry;
use crate::format::json_string;
use std::borrow::Cow;

pub const TRUNCATION_MARKER: &str = "\n…(truncated)";
pub const ELLIPSIS: &str = "…";
pub const NO_GEOMETRY: &str = "(no geometry)";

/// Splits `s` after `limit` characters. `None` if it is not longer than that.
fn split_at_chars(s: &str, limit: usize) -> Option<&str> {
    s.char_indices().nth(limit).map(|(byte, _)| &s[..byte])
}

/// Raw JSON preview: the first `limit` characters plus a marker, or the whole
/// string when it fits. Only the displayed text is cut, never the data.
pub fn truncate_raw(s: &str, limit: usize) -> Cow<'_, str> {
    match split_at_chars(s, limit) {
        Some(head) => Cow::Owned(format!("{head}{TRUNCATION_MARKER}")),
        None => Cow::Borrowed(s),
    }
}

/// `type` plus a coordinate preview.
///
/// `Point` coordinates are always shown in full; anything else is cut at
/// `limit` characters with a trailing ellipsis.
pub fn geometry_summary(geometry: Option<&Geometry>, limit: usize) -> String {
    let Some(geometry) = geometry else {
        return NO_GEOMETRY.to_string();
    };
    let mut text = geometry.kind.clone();
    if let Some(coords) = &geometry.coordinates {
        let coords = json_string(coords);
        text.push_str(": ");
        if geometry.is_point() {
            text.push_str(&coords);
        } else {
            match split_at_chars(&coords, limit) {
                Some(head) => {
                    text.push_str(head);
                    text.push_str(ELLIPSIS);
                }
                None => text.push_str(&coords),
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    #[rstest]
    #[case(0)]
    #[case(3999)]
    #[case(4000)]
    fn short_raw_json_is_untouched(#[case] len: usize) {
        let s = "x".repeat(len);
        let out = truncate_raw(&s, 4000);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, s);
    }

    #[test]
    fn long_raw_json_keeps_exactly_limit_chars() {
        let s = "é".repeat(4001);
        let out = truncate_raw(&s, 4000);
        let head = out.strip_suffix(TRUNCATION_MARKER).unwrap();
        assert_eq!(head.chars().count(), 4000);
    }

    fn geometry(kind: &str, coords: Value) -> Geometry {
        Geometry {
            kind: kind.to_string(),
            coordinates: coords.as_array().cloned(),
        }
    }

    fn long_line() -> Value {
        Value::Array((0..60).map(|i| json!([i, i])).collect())
    }

    #[test]
    fn points_are_never_truncated() {
        let coords = json!([123.456789012345, 98.765432109876, 1000000.123456789]);
        let g = geometry("Point", coords.clone());
        assert_eq!(
            geometry_summary(Some(&g), 5),
            format!("Point: {}", serde_json::to_string(&coords).unwrap())
        );
    }

    #[test]
    fn whole_float_coordinates_print_without_fraction() {
        let g = geometry("Point", json!([10.0, 20.0]));
        assert_eq!(geometry_summary(Some(&g), 120), "Point: [10,20]");
    }

    #[test]
    fn other_geometries_cut_at_limit() {
        let g = geometry("LineString", long_line());
        let full = serde_json::to_string(&long_line()).unwrap();
        assert!(full.chars().count() > 120);

        let text = geometry_summary(Some(&g), 120);
        let body = text.strip_prefix("LineString: ").unwrap();
        let head = body.strip_suffix(ELLIPSIS).unwrap();
        assert_eq!(head.chars().count(), 120);
        assert_eq!(head, &full[..120]);
    }

    #[test]
    fn exactly_limit_chars_has_no_ellipsis() {
        let coords = json!([[1, 2], [3, 4]]);
        let full = serde_json::to_string(&coords).unwrap();
        let g = geometry("LineString", coords);
        let text = geometry_summary(Some(&g), full.len());
        assert_eq!(text, format!("LineString: {full}"));
    }

    #[test]
    fn missing_pieces() {
        assert_eq!(geometry_summary(None, 120), NO_GEOMETRY);
        let g = Geometry {
            kind: "Polygon".into(),
            coordinates: None,
        };
        assert_eq!(geometry_summary(Some(&g), 120), "Polygon");
    }
}
