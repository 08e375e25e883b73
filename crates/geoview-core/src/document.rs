// crates/geoview-core/src/document.rs

//! Shape checks on a parsed GeoJSON value.
//!
//! Parsing is deliberately lenient: a document is only required to be JSON.
//! It becomes a [`FeatureCollection`] when `type` is `"FeatureCollection"` and
//! `features` is an array; everything else is kept verbatim for the fallback
//! view. Individual features never fail to parse, missing or odd members are
//! treated as absent.

use crate::format::{is_truthy, js_string};
use serde_json::{Map, Value};

pub const FEATURE_COLLECTION: &str = "FeatureCollection";
pub const POINT: &str = "Point";

#[derive(Debug, Clone, PartialEq)]
pub enum GeoDocument {
    FeatureCollection(FeatureCollection),
    /// Valid JSON of any other shape.
    Other(Value),
}

impl GeoDocument {
    pub fn classify(value: Value) -> Self {
        match value.get("features") {
            Some(Value::Array(items))
                if value.get("type").and_then(Value::as_str) == Some(FEATURE_COLLECTION) =>
            {
                GeoDocument::FeatureCollection(FeatureCollection {
                    features: items.iter().map(Feature::from_value).collect(),
                })
            }
            _ => GeoDocument::Other(value),
        }
    }

    pub fn is_feature_collection(&self) -> bool {
        matches!(self, GeoDocument::FeatureCollection(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    /// In source order. Position is the only identity a feature has.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    /// Raw `properties` member. Lookups only consider it when it is an object.
    pub properties: Option<Value>,
    pub geometry: Option<Geometry>,
}

impl Feature {
    pub fn from_value(value: &Value) -> Self {
        let properties = value.get("properties").filter(|v| !v.is_null()).cloned();
        let geometry = value
            .get("geometry")
            .filter(|g| is_truthy(g))
            .map(Geometry::from_value);
        Self {
            properties,
            geometry,
        }
    }

    pub fn properties_map(&self) -> Option<&Map<String, Value>> {
        self.properties.as_ref().and_then(Value::as_object)
    }

    /// Pretty-printed properties; `{}` when they are absent or falsy.
    pub fn properties_pretty(&self) -> String {
        let empty = Value::Object(Map::new());
        let value = self
            .properties
            .as_ref()
            .filter(|v| is_truthy(v))
            .unwrap_or(&empty);
        pretty_json(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    /// The `type` member as display text; empty when missing.
    pub kind: String,
    /// `coordinates`, kept only when it is an array.
    pub coordinates: Option<Vec<Value>>,
}

impl Geometry {
    pub fn from_value(value: &Value) -> Self {
        let kind = value
            .get("type")
            .filter(|t| is_truthy(t))
            .map(js_string)
            .unwrap_or_default();
        let coordinates = value
            .get("coordinates")
            .and_then(Value::as_array)
            .cloned();
        Self { kind, coordinates }
    }

    pub fn is_point(&self) -> bool {
        self.kind == POINT
    }
}

/// Two-space indented JSON, keys in source order.
pub fn pretty_json(value: &Value) -> String {
    crate::format::json_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn feature_collection_requires_type_and_array() {
        let fc = GeoDocument::classify(json!({"type": "FeatureCollection", "features": []}));
        assert!(fc.is_feature_collection());

        let wrong_type = GeoDocument::classify(json!({"type": "Feature", "features": []}));
        assert!(!wrong_type.is_feature_collection());

        let not_array = GeoDocument::classify(json!({"type": "FeatureCollection", "features": {}}));
        assert!(!not_array.is_feature_collection());

        let point = json!({"type": "Point"});
        assert_eq!(GeoDocument::classify(point.clone()), GeoDocument::Other(point));

        let scalar = GeoDocument::classify(json!(42));
        assert!(matches!(scalar, GeoDocument::Other(Value::Number(_))));
    }

    #[test]
    fn features_keep_source_order() {
        let doc = GeoDocument::classify(json!({
            "type": "FeatureCollection",
            "features": [
                {"properties": {"name": "B"}},
                {"properties": {"name": "A"}},
                "not an object"
            ]
        }));
        let GeoDocument::FeatureCollection(fc) = doc else {
            panic!("expected a FeatureCollection");
        };
        assert_eq!(fc.len(), 3);
        assert_eq!(fc.features[0].properties, Some(json!({"name": "B"})));
        assert_eq!(fc.features[1].properties, Some(json!({"name": "A"})));
        assert_eq!(fc.features[2], Feature::default());
    }

    #[test]
    fn geometry_members_are_optional() {
        let f = Feature::from_value(&json!({"geometry": {"type": "Polygon"}}));
        let g = f.geometry.unwrap();
        assert_eq!(g.kind, "Polygon");
        assert!(g.coordinates.is_none());

        let f = Feature::from_value(&json!({"geometry": null}));
        assert!(f.geometry.is_none());

        let f = Feature::from_value(&json!({"geometry": {"coordinates": "nope"}}));
        assert_eq!(f.geometry, Some(Geometry::default()));
    }

    #[test]
    fn properties_dump_defaults_to_empty_object() {
        assert_eq!(Feature::default().properties_pretty(), "{}");
        let f = Feature::from_value(&json!({"properties": {"z": 1, "a": 2}}));
        assert_eq!(f.properties_pretty(), "{\n  \"z\": 1,\n  \"a\": 2\n}");
        assert!(f.properties_map().is_some());
    }
}
