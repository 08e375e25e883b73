// crates/geoview-core/src/resolve.rs

//! Guess-the-schema property lookup.
//!
//! GeoJSON sources disagree on attribute spelling (`name` vs `NAME` vs
//! `city`...). Each displayed field has an ordered list of candidate keys and
//! the first usable one wins, so the list order is observable behaviour.

use crate::config::PageConfig;
use crate::document::Feature;
use crate::format::{format_json_number, is_truthy, js_string};
use crate::preview::geometry_summary;
use serde::Deserialize;
use serde_json::{Map, Value};

pub const NO_NAME: &str = "(no name)";
pub const NO_VALUE: &str = "-";

/// Ordered candidate keys per summary column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CandidateKeys {
    pub name: Vec<String>,
    pub country: Vec<String>,
    pub population: Vec<String>,
}

fn owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

impl Default for CandidateKeys {
    fn default() -> Self {
        Self {
            name: owned(&["name", "Name", "NAME", "city", "City", "CITY", "title", "TITLE"]),
            country: owned(&["country", "Country", "COUNTRY", "admin", "Admin", "ADM0_NAME"]),
            population: owned(&[
                "population",
                "Population",
                "POP",
                "pop_est",
                "POP_EST",
                "POP_MAX",
                "POPULATION",
            ]),
        }
    }
}

/// Returns the value of the first candidate key that is present, not null
/// and not blank once stringified and trimmed.
///
/// ```rust
/// use geoview_core::pick_prop;
/// use serde_json::json;
///
/// let props = json!({"NAME": "  ", "city": "Lagos"});
/// let keys = vec!["name".to_string(), "NAME".to_string(), "city".to_string()];
/// assert_eq!(pick_prop(props.as_object(), &keys), Some(&json!("Lagos")));
/// ```
pub fn pick_prop<'a>(props: Option<&'a Map<String, Value>>, candidates: &[String]) -> Option<&'a Value> {
    let props = props?;
    candidates.iter().find_map(|key| {
        props
            .get(key)
            .filter(|v| !v.is_null() && !js_string(v).trim().is_empty())
    })
}

fn display_or(value: Option<&Value>, placeholder: &str) -> String {
    match value {
        Some(v) if is_truthy(v) => js_string(v),
        _ => placeholder.to_string(),
    }
}

fn display_population(value: Option<&Value>) -> String {
    match value {
        Some(v) if is_truthy(v) => match v {
            Value::Number(n) => format_json_number(n),
            other => js_string(other),
        },
        _ => NO_VALUE.to_string(),
    }
}

/// One row of the feature summary table, fully resolved to display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSummary {
    /// 1-based position in the source array.
    pub index: usize,
    pub name: String,
    pub country: String,
    pub population: String,
    pub geometry: String,
    /// Pretty-printed `properties`, or `{}` when absent.
    pub properties_json: String,
}

impl FeatureSummary {
    pub fn resolve(position: usize, feature: &Feature, config: &PageConfig) -> Self {
        let keys = &config.candidate_keys;
        let props = feature.properties_map();
        Self {
            index: position + 1,
            name: display_or(pick_prop(props, &keys.name), NO_NAME),
            country: display_or(pick_prop(props, &keys.country), NO_VALUE),
            population: display_population(pick_prop(props, &keys.population)),
            geometry: geometry_summary(feature.geometry.as_ref(), config.coords_preview_limit),
            properties_json: feature.properties_pretty(),
        }
    }
}
