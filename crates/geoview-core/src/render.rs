// crates/geoview-core/src/render.rs

//! Element builders for the GeoJSON section. Pure functions: they only build
//! trees, the loader decides where they go.

use crate::document::pretty_json;
use crate::dom::{Element, Node};
use crate::preview::truncate_raw;
use crate::resolve::FeatureSummary;
use serde_json::Value;

pub const SECTION_ID: &str = "geojson-section";
pub const STATUS_ID: &str = "geojson-status";
pub const CONTENT_ID: &str = "geojson-content";

pub const LOADING_TEXT: &str = "Loading GeoJSON…";
pub const LOADED_TEXT: &str = "Loaded GeoJSON.";
pub const ERROR_PREFIX: &str = "Error loading GeoJSON: ";
pub const NO_FEATURES_TEXT: &str = "No features found in GeoJSON.";
pub const FALLBACK_TEXT: &str = "GeoJSON is not a FeatureCollection. Showing contents:";
pub const RAW_SUMMARY_TEXT: &str = "Show raw JSON (truncated)";
pub const PROPERTIES_SUMMARY_TEXT: &str = "Show full properties";

pub const SUMMARY_HEADERS: [&str; 5] = ["#", "Name", "Country", "Population", "Geometry"];

const SECTION_STYLE: &str =
    "margin-top:12px;padding:10px;background:rgba(255,255,255,0.9);border-radius:6px;";
const HEADER_STYLE: &str = "margin:0 0 8px 0;font-size:1rem";
const STATUS_STYLE: &str = "font-style:italic;margin-bottom:8px";
const RAW_PRE_STYLE: &str =
    "max-height:220px;overflow:auto;background:#f7f7f7;padding:8px;border-radius:4px;";
const TABLE_STYLE: &str = "width:100%;border-collapse:collapse;margin-top:8px";
const TH_STYLE: &str = "border-bottom:2px solid #666;padding:6px;text-align:left";
const TD_STYLE: &str = "border-bottom:1px solid #ddd;padding:6px;vertical-align:top";
const DETAILS_CELL_STYLE: &str = "padding:4px 8px 12px 8px;";
const PROPS_PRE_STYLE: &str =
    "white-space:pre-wrap;background:#fafafa;padding:8px;border-radius:4px;border:1px solid #eee;";
const FALLBACK_PRE_STYLE: &str =
    "background:#f7f7f7;padding:8px;border-radius:4px;max-height:250px;overflow:auto;";
const ERROR_STYLE: &str = "color:red";
const HINT_STYLE: &str = "margin-top:8px;color:#333";

/// `<section>` with title, a status line reading "Loading…" and an empty
/// content holder.
pub fn section_skeleton(title: &str) -> Element {
    Element::new("section")
        .with_id(SECTION_ID)
        .with_style(SECTION_STYLE)
        .with_child(Element::new("h3").with_style(HEADER_STYLE).with_text(title))
        .with_child(
            Element::new("div")
                .with_id(STATUS_ID)
                .with_style(STATUS_STYLE)
                .with_text(LOADING_TEXT),
        )
        .with_child(Element::new("div").with_id(CONTENT_ID))
}

pub fn loaded_status() -> Vec<Node> {
    vec![Node::text(LOADED_TEXT)]
}

pub fn error_status(message: &str) -> Vec<Node> {
    vec![Element::new("span")
        .with_style(ERROR_STYLE)
        .with_text(format!("{ERROR_PREFIX}{message}"))
        .into()]
}

fn collapsible(summary: &str, body: Element) -> Element {
    Element::new("details")
        .with_child(Element::new("summary").with_text(summary))
        .with_child(body)
}

/// Collapsible pretty-printed JSON, cut to `limit` characters.
pub fn raw_preview(value: &Value, limit: usize) -> Element {
    let pretty = pretty_json(value);
    collapsible(
        RAW_SUMMARY_TEXT,
        Element::new("pre")
            .with_style(RAW_PRE_STYLE)
            .with_text(truncate_raw(&pretty, limit).into_owned()),
    )
}

pub fn no_features() -> Vec<Node> {
    vec![Element::new("em").with_text(NO_FEATURES_TEXT).into()]
}

fn summary_row(row: &FeatureSummary) -> Element {
    let cells = [
        row.index.to_string(),
        row.name.clone(),
        row.country.clone(),
        row.population.clone(),
        row.geometry.clone(),
    ];
    cells.into_iter().fold(Element::new("tr"), |tr, text| {
        tr.with_child(Element::new("td").with_style(TD_STYLE).with_text(text))
    })
}

fn details_row(row: &FeatureSummary) -> Element {
    let pre = Element::new("pre")
        .with_style(PROPS_PRE_STYLE)
        .with_text(row.properties_json.as_str());
    Element::new("tr").with_child(
        Element::new("td")
            .with_attr("colspan", SUMMARY_HEADERS.len().to_string())
            .with_style(DETAILS_CELL_STYLE)
            .with_child(collapsible(PROPERTIES_SUMMARY_TEXT, pre)),
    )
}

/// Header row, then a summary row and a details row per feature, in order.
pub fn summary_table(rows: &[FeatureSummary]) -> Element {
    let header = SUMMARY_HEADERS.iter().fold(Element::new("tr"), |tr, h| {
        tr.with_child(Element::new("th").with_style(TH_STYLE).with_text(*h))
    });
    let mut table = Element::new("table").with_style(TABLE_STYLE).with_child(header);
    for row in rows {
        table.append(summary_row(row));
        table.append(details_row(row));
    }
    table
}

/// Notice plus the complete pretty-printed document.
pub fn fallback_view(value: &Value) -> Vec<Node> {
    vec![
        Element::new("em").with_text(FALLBACK_TEXT).into(),
        Element::new("pre")
            .with_style(FALLBACK_PRE_STYLE)
            .with_text(pretty_json(value))
            .into(),
    ]
}

/// Shown when a generic network failure happens on a file origin.
pub fn file_origin_hint() -> Element {
    Element::new("div")
        .with_style(HINT_STYLE)
        .with_child(Element::new("strong").with_text("Tip:"))
        .with_text(" Fetching via ")
        .with_child(Element::new("code").with_text("file://"))
        .with_text(" can be blocked by the browser. Run a local server (e.g. ")
        .with_child(Element::new("code").with_text("python -m http.server 8000"))
        .with_text(") and open ")
        .with_child(Element::new("code").with_text("http://localhost:8000/"))
        .with_text(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(index: usize, name: &str) -> FeatureSummary {
        FeatureSummary {
            index,
            name: name.into(),
            country: "-".into(),
            population: "-".into(),
            geometry: "(no geometry)".into(),
            properties_json: "{}".into(),
        }
    }

    #[test]
    fn skeleton_has_status_and_content_holders() {
        let section = section_skeleton("GeoJSON — MegaCities");
        assert_eq!(section.id(), Some(SECTION_ID));
        assert_eq!(section.find_by_id(STATUS_ID).unwrap().text_content(), LOADING_TEXT);
        assert!(section.find_by_id(CONTENT_ID).unwrap().children().is_empty());
        assert_eq!(section.elements_by_tag("h3")[0].text_content(), "GeoJSON — MegaCities");
    }

    #[test]
    fn table_has_two_rows_per_feature() {
        let table = summary_table(&[row(1, "A"), row(2, "B")]);
        let rows = table.elements_by_tag("tr");
        // header + (summary + details) * 2
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1].elements_by_tag("td")[1].text_content(), "A");
        assert_eq!(rows[3].elements_by_tag("td")[1].text_content(), "B");
        let cells = rows[2].elements_by_tag("td");
        let details_cell = cells[0];
        assert_eq!(details_cell.attr("colspan"), Some("5"));
        assert_eq!(details_cell.elements_by_tag("summary")[0].text_content(), PROPERTIES_SUMMARY_TEXT);
    }

    #[test]
    fn raw_preview_is_cut() {
        let value = json!({"blob": "x".repeat(5000)});
        let details = raw_preview(&value, 4000);
        let pre = details.elements_by_tag("pre")[0].text_content();
        assert!(pre.ends_with("\n…(truncated)"));
    }

    #[test]
    fn error_status_is_red_and_prefixed() {
        let nodes = error_status("Fetch failed: 404 Not Found");
        let Node::Element(span) = &nodes[0] else {
            panic!("expected span");
        };
        assert_eq!(span.attr("style"), Some("color:red"));
        assert_eq!(span.text_content(), "Error loading GeoJSON: Fetch failed: 404 Not Found");
    }

    #[test]
    fn hint_mentions_local_server() {
        let text = file_origin_hint().text_content();
        assert!(text.starts_with("Tip: Fetching via file://"));
        assert!(text.contains("python -m http.server 8000"));
    }
}
