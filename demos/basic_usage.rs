//! Basic usage example for geoview-rs
//!
//! This example demonstrates how to:
//! - Classify the fixture cities by population
//! - Render the city table and the GeoJSON section into an in-memory page
//! - Drive the loader with a transport that serves a fixed document

use geoview_core::prelude::*;

/// Serves one in-memory GeoJSON document for every request.
struct InlineTransport(&'static str);

impl Transport for InlineTransport {
    async fn get(&self, _resource: &str) -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse::ok(self.0))
    }
}

const MEGA_CITIES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature",
      "properties": { "NAME": "Tokyo", "ADM0NAME": "Japan", "POP_MAX": 35676000 },
      "geometry": { "type": "Point", "coordinates": [139.75, 35.68] } },
    { "type": "Feature",
      "properties": { "CITY": "Lagos", "POP_EST": 15000000 },
      "geometry": { "type": "Point", "coordinates": [3.39, 6.45] } }
  ]
}"#;

fn main() -> geoview_core::Result<()> {
    println!("=== geoview-rs Basic Usage Example ===\n");

    // Example 1: Size bands
    println!("--- Example 1: Classify cities ---");
    for city in default_cities() {
        println!("{:<10} {:>8}  {}", city.name, city.population, city.size());
    }
    println!();

    // Example 2: Full page render
    println!("--- Example 2: Render the page ---");
    let config = PageConfig::default();
    let mut page = Page::new(&config.container_id);
    let transport = InlineTransport(MEGA_CITIES);
    let state = pollster::block_on(initialize(
        &mut page,
        &transport,
        config,
        PageOrigin::Network("https".into()),
    ))?;
    println!("Loader finished: {}", state.name());
    println!("✓ Rendered {} bytes of HTML\n", page.to_html().len());

    // Example 3: Inspect the rendered summary
    println!("--- Example 3: Summary rows ---");
    if let Some(content) = page.get(geoview_core::render::CONTENT_ID) {
        for row in content.elements_by_tag("tr").iter().skip(1) {
            let cells: Vec<String> = row
                .elements_by_tag("td")
                .iter()
                .map(|td| td.text_content())
                .collect();
            if cells.len() == 5 {
                println!("  {}", cells.join(" | "));
            }
        }
    }

    // Example 4: Raw JSON of a single feature
    println!("\n--- Example 4: Parse only ---");
    let value: serde_json::Value = serde_json::from_str(MEGA_CITIES)?;
    match GeoDocument::classify(value) {
        GeoDocument::FeatureCollection(fc) => println!("  {} features", fc.len()),
        GeoDocument::Other(_) => println!("  not a FeatureCollection"),
    }

    Ok(())
}
