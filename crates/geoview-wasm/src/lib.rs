//! geoview-wasm — browser host for geoview-core
//!
//! On module load this crate renders the static city table into
//! `#mydiv`, inserts the GeoJSON section with a "Loading…" status line and
//! then fetches `data/MegaCities.geojson` in the background. The page stays
//! interactive while the request is in flight.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Helpers callable from JavaScript:
//!   - `classify_population(233209)` → `"Medium"`
//!   - `render_city_table_html()` → the city table as an HTML string
//!   - `render_geojson_html(text)` → the GeoJSON section for a given body
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init from './pkg/geoview_wasm.js';
//!
//! // Renders into <div id="mydiv"> and starts the GeoJSON load.
//! await init();
//! ```
//!
//! Notes
//! -----
//! - The page must be served over http(s); browsers usually block `fetch`
//!   from `file://`. When that happens the page shows a hint.
//! - See the `dist/` folder for a ready-made page and sample data.
#[cfg(target_arch = "wasm32")]
mod dom_surface;
#[cfg(target_arch = "wasm32")]
mod fetch;

use geoview_core::{
    default_cities, render_city_table, GeoDataLoader, HttpResponse, Page, PageConfig, PageOrigin,
    SizeBand,
};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use geoview_core::LoadState;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    use crate::dom_surface::DomSurface;
    use crate::fetch::FetchTransport;
    use geoview_core::mount_city_table;
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing geoview WASM module...".into());

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let origin = PageOrigin::from_protocol(&window.location().protocol()?);
    let config = PageConfig::default();
    let mut surface = DomSurface::new(document);

    // Synchronous part: city table, then the section with its status line.
    mount_city_table(&mut surface, &config.container_id, &default_cities()).map_err(to_js)?;
    let mut loader = GeoDataLoader::new(config, origin);
    loader.start(&mut surface).map_err(to_js)?;

    spawn_local(async move {
        match loader.run(&mut surface, &FetchTransport).await {
            Ok(LoadState::Failed(err)) => {
                web_sys::console::error_1(&format!("Error loading GeoJSON: {err}").into());
            }
            Ok(state) => {
                web_sys::console::log_1(&format!("✓ GeoJSON {}", state.name()).into());
            }
            Err(err) => {
                web_sys::console::error_1(&format!("geoview: {err}").into());
            }
        }
    });
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn to_js(err: geoview_core::GeoViewError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/* --------------------------------------------------------------------------
   Helpers
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn classify_population(population: f64) -> String {
    SizeBand::classify(population as i64).label().to_string()
}

#[wasm_bindgen]
pub fn render_city_table_html() -> String {
    render_city_table(&default_cities()).to_html()
}

/// Runs the GeoJSON section for an already fetched body and returns its HTML.
#[wasm_bindgen]
pub fn render_geojson_html(body: &str) -> String {
    let config = PageConfig::default();
    let mut page = Page::new(&config.container_id);
    let mut loader = GeoDataLoader::new(config, PageOrigin::Network("https".into()));
    // Both calls only fail when the container is missing, and `page` has it.
    if loader.start(&mut page).is_ok() {
        let _ = loader.finish(&mut page, Ok(HttpResponse::ok(body)));
    }
    page.to_html()
}
