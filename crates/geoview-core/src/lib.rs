// crates/geoview-core/src/lib.rs

//! # geoview-core
//!
//! Host-independent logic behind the geoview page: a static city table and a
//! one-shot GeoJSON loader that renders a feature summary (or a fallback raw
//! view) into a single page container.
//!
//! Hosts supply two things:
//! - a [`Surface`] to render into (the in-memory [`Page`] or a real DOM), and
//! - a [`Transport`] that performs the single GET request.
//!
//! ```rust
//! use geoview_core::prelude::*;
//!
//! let config = PageConfig::default();
//! let mut page = Page::new(&config.container_id);
//! mount_city_table(&mut page, &config.container_id, &default_cities()).unwrap();
//! assert!(page.to_html().contains("Green Bay"));
//! ```

pub mod cities;
pub mod config;
pub mod document;
pub mod dom;
pub mod error;
pub mod format;
pub mod loader;
pub mod preview;
pub mod render;
pub mod resolve;
pub mod surface;
pub mod transport;

// Re-exports
pub use crate::cities::{default_cities, mount_city_table, render_city_table, CityRecord, SizeBand};
pub use crate::config::PageConfig;
pub use crate::document::{Feature, FeatureCollection, GeoDocument, Geometry};
pub use crate::dom::{Element, Node};
pub use crate::error::{GeoViewError, LoadError, Result};
pub use crate::loader::{fetch_document, initialize, GeoDataLoader, LoadState, Outcome};
pub use crate::resolve::{pick_prop, CandidateKeys, FeatureSummary};
pub use crate::surface::{Page, Surface};
pub use crate::transport::{HttpResponse, PageOrigin, Transport, TransportError};

pub mod prelude {
    pub use crate::cities::{default_cities, mount_city_table, CityRecord, SizeBand};
    pub use crate::config::PageConfig;
    pub use crate::document::GeoDocument;
    pub use crate::error::{GeoViewError, LoadError};
    pub use crate::loader::{initialize, GeoDataLoader, LoadState};
    pub use crate::surface::{Page, Surface};
    pub use crate::transport::{HttpResponse, PageOrigin, Transport, TransportError};
}
