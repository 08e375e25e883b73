//! geoview-cli
//! ===========
//!
//! Command-line host for `geoview-core`.
//!
//! This crate primarily provides a binary (`geoview`). The library target
//! carries the native transports so they can be tested and reused; see the
//! README for full usage examples.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! geoview --help
//! geoview cities
//! geoview render data/MegaCities.geojson -o page.html
//! geoview --base-url http://localhost:8000/ render
//! geoview inspect data/MegaCities.geojson
//! ```
//!
//! For programmatic access to the page model and the loader, use the
//! [`geoview-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod transport;
