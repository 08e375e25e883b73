//! geoview — Command-line host for geoview-core
//!
//! Runs the same page load a browser would (static city table, then the
//! GeoJSON section) and writes the resulting page as static HTML.
//!
//! Usage examples
//! --------------
//!
//! - Print the static city table
//!   $ geoview cities
//!
//! - Render a page from a local GeoJSON file
//!   $ geoview render data/MegaCities.geojson -o page.html
//!
//! - Render against a running server, like the page would fetch it
//!   $ geoview --base-url http://localhost:8000/ render
//!
//! - Summarise a GeoJSON source in the terminal
//!   $ geoview inspect https://example.org/places.geojson
//!
//! Logging goes to stderr; set `RUST_LOG=debug` for transport details.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use geoview_cli::transport::{origin_for, resolve_location, CliTransport};
use geoview_core::document::pretty_json;
use geoview_core::render::{FALLBACK_TEXT, NO_FEATURES_TEXT};
use geoview_core::{
    default_cities, fetch_document, initialize, FeatureSummary, GeoDocument, LoadState, Page,
    PageConfig,
};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => PageConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PageConfig::default(),
    };
    let base = args.base_url.as_deref();

    match args.command {
        Commands::Cities => {
            println!("{:<12} {:>12}  City Size", "City", "Population");
            for city in default_cities() {
                println!(
                    "{:<12} {:>12}  {}",
                    city.name,
                    geoview_core::format::format_integer(city.population),
                    city.size()
                );
            }
        }

        Commands::Render {
            source,
            output,
            container,
            title,
            fragment,
        } => {
            if let Some(container) = container {
                config.container_id = container;
            }
            if let Some(title) = title {
                config.section_title = title;
            }
            let source = source.unwrap_or_else(|| config.resource_path.clone());
            let location = resolve_location(base, &source)?;
            let origin = origin_for(base, &location);
            config.resource_path = location.clone();
            config.validate()?;

            log::info!("Rendering page from {location}");
            let transport = CliTransport::for_location(&location)?;
            let title = config.section_title.clone();
            let mut page = Page::new(&config.container_id);
            let state = pollster::block_on(initialize(&mut page, &transport, config, origin))?;

            let html = if fragment {
                page.to_html()
            } else {
                page.to_document(&title)
            };
            write_output(output.as_deref(), &html)?;

            // The page (with its error status) is written either way.
            if let LoadState::Failed(err) = state {
                bail!("GeoJSON load failed: {err}");
            }
        }

        Commands::Inspect { source } => {
            let source = source.unwrap_or_else(|| config.resource_path.clone());
            let location = resolve_location(base, &source)?;
            let transport = CliTransport::for_location(&location)?;
            let value = pollster::block_on(fetch_document(&transport, &location))
                .with_context(|| format!("loading {location}"))?;

            match GeoDocument::classify(value) {
                GeoDocument::FeatureCollection(fc) if fc.is_empty() => {
                    println!("{NO_FEATURES_TEXT}");
                }
                GeoDocument::FeatureCollection(fc) => {
                    for (i, feature) in fc.features.iter().enumerate() {
                        let row = FeatureSummary::resolve(i, feature, &config);
                        println!(
                            "{:>4}  {} | {} | {} | {}",
                            row.index, row.name, row.country, row.population, row.geometry
                        );
                    }
                }
                GeoDocument::Other(value) => {
                    println!("{FALLBACK_TEXT}");
                    println!("{}", pretty_json(&value));
                }
            }
        }
    }

    Ok(())
}

fn write_output(output: Option<&Path>, html: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
