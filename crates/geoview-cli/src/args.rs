use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geoview
#[derive(Debug, Parser)]
#[command(
    name = "geoview",
    version,
    about = "Render the city table and a GeoJSON feature summary as static HTML"
)]
pub struct CliArgs {
    /// Optional JSON page config (container id, resource path, candidate keys, ...)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL the resource path is resolved against (e.g. http://localhost:8000/)
    #[arg(short = 'b', long = "base-url", global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the page load and write the resulting HTML
    Render {
        /// GeoJSON source: URL or local path (default: the configured resource path)
        source: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Id of the container element
        #[arg(long = "container")]
        container: Option<String>,

        /// Heading of the GeoJSON section
        #[arg(long = "title")]
        title: Option<String>,

        /// Emit only the container element instead of a full HTML document
        #[arg(long = "fragment")]
        fragment: bool,
    },

    /// Print the static city table
    Cities,

    /// Print the per-feature summary of a GeoJSON source
    Inspect {
        /// GeoJSON source: URL or local path (default: the configured resource path)
        source: Option<String>,
    },
}
