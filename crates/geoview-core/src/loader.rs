// crates/geoview-core/src/loader.rs

//! # GeoJSON loader
//!
//! A one-shot state machine: `Idle → Loading → {Succeeded, Failed}`.
//!
//! - [`GeoDataLoader::start`] runs synchronously: it appends the section with
//!   a "Loading…" status line to the container and enters `Loading`.
//! - [`GeoDataLoader::run`] performs the only suspension point (the GET) and
//!   hands the outcome to [`GeoDataLoader::finish`], which renders either the
//!   summary, the fallback view or the error status.
//!
//! Hosts that drive the fetch themselves can call `finish` directly.
//! There are no retries; a failed load stays failed.

use crate::cities::{default_cities, mount_city_table};
use crate::config::PageConfig;
use crate::document::GeoDocument;
use crate::error::{GeoViewError, LoadError, Result};
use crate::render::{self, CONTENT_ID, SECTION_ID, STATUS_ID};
use crate::resolve::FeatureSummary;
use crate::surface::Surface;
use crate::transport::{HttpResponse, PageOrigin, Transport, TransportError};
use serde_json::Value;

/// What a successful load rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A summary table with this many feature rows.
    Summary { features: usize },
    /// A FeatureCollection with an empty `features` array.
    NoFeatures,
    /// Valid JSON that is not a FeatureCollection, shown verbatim.
    Fallback,
}

#[derive(Debug)]
pub enum LoadState {
    Idle,
    Loading,
    Succeeded(Outcome),
    Failed(LoadError),
}

impl LoadState {
    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Succeeded(_) => "succeeded",
            LoadState::Failed(_) => "failed",
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

pub struct GeoDataLoader {
    config: PageConfig,
    origin: PageOrigin,
    state: LoadState,
}

impl GeoDataLoader {
    pub fn new(config: PageConfig, origin: PageOrigin) -> Self {
        Self {
            config,
            origin,
            state: LoadState::Idle,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn into_state(self) -> LoadState {
        self.state
    }

    fn expect_state(&self, expected: &'static str) -> Result<()> {
        if self.state.name() == expected {
            Ok(())
        } else {
            Err(GeoViewError::InvalidState {
                expected,
                actual: self.state.name(),
            })
        }
    }

    /// `Idle → Loading`: appends the section skeleton to the container.
    pub fn start<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        self.expect_state("idle")?;
        let skeleton = render::section_skeleton(&self.config.section_title);
        surface.append_child(&self.config.container_id, skeleton.into())?;
        self.state = LoadState::Loading;
        log::debug!("GeoJSON loader started for {}", self.config.resource_path);
        Ok(())
    }

    /// Fetches the configured resource and finishes the load.
    pub async fn run<S, T>(&mut self, surface: &mut S, transport: &T) -> Result<&LoadState>
    where
        S: Surface + ?Sized,
        T: Transport,
    {
        self.expect_state("loading")?;
        log::debug!("fetching {}", self.config.resource_path);
        let fetched = transport.get(&self.config.resource_path).await;
        self.finish(surface, fetched)
    }

    /// `Loading → Succeeded | Failed`, rendering the result.
    ///
    /// An `Err` here means the surface itself failed; a failed *load* is
    /// reported through [`LoadState::Failed`].
    pub fn finish<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        fetched: std::result::Result<HttpResponse, TransportError>,
    ) -> Result<&LoadState> {
        self.expect_state("loading")?;
        match ingest(fetched) {
            Ok(value) => {
                let outcome = self.render_document(surface, value)?;
                log::info!("GeoJSON loaded: {:?}", outcome);
                self.state = LoadState::Succeeded(outcome);
            }
            Err(err) => {
                log::error!("GeoJSON load failed: {err}");
                self.render_failure(surface, &err)?;
                self.state = LoadState::Failed(err);
            }
        }
        Ok(&self.state)
    }

    fn render_document<S: Surface + ?Sized>(&self, surface: &mut S, value: Value) -> Result<Outcome> {
        surface.replace_children(STATUS_ID, render::loaded_status())?;
        surface.append_child(
            SECTION_ID,
            render::raw_preview(&value, self.config.raw_preview_limit).into(),
        )?;

        match GeoDocument::classify(value) {
            GeoDocument::FeatureCollection(fc) if fc.is_empty() => {
                surface.replace_children(CONTENT_ID, render::no_features())?;
                Ok(Outcome::NoFeatures)
            }
            GeoDocument::FeatureCollection(fc) => {
                let rows: Vec<FeatureSummary> = fc
                    .features
                    .iter()
                    .enumerate()
                    .map(|(i, f)| FeatureSummary::resolve(i, f, &self.config))
                    .collect();
                surface.append_child(CONTENT_ID, render::summary_table(&rows).into())?;
                Ok(Outcome::Summary {
                    features: rows.len(),
                })
            }
            GeoDocument::Other(value) => {
                surface.replace_children(CONTENT_ID, render::fallback_view(&value))?;
                Ok(Outcome::Fallback)
            }
        }
    }

    fn render_failure<S: Surface + ?Sized>(&self, surface: &mut S, err: &LoadError) -> Result<()> {
        surface.replace_children(STATUS_ID, render::error_status(&err.to_string()))?;
        // Best effort: any generic network failure on a file origin gets the
        // hint, even when blocking was not the actual cause.
        if err.is_generic_network() && self.origin.is_file() {
            surface.append_child(SECTION_ID, render::file_origin_hint().into())?;
        }
        Ok(())
    }
}

/// Status check, then JSON parse. The body of a failed response is never read.
fn ingest(
    fetched: std::result::Result<HttpResponse, TransportError>,
) -> std::result::Result<Value, LoadError> {
    let response = fetched?;
    if !response.is_success() {
        return Err(LoadError::HttpStatus {
            code: response.status,
            text: response.status_text,
        });
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// Fetches and parses a resource with the same status and parse rules as the
/// page load, without rendering anything.
pub async fn fetch_document<T: Transport>(
    transport: &T,
    resource: &str,
) -> std::result::Result<Value, LoadError> {
    ingest(transport.get(resource).await)
}

/// The page entry point: the static city table first, then the GeoJSON load.
///
/// A missing container aborts before anything is fetched.
pub async fn initialize<S, T>(
    surface: &mut S,
    transport: &T,
    config: PageConfig,
    origin: PageOrigin,
) -> Result<LoadState>
where
    S: Surface + ?Sized,
    T: Transport,
{
    mount_city_table(surface, &config.container_id, &default_cities())?;
    let mut loader = GeoDataLoader::new(config, origin);
    loader.start(surface)?;
    loader.run(surface, transport).await?;
    Ok(loader.into_state())
}
