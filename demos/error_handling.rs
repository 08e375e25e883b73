//! Error handling example for geoview-rs
//!
//! This example demonstrates how load failures show up in the page and in
//! the returned [`LoadState`], and how a missing container is reported.

use geoview_core::prelude::*;

/// Fails every request the same way.
enum FailingTransport {
    Status(u16, &'static str),
    Blocked,
    Garbage,
}

impl Transport for FailingTransport {
    async fn get(&self, _resource: &str) -> Result<HttpResponse, TransportError> {
        match self {
            Self::Status(code, text) => Ok(HttpResponse::with_status(*code, *text)),
            Self::Blocked => Err(TransportError::generic("Failed to fetch")),
            Self::Garbage => Ok(HttpResponse::ok("{ not json")),
        }
    }
}

fn status_line(page: &Page) -> String {
    page.get(geoview_core::render::STATUS_ID)
        .map(|el| el.text_content())
        .unwrap_or_default()
}

fn run(
    label: &str,
    transport: &FailingTransport,
    origin: PageOrigin,
) -> geoview_core::Result<()> {
    let config = PageConfig::default();
    let mut page = Page::new(&config.container_id);
    match pollster::block_on(initialize(&mut page, transport, config, origin))? {
        LoadState::Failed(err) => {
            println!("  {label}: {err}");
            println!("    status: {}", status_line(&page));
            println!(
                "    hint shown: {}",
                page.to_html().contains("file://")
            );
        }
        other => println!("  {label}: unexpected state {}", other.name()),
    }
    Ok(())
}

fn main() -> geoview_core::Result<()> {
    println!("=== geoview-rs Error Handling Example ===\n");

    // Example 1: Load failures
    println!("--- Example 1: Load failures ---");
    let https = || PageOrigin::Network("https".into());
    run("HTTP 404", &FailingTransport::Status(404, "Not Found"), https())?;
    run("Invalid JSON", &FailingTransport::Garbage, https())?;
    run("Blocked on https", &FailingTransport::Blocked, https())?;
    run("Blocked on file://", &FailingTransport::Blocked, PageOrigin::File)?;
    println!();

    // Example 2: Missing container
    println!("--- Example 2: Missing container ---");
    let mut page = Page::empty();
    let config = PageConfig::default();
    match pollster::block_on(initialize(
        &mut page,
        &FailingTransport::Blocked,
        config,
        PageOrigin::File,
    )) {
        Ok(state) => println!("  unexpected: {}", state.name()),
        Err(GeoViewError::MissingContainer(id)) => println!("  ✗ no element with id {id}"),
        Err(e) => {
            eprintln!("  ✗ {e}");
            return Err(e);
        }
    }

    Ok(())
}
