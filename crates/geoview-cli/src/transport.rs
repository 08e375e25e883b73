// crates/geoview-cli/src/transport.rs

//! Native transports: blocking HTTP for `http(s)://` sources and plain file
//! reads for everything else.
//!
//! File reads mirror what a browser does on a file origin: a missing or
//! unreadable file is reported as a generic fetch failure.

use geoview_core::{HttpResponse, PageOrigin, Transport, TransportError};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

pub const FILE_SCHEME: &str = "file://";

pub fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Resolves `source` against an optional base the way a page resolves a
/// relative fetch path against its own URL.
pub fn resolve_location(base: Option<&str>, source: &str) -> anyhow::Result<String> {
    let Some(base) = base else {
        return Ok(source.to_string());
    };
    if source.contains("://") {
        return Ok(source.to_string());
    }

    #[cfg(feature = "http")]
    {
        if is_remote(base) || base.starts_with(FILE_SCHEME) {
            let joined = reqwest::Url::parse(base)?.join(source)?;
            return Ok(joined.to_string());
        }
    }

    Ok(Path::new(base).join(source).to_string_lossy().to_string())
}

/// Origin of the "page": the base when one is given, else the source itself.
pub fn origin_for(base: Option<&str>, location: &str) -> PageOrigin {
    PageOrigin::from_location(base.unwrap_or(location))
}

/* --------------------------------------------------------------------------
   File transport
-------------------------------------------------------------------------- */

#[derive(Debug, Default, Clone, Copy)]
pub struct FileTransport;

impl FileTransport {
    fn path_of(location: &str) -> PathBuf {
        PathBuf::from(location.strip_prefix(FILE_SCHEME).unwrap_or(location))
    }

    /// Opens a file, buffers it, and wraps `.gz` files in a Gzip decoder.
    fn open_stream(path: &Path) -> io::Result<Box<dyn Read>> {
        let reader = BufReader::new(File::open(path)?);

        #[cfg(feature = "compact")]
        {
            if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("gz")) {
                use flate2::read::GzDecoder;
                return Ok(Box::new(GzDecoder::new(reader)));
            }
        }

        Ok(Box::new(reader))
    }

    fn read(path: &Path) -> Result<String, TransportError> {
        let mut stream = Self::open_stream(path).map_err(|e| classify_io(path, e))?;
        let mut bytes = Vec::new();
        stream
            .read_to_end(&mut bytes)
            .map_err(|e| classify_io(path, e))?;
        Ok(decode_body(&bytes))
    }
}

/// UTF-8 text as a browser decodes a response: a leading BOM is dropped.
fn decode_body(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}

fn classify_io(path: &Path, e: io::Error) -> TransportError {
    let message = format!("Failed to fetch {}: {}", path.display(), e);
    match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            TransportError::generic(message)
        }
        _ => TransportError::specific(message),
    }
}

impl Transport for FileTransport {
    async fn get(&self, resource: &str) -> Result<HttpResponse, TransportError> {
        let path = Self::path_of(resource);
        log::debug!("reading {}", path.display());
        Self::read(&path).map(HttpResponse::ok)
    }
}

/* --------------------------------------------------------------------------
   HTTP transport
-------------------------------------------------------------------------- */

#[cfg(feature = "http")]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpTransport {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("geoview/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[cfg(feature = "http")]
impl Transport for HttpTransport {
    async fn get(&self, resource: &str) -> Result<HttpResponse, TransportError> {
        log::debug!("GET {resource}");
        // Every failure to obtain a response is the unspecific kind, like a
        // browser `fetch` rejection.
        let response = self
            .client
            .get(resource)
            .send()
            .map_err(|e| TransportError::generic(format!("Failed to fetch: {e}")))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response
            .text()
            .map_err(|e| TransportError::generic(format!("Failed to read body: {e}")))?;
        Ok(HttpResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

/// Picks the transport matching the location's scheme.
pub enum CliTransport {
    File(FileTransport),
    #[cfg(feature = "http")]
    Http(HttpTransport),
}

impl CliTransport {
    pub fn for_location(location: &str) -> anyhow::Result<Self> {
        if is_remote(location) {
            #[cfg(feature = "http")]
            return Ok(CliTransport::Http(HttpTransport::new()?));
            #[cfg(not(feature = "http"))]
            anyhow::bail!("{location} is remote but the 'http' feature is disabled");
        }
        Ok(CliTransport::File(FileTransport))
    }
}

impl Transport for CliTransport {
    async fn get(&self, resource: &str) -> Result<HttpResponse, TransportError> {
        match self {
            CliTransport::File(t) => t.get(resource).await,
            #[cfg(feature = "http")]
            CliTransport::Http(t) => t.get(resource).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoview_core::{initialize, LoadState, Outcome, Page, PageConfig};
    use rstest::rstest;
    use std::fs;
    use testdir::testdir;

    #[rstest]
    #[case(None, "data/MegaCities.geojson", "data/MegaCities.geojson")]
    #[case(Some("http://localhost:8000/"), "data/MegaCities.geojson", "http://localhost:8000/data/MegaCities.geojson")]
    #[case(Some("http://localhost:8000/index.html"), "data/a.geojson", "http://localhost:8000/data/a.geojson")]
    #[case(Some("http://localhost:8000/"), "https://example.org/x.geojson", "https://example.org/x.geojson")]
    fn resolves_against_base(#[case] base: Option<&str>, #[case] source: &str, #[case] expected: &str) {
        assert_eq!(resolve_location(base, source).unwrap(), expected);
    }

    #[test]
    fn origin_prefers_base() {
        assert!(origin_for(None, "data/x.geojson").is_file());
        assert!(!origin_for(Some("http://localhost:8000/"), "data/x.geojson").is_file());
        assert!(!origin_for(None, "https://example.org/x.geojson").is_file());
    }

    #[test]
    fn reads_plain_file() {
        let dir = testdir!();
        let path = dir.join("cities.geojson");
        fs::write(&path, r#"{"type":"FeatureCollection","features":[]}"#).unwrap();

        let response = pollster::block_on(FileTransport.get(path.to_str().unwrap())).unwrap();
        assert!(response.is_success());
        assert!(response.body.contains("FeatureCollection"));
    }

    #[test]
    fn byte_order_mark_is_dropped() {
        let dir = testdir!();
        let path = dir.join("bom.geojson");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(br#"{"type":"FeatureCollection","features":[]}"#);
        fs::write(&path, bytes).unwrap();

        let config = PageConfig {
            resource_path: path.to_str().unwrap().to_string(),
            ..PageConfig::default()
        };
        let mut page = Page::new(&config.container_id);
        let state =
            pollster::block_on(initialize(&mut page, &FileTransport, config, PageOrigin::File))
                .unwrap();
        assert!(
            matches!(state, LoadState::Succeeded(Outcome::NoFeatures)),
            "state was {state:?}"
        );
    }

    #[test]
    fn file_scheme_is_stripped() {
        let dir = testdir!();
        let path = dir.join("a.json");
        fs::write(&path, "{}").unwrap();
        let location = format!("{FILE_SCHEME}{}", path.display());
        let response = pollster::block_on(FileTransport.get(&location)).unwrap();
        assert_eq!(response.body, "{}");
    }

    #[test]
    fn missing_file_is_generic_failure() {
        let dir = testdir!();
        let path = dir.join("nope.geojson");
        let err = pollster::block_on(FileTransport.get(path.to_str().unwrap())).unwrap_err();
        assert!(err.generic);
        assert!(err.message.contains("nope.geojson"));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_files_are_decompressed() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        let dir = testdir!();
        let path = dir.join("cities.geojson.gz");
        let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
        encoder.write_all(br#"{"type":"Point"}"#).unwrap();
        encoder.finish().unwrap();

        let response = pollster::block_on(FileTransport.get(path.to_str().unwrap())).unwrap();
        assert_eq!(response.body, r#"{"type":"Point"}"#);
    }

    #[test]
    fn local_locations_use_file_transport() {
        assert!(matches!(
            CliTransport::for_location("data/x.geojson").unwrap(),
            CliTransport::File(_)
        ));
    }
}
