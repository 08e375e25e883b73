// crates/geoview-core/src/transport.rs

//! The single network operation of a page load, abstracted so that the
//! browser host (fetch) and the native host (HTTP client or disk) share the
//! same pipeline.

use std::fmt;

/// A complete response. The body is read eagerly; the loader decides whether
/// to look at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn with_status(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: String::new(),
        }
    }

    /// 200–299, like `Response.ok`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request did not produce a response at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub message: String,
    /// An unspecific "could not fetch" failure (what browsers raise as a
    /// `TypeError`), as opposed to a failure with a known, specific cause.
    pub generic: bool,
}

impl TransportError {
    pub fn generic(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            generic: true,
        }
    }

    pub fn specific(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            generic: false,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TransportError {}

/// Performs one GET. Implementations do not retry and enforce no timeout of
/// their own beyond what the underlying client does.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, resource: &str) -> Result<HttpResponse, TransportError>;
}

/// Where the page itself was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOrigin {
    /// A bare local file (`file:` scheme); requests are often blocked.
    File,
    /// Any network-capable origin.
    Network(String),
}

impl PageOrigin {
    /// Builds an origin from a protocol string such as `"file:"` or `"https:"`.
    pub fn from_protocol(protocol: &str) -> Self {
        let scheme = protocol.trim().trim_end_matches(':').to_ascii_lowercase();
        if scheme == "file" {
            PageOrigin::File
        } else {
            PageOrigin::Network(scheme)
        }
    }

    /// Origin of a location string. Anything without an `http(s)` scheme
    /// (plain paths included) counts as a file origin.
    pub fn from_location(location: &str) -> Self {
        match location.split_once("://") {
            Some((scheme, _)) if !scheme.eq_ignore_ascii_case("file") => {
                PageOrigin::from_protocol(scheme)
            }
            _ => PageOrigin::File,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, PageOrigin::File)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(299, true)]
    #[case(199, false)]
    #[case(304, false)]
    #[case(404, false)]
    #[case(500, false)]
    fn success_range(#[case] status: u16, #[case] ok: bool) {
        assert_eq!(HttpResponse::with_status(status, "").is_success(), ok);
    }

    #[rstest]
    #[case("file:", true)]
    #[case("FILE:", true)]
    #[case("http:", false)]
    #[case("https:", false)]
    fn origin_from_protocol(#[case] protocol: &str, #[case] is_file: bool) {
        assert_eq!(PageOrigin::from_protocol(protocol).is_file(), is_file);
    }

    #[rstest]
    #[case("file:///home/me/index.html", true)]
    #[case("data/MegaCities.geojson", true)]
    #[case("/srv/site/index.html", true)]
    #[case("http://localhost:8000/", false)]
    #[case("https://example.org/data.geojson", false)]
    fn origin_from_location(#[case] location: &str, #[case] is_file: bool) {
        assert_eq!(PageOrigin::from_location(location).is_file(), is_file);
    }
}
