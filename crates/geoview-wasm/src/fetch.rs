// crates/geoview-wasm/src/fetch.rs

use geoview_core::{HttpResponse, Transport, TransportError};
use gloo_net::http::Request;

/// `fetch()` through gloo-net. Relative paths resolve against the page URL.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

fn transport_error(err: gloo_net::Error) -> TransportError {
    match err {
        // A rejected fetch surfaces as a JS TypeError, whatever the cause.
        gloo_net::Error::JsError(js) => TransportError {
            generic: js.name == "TypeError",
            message: js.message,
        },
        other => TransportError::specific(other.to_string()),
    }
}

impl Transport for FetchTransport {
    async fn get(&self, resource: &str) -> Result<HttpResponse, TransportError> {
        let response = Request::get(resource)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let status_text = response.status_text();
        if !response.ok() {
            return Ok(HttpResponse {
                status,
                status_text,
                body: String::new(),
            });
        }

        let body = response.text().await.map_err(transport_error)?;
        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}
