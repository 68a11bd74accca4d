//! Remote Endpoints
//!
//! Fetches the kids list from the sheet endpoint and posts contact form
//! submissions to the form relay. Both URLs are fixed; there is no other
//! configuration.

use std::fmt;

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, Response};

use crate::models::{visible_kids, Kid, KidsPayload};

/// Google Apps Script endpoint publishing the kids sheet as JSON.
pub const KIDS_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbzukjCUcoICp2ZfGAjEeQ7u3PxsZa2JUSsJXbxcnuIBZ48usjP6GdP_VCRTrUb3g--TaA/exec";

/// Formspree relay the contact forms post to.
pub const RELAY_ENDPOINT: &str = "https://formspree.io/f/movklbol";

/// Why a kids fetch failed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Non-2xx response, or the endpoint was unreachable (no status).
    Network(Option<u16>),
    /// Body was not JSON or did not match the expected shape.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(Some(status)) => write!(f, "network error: {}", status),
            FetchError::Network(None) => write!(f, "network error"),
            FetchError::Parse(detail) => write!(f, "unexpected response: {}", detail),
        }
    }
}

/// Terminal outcome of a relay submission that got a response.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted,
    /// Relay rejected the submission, optionally with a server-supplied
    /// reason from its `errors` array.
    Rejected(Option<String>),
}

/// The submission request itself failed (network or response handling).
#[derive(Debug, Clone, PartialEq)]
pub struct TransportError;

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission transport error")
    }
}

/// JSON body the relay returns on rejection.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RelayResponse {
    #[serde(default)]
    errors: Vec<RelayError>,
}

#[derive(Debug, Default, Deserialize)]
struct RelayError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl RelayResponse {
    /// First usable message from the `errors` array, if any.
    pub(crate) fn first_error(&self) -> Option<String> {
        self.errors
            .iter()
            .filter_map(|e| e.message.as_deref().or(e.error.as_deref()))
            .map(str::trim)
            .find(|m| !m.is_empty())
            .map(str::to_string)
    }
}

/// GET the kids list and narrow it to the visible set.
///
/// Exactly one terminal outcome per call; no retries, no timeout.
pub async fn fetch_kids() -> Result<Vec<Kid>, FetchError> {
    let window = web_sys::window().ok_or(FetchError::Network(None))?;
    let resp_value = JsFuture::from(window.fetch_with_str(KIDS_ENDPOINT))
        .await
        .map_err(|_| FetchError::Network(None))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::Network(None))?;
    if !resp.ok() {
        return Err(FetchError::Network(Some(resp.status())));
    }

    let body = resp
        .json()
        .map_err(|e| FetchError::Parse(js_detail(&e)))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|e| FetchError::Parse(js_detail(&e)))?;
    let payload: KidsPayload =
        serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Parse(e.to_string()))?;

    Ok(visible_kids(payload.into_kids()))
}

/// POST named form fields to the relay as multipart form data, asking for
/// a JSON response. Values are trimmed before serialization.
pub async fn submit_contact_form(
    fields: &[(&str, String)],
) -> Result<SubmitOutcome, TransportError> {
    let form = FormData::new().map_err(|_| TransportError)?;
    for (name, value) in fields {
        form.append_with_str(name, value.trim())
            .map_err(|_| TransportError)?;
    }

    let headers = Headers::new().map_err(|_| TransportError)?;
    headers
        .append("Accept", "application/json")
        .map_err(|_| TransportError)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form.as_ref());
    opts.set_headers(headers.as_ref());

    let request =
        Request::new_with_str_and_init(RELAY_ENDPOINT, &opts).map_err(|_| TransportError)?;
    let window = web_sys::window().ok_or(TransportError)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| TransportError)?;
    let resp: Response = resp_value.dyn_into().map_err(|_| TransportError)?;

    if resp.ok() {
        return Ok(SubmitOutcome::Accepted);
    }

    // Best effort: surface the relay's own message when the body parses.
    let reason = match resp.json() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| serde_wasm_bindgen::from_value::<RelayResponse>(v).ok())
            .and_then(|r| r.first_error()),
        Err(_) => None,
    };
    Ok(SubmitOutcome::Rejected(reason))
}

fn js_detail(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
