//! HTTP helper functions for Crux Core
//!
//! This module extracts common HTTP response handling logic from macros
//! into debuggable, testable functions.

use crux_http::Response;
use serde::de::DeserializeOwned;

use crate::types::{Envelope, ErrorEnvelope};

/// Base URL for remote API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires absolute
/// URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The shell replaces this prefix with the configured API base URL and cohort
/// segment before sending the request.
pub const BASE_URL: &str = "https://relative";

/// Read path for the events collection. The remote routing is case sensitive
/// and reads are served under the capitalized name.
pub const EVENTS_PATH: &str = "/Events";
/// Write path for the events collection.
pub const EVENTS_WRITE_PATH: &str = "/events";
pub const GUESTS_PATH: &str = "/guests";
pub const RSVPS_PATH: &str = "/rsvps";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use party_planner_core::http_helpers::build_url;
/// let url = build_url("/guests");
/// assert_eq!(url, "https://relative/guests");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Read path of a single event
pub fn event_path(id: u32) -> String {
    format!("{EVENTS_PATH}/{id}")
}

/// Delete path of a single event
pub fn event_write_path(id: u32) -> String {
    format!("{EVENTS_WRITE_PATH}/{id}")
}

/// Validates HTTP response.
///
/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Builds the failure message from a status and an optional body.
///
/// The API's own error message is preferred when the body is an error envelope.
pub fn describe_failure(action: &str, status: impl std::fmt::Display, body: Option<&[u8]>) -> String {
    match body {
        None => format!("{action} failed: HTTP {status} (No body)"),
        Some([]) => format!("{action} failed: HTTP {status} (Empty body)"),
        Some(bytes) => match serde_json::from_slice::<ErrorEnvelope>(bytes) {
            Ok(envelope) => format!("{action} failed: HTTP {status}: {}", envelope.error.message),
            Err(_) => match std::str::from_utf8(bytes) {
                Ok(text) => format!("{action} failed: HTTP {status}: {text}"),
                Err(e) => format!("{action} failed: HTTP {status} (Invalid UTF-8: {e})"),
            },
        },
    }
}

/// Extracts error message from HTTP response.
pub fn extract_error_message(action: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status().to_string();
    let body = response.take_body();
    describe_failure(action, status, body.as_deref())
}

/// Unwrap the `data` member of a response envelope.
pub fn parse_envelope<T: DeserializeOwned>(action: &str, body: &[u8]) -> Result<T, String> {
    serde_json::from_slice::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| format!("{action}: JSON parse error: {e}"))
}

/// Parse the enveloped JSON payload of a response.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_envelope_response<T: DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    match response.take_body() {
        Some(body) => parse_envelope(action, &body),
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Check response status only (no body parsing).
pub fn check_response_status(action: &str, response: &mut Response<Vec<u8>>) -> Result<(), String> {
    if is_response_success(response) {
        Ok(())
    } else {
        Err(extract_error_message(action, response))
    }
}

/// Convert a transport error into the message that gets logged.
pub fn map_http_error(action: &str, error: crux_http::HttpError) -> String {
    format!("{action} failed: {error}")
}

/// Process HTTP response result and parse the enveloped JSON
pub fn process_envelope_response<T: DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_envelope_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Process HTTP response result and check status only (no JSON parsing)
pub fn process_status_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), String> {
    match result {
        Ok(mut response) => check_response_status(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Process HTTP response result and hand back the raw status code.
///
/// Used where the caller branches on a specific status rather than on 2xx.
pub fn process_status_code(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<u16, String> {
    match result {
        Ok(response) => Ok(response.status().into()),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Handle request creation error - logs it and does nothing else
///
/// This is used when building an HTTP request fails (e.g., JSON serialization error).
pub fn handle_request_error<E>(
    action: &str,
    error: impl std::fmt::Display,
) -> crux_core::Command<crate::Effect, E>
where
    E: Send + 'static,
{
    log::error!("Failed to create {action} request: {error}");
    crux_core::Command::done()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Party;

    #[test]
    fn event_paths_keep_remote_casing() {
        assert_eq!(build_url(&event_path(4)), "https://relative/Events/4");
        assert_eq!(build_url(&event_write_path(4)), "https://relative/events/4");
    }

    #[test]
    fn envelope_data_is_unwrapped() {
        let body = br#"{"success":true,"data":[{"id":1,"name":"Gala","description":"d","date":"2025-01-15T00:00:00.000Z","location":"Hall","cohortId":3}]}"#;

        let parties: Vec<Party> = parse_envelope("List events", body).expect("valid envelope");

        assert_eq!(parties.len(), 1);
        assert_eq!(parties[0].name, "Gala");
    }

    #[test]
    fn missing_data_is_a_parse_error() {
        let result: Result<Vec<Party>, String> = parse_envelope("List events", br#"{"items":[]}"#);

        assert!(result.unwrap_err().starts_with("List events: JSON parse error"));
    }

    #[test]
    fn failure_prefers_api_error_message() {
        let body = br#"{"success":false,"error":{"name":"NotFound","message":"Event 9 not found"}}"#;

        assert_eq!(
            describe_failure("Get event", 404, Some(body)),
            "Get event failed: HTTP 404: Event 9 not found"
        );
    }

    #[test]
    fn failure_without_body() {
        assert_eq!(
            describe_failure("Delete event", 500, Some(&[])),
            "Delete event failed: HTTP 500 (Empty body)"
        );
        assert_eq!(
            describe_failure("Delete event", 500, None),
            "Delete event failed: HTTP 500 (No body)"
        );
    }
}
