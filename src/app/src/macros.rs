// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{
    build_url, handle_request_error, map_http_error, process_envelope_response,
    process_status_code, process_status_response, BASE_URL,
};

/// Macro for GET requests expecting an enveloped JSON response.
/// Requires domain parameters for event wrapping.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The shell swaps this prefix for the configured API location.
///
/// # Example
/// ```ignore
/// api_get!(Party, PartyEvent, EVENTS_PATH, ListResponse, "List events", Vec<Party>)
/// ```
#[macro_export]
macro_rules! api_get {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr, $response_type:ty) => {
        $crate::HttpCmd::get($crate::build_url(&$endpoint))
            .build()
            .then_send(|result| {
                let event_result: Result<$response_type, String> =
                    $crate::process_envelope_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            })
    };
}

/// Macro for POST requests with a JSON body, checking the status only.
///
/// # Example
/// ```ignore
/// api_post!(Party, PartyEvent, EVENTS_WRITE_PATH, CreateResponse, "Create event",
///     body_json: &request
/// )
/// ```
#[macro_export]
macro_rules! api_post {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr) => {{
        match $crate::HttpCmd::post($crate::build_url(&$endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => builder.build().then_send(|result| {
                let event_result = $crate::process_status_response($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            }),
            Err(e) => $crate::handle_request_error($action, e),
        }
    }};
}

/// Macro for DELETE requests handing the raw status code to the response event.
///
/// # Example
/// ```ignore
/// api_delete!(Party, PartyEvent, event_write_path(id), RemoveResponse, "Delete event")
/// ```
#[macro_export]
macro_rules! api_delete {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr) => {
        $crate::HttpCmd::delete($crate::build_url(&$endpoint))
            .build()
            .then_send(|result| {
                let event_result = $crate::process_status_code($action, result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            })
    };
}

/// Macro for handling response events. Failures are logged and leave the model untouched.
///
/// The success body returns the follow-up command.
///
/// # Example
/// ```ignore
/// handle_response!(model, result, {
///     on_success: |m, events| {
///         m.events = events;
///         render()
///     },
/// })
/// ```
#[macro_export]
macro_rules! handle_response {
    ($model:expr, $result:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block $(,)?
    }) => {{
        match $result {
            Ok($value) => {
                let $success_model = &mut *$model;
                $success_body
            }
            Err(e) => {
                log::error!("{e}");
                crux_core::Command::done()
            }
        }
    }};
}
