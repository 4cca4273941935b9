use crux_core::{render::render, Command};
use log::{debug, error, warn};

use crate::events::{Event, PartyEvent};
use crate::http_helpers::{event_path, event_write_path, EVENTS_PATH, EVENTS_WRITE_PATH};
use crate::model::{BootstrapStage, Model};
use crate::types::Party;
use crate::{api_delete, api_get, api_post, handle_response, Effect};

use super::advance_bootstrap;

/// Status the API answers a successful deletion with
const NO_CONTENT: u16 = 204;

/// Handle event list, selection, creation and removal
pub fn handle(event: PartyEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        PartyEvent::List => {
            api_get!(Party, PartyEvent, EVENTS_PATH, ListResponse, "List events", Vec<Party>)
        }

        PartyEvent::ListResponse(result) => {
            let applied = handle_response!(model, result, {
                on_success: |model, events| {
                    model.events = events;
                    render()
                },
            });
            Command::all([applied, advance_bootstrap(model, BootstrapStage::LoadingEvents)])
        }

        PartyEvent::Select { id } => {
            debug!("selecting event {id}");
            api_get!(Party, PartyEvent, event_path(id), SelectResponse, "Get event", Party)
        }

        PartyEvent::SelectResponse(result) => handle_response!(model, result, {
            on_success: |model, party| {
                model.selected_event = Some(party);
                render()
            },
        }),

        PartyEvent::Create(form) => match form.into_request() {
            Ok(request) => {
                api_post!(Party, PartyEvent, EVENTS_WRITE_PATH, CreateResponse, "Create event",
                    body_json: &request
                )
            }
            Err(e) => {
                error!("Create event failed: {e}");
                Command::done()
            }
        },

        PartyEvent::CreateResponse(result) => handle_response!(model, result, {
            on_success: |_model, _| {
                Command::event(Event::Party(PartyEvent::List))
            },
        }),

        PartyEvent::Remove { id } => {
            debug!("removing event {id}");
            api_delete!(Party, PartyEvent, event_write_path(id), RemoveResponse, "Delete event")
        }

        PartyEvent::RemoveResponse(result) => handle_response!(model, result, {
            on_success: |model, status| {
                if status == NO_CONTENT {
                    model.selected_event = None;
                    Command::all([render(), Command::event(Event::Party(PartyEvent::List))])
                } else {
                    warn!("Delete event: unexpected status {status}, keeping state");
                    Command::done()
                }
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewPartyForm;
    use crux_http::protocol::HttpRequest;

    fn party(id: u32, name: &str) -> Party {
        Party {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            date: "2025-01-15T00:00:00.000Z".to_string(),
            location: "HQ".to_string(),
        }
    }

    fn http_requests(cmd: &mut Command<Effect, Event>) -> Vec<HttpRequest> {
        cmd.effects()
            .filter_map(|effect| match effect {
                Effect::Http(request) => Some(request.operation),
                _ => None,
            })
            .collect()
    }

    mod listing {
        use super::*;

        #[test]
        fn list_requests_capitalized_read_path() {
            let mut model = Model::default();

            let mut cmd = handle(PartyEvent::List, &mut model);

            let requests = http_requests(&mut cmd);
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0].method, "GET");
            assert_eq!(requests[0].url, "https://relative/Events");
        }

        #[test]
        fn list_response_replaces_events() {
            let mut model = Model {
                events: vec![party(1, "Old")],
                ..Default::default()
            };

            let _ = handle(
                PartyEvent::ListResponse(Ok(vec![party(2, "Gala"), party(3, "Picnic")])),
                &mut model,
            );

            assert_eq!(model.events, vec![party(2, "Gala"), party(3, "Picnic")]);
        }

        #[test]
        fn unchanged_list_still_renders() {
            let mut model = Model::default();

            let mut cmd = handle(PartyEvent::ListResponse(Ok(vec![])), &mut model);

            let renders = cmd
                .effects()
                .filter(|effect| matches!(effect, Effect::Render(_)))
                .count();
            assert_eq!(renders, 1);
        }

        #[test]
        fn list_failure_keeps_events() {
            let mut model = Model {
                events: vec![party(1, "Old")],
                ..Default::default()
            };

            let mut cmd = handle(
                PartyEvent::ListResponse(Err("List events failed: offline".to_string())),
                &mut model,
            );

            assert_eq!(model.events, vec![party(1, "Old")]);
            assert!(cmd.effects().next().is_none());
        }

        #[test]
        fn list_failure_still_advances_bootstrap() {
            let mut model = Model {
                bootstrap: BootstrapStage::LoadingEvents,
                ..Default::default()
            };

            let mut cmd = handle(
                PartyEvent::ListResponse(Err("List events failed: offline".to_string())),
                &mut model,
            );

            assert_eq!(model.bootstrap, BootstrapStage::LoadingGuests);
            let events: Vec<Event> = cmd.events().collect();
            assert_eq!(
                events,
                vec![Event::Guest(crate::events::GuestEvent::ListGuests)]
            );
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn select_fetches_single_event() {
            let mut model = Model::default();

            let mut cmd = handle(PartyEvent::Select { id: 7 }, &mut model);

            let requests = http_requests(&mut cmd);
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0].url, "https://relative/Events/7");
        }

        #[test]
        fn select_response_sets_selection() {
            let mut model = Model::default();

            let _ = handle(PartyEvent::SelectResponse(Ok(party(7, "Gala"))), &mut model);

            assert_eq!(model.selected_event, Some(party(7, "Gala")));
        }

        #[test]
        fn failed_fetch_keeps_previous_selection() {
            let mut model = Model {
                selected_event: Some(party(1, "Old")),
                ..Default::default()
            };

            let mut cmd = handle(
                PartyEvent::SelectResponse(Err(
                    "Get event failed: HTTP 404: Event 9 not found".to_string()
                )),
                &mut model,
            );

            assert_eq!(model.selected_event, Some(party(1, "Old")));
            assert!(cmd.effects().next().is_none());
            assert!(cmd.events().next().is_none());
        }
    }

    mod creation {
        use super::*;

        fn launch_form() -> NewPartyForm {
            NewPartyForm {
                name: "Launch".to_string(),
                description: "Kickoff".to_string(),
                date: "2025-01-15".to_string(),
                location: "HQ".to_string(),
            }
        }

        #[test]
        fn create_posts_normalized_event_once() {
            let mut model = Model::default();

            let mut cmd = handle(PartyEvent::Create(launch_form()), &mut model);

            let requests = http_requests(&mut cmd);
            assert_eq!(requests.len(), 1);
            let request = &requests[0];
            assert_eq!(request.method, "POST");
            assert_eq!(request.url, "https://relative/events");
            assert!(request
                .headers
                .iter()
                .any(|h| h.name.eq_ignore_ascii_case("content-type")
                    && h.value == "application/json"));

            let body: serde_json::Value =
                serde_json::from_slice(&request.body).expect("json body");
            assert_eq!(
                body,
                serde_json::json!({
                    "name": "Launch",
                    "description": "Kickoff",
                    "date": "2025-01-15T00:00:00.000Z",
                    "location": "HQ",
                })
            );
        }

        #[test]
        fn create_success_reloads_events() {
            let mut model = Model::default();

            let mut cmd = handle(PartyEvent::CreateResponse(Ok(())), &mut model);

            let events: Vec<Event> = cmd.events().collect();
            assert_eq!(events, vec![Event::Party(PartyEvent::List)]);
        }

        #[test]
        fn create_failure_does_not_reload() {
            let mut model = Model::default();

            let mut cmd = handle(
                PartyEvent::CreateResponse(Err("Create event failed: HTTP 400".to_string())),
                &mut model,
            );

            assert!(cmd.events().next().is_none());
        }

        #[test]
        fn invalid_date_sends_nothing() {
            let mut model = Model::default();
            let form = NewPartyForm {
                date: String::new(),
                ..launch_form()
            };

            let mut cmd = handle(PartyEvent::Create(form), &mut model);

            assert!(http_requests(&mut cmd).is_empty());
            assert_eq!(model, Model::default());
        }
    }

    mod removal {
        use super::*;

        #[test]
        fn remove_sends_delete() {
            let mut model = Model::default();

            let mut cmd = handle(PartyEvent::Remove { id: 5 }, &mut model);

            let requests = http_requests(&mut cmd);
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0].method, "DELETE");
            assert_eq!(requests[0].url, "https://relative/events/5");
        }

        #[test]
        fn no_content_clears_selection_and_reloads() {
            let mut model = Model {
                events: vec![party(5, "Gala")],
                selected_event: Some(party(5, "Gala")),
                ..Default::default()
            };

            let mut cmd = handle(PartyEvent::RemoveResponse(Ok(204)), &mut model);

            assert_eq!(model.selected_event, None);
            let events: Vec<Event> = cmd.events().collect();
            assert_eq!(events, vec![Event::Party(PartyEvent::List)]);
        }

        #[test]
        fn other_status_leaves_state_untouched() {
            for status in [200, 404, 500] {
                let mut model = Model {
                    events: vec![party(5, "Gala")],
                    selected_event: Some(party(5, "Gala")),
                    ..Default::default()
                };
                let before = model.clone();

                let mut cmd = handle(PartyEvent::RemoveResponse(Ok(status)), &mut model);

                assert_eq!(model, before);
                assert!(cmd.events().next().is_none());
            }
        }

        #[test]
        fn transport_error_leaves_state_untouched() {
            let mut model = Model {
                selected_event: Some(party(5, "Gala")),
                ..Default::default()
            };

            let _ = handle(
                PartyEvent::RemoveResponse(Err("Delete event failed: offline".to_string())),
                &mut model,
            );

            assert_eq!(model.selected_event, Some(party(5, "Gala")));
        }
    }
}
