use crux_core::{render::render, Command};

use crate::events::{Event, GuestEvent};
use crate::http_helpers::{GUESTS_PATH, RSVPS_PATH};
use crate::model::{BootstrapStage, Model};
use crate::types::{Guest, Rsvp};
use crate::{api_get, handle_response, Effect};

use super::advance_bootstrap;

/// Handle guest and RSVP loading
pub fn handle(event: GuestEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        GuestEvent::ListGuests => {
            api_get!(Guest, GuestEvent, GUESTS_PATH, GuestsResponse, "List guests", Vec<Guest>)
        }

        GuestEvent::GuestsResponse(result) => {
            let applied = handle_response!(model, result, {
                on_success: |model, guests| {
                    model.guests = guests;
                    render()
                },
            });
            Command::all([applied, advance_bootstrap(model, BootstrapStage::LoadingGuests)])
        }

        GuestEvent::ListRsvps => {
            api_get!(Guest, GuestEvent, RSVPS_PATH, RsvpsResponse, "List RSVPs", Vec<Rsvp>)
        }

        GuestEvent::RsvpsResponse(result) => {
            let applied = handle_response!(model, result, {
                on_success: |model, rsvps| {
                    model.rsvps = rsvps;
                    render()
                },
            });
            Command::all([applied, advance_bootstrap(model, BootstrapStage::LoadingRsvps)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(id: u32, name: &str) -> Guest {
        Guest {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn list_guests_and_rsvps_use_lowercase_paths() {
        let mut model = Model::default();

        for (event, url) in [
            (GuestEvent::ListGuests, "https://relative/guests"),
            (GuestEvent::ListRsvps, "https://relative/rsvps"),
        ] {
            let mut cmd = handle(event, &mut model);
            match cmd.effects().next() {
                Some(Effect::Http(request)) => assert_eq!(request.operation.url, url),
                _ => panic!("Expected http effect"),
            };
        }
    }

    #[test]
    fn unchanged_lists_still_render() {
        for event in [
            GuestEvent::GuestsResponse(Ok(vec![])),
            GuestEvent::RsvpsResponse(Ok(vec![])),
        ] {
            let mut model = Model::default();

            let mut cmd = handle(event, &mut model);

            let renders = cmd
                .effects()
                .filter(|effect| matches!(effect, Effect::Render(_)))
                .count();
            assert_eq!(renders, 1);
        }
    }

    #[test]
    fn guests_response_stores_guests() {
        let mut model = Model::default();

        let _ = handle(
            GuestEvent::GuestsResponse(Ok(vec![guest(1, "Ada"), guest(2, "Grace")])),
            &mut model,
        );

        assert_eq!(model.guests, vec![guest(1, "Ada"), guest(2, "Grace")]);
    }

    #[test]
    fn rsvps_failure_keeps_previous_rsvps() {
        let previous = vec![Rsvp {
            id: Some(1),
            guest_id: 1,
            event_id: 1,
        }];
        let mut model = Model {
            rsvps: previous.clone(),
            ..Default::default()
        };

        let _ = handle(
            GuestEvent::RsvpsResponse(Err("List RSVPs failed: offline".to_string())),
            &mut model,
        );

        assert_eq!(model.rsvps, previous);
    }

    #[test]
    fn guests_response_during_bootstrap_requests_rsvps() {
        let mut model = Model {
            bootstrap: BootstrapStage::LoadingGuests,
            ..Default::default()
        };

        let mut cmd = handle(GuestEvent::GuestsResponse(Ok(vec![])), &mut model);

        assert_eq!(model.bootstrap, BootstrapStage::LoadingRsvps);
        let events: Vec<Event> = cmd.events().collect();
        assert_eq!(events, vec![Event::Guest(GuestEvent::ListRsvps)]);
    }
}
