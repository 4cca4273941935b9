use serde::{Deserialize, Serialize};

use crate::types::*;

/// Progress of the startup sequence
///
/// Startup loads events, guests and RSVPs strictly one after the other.
/// The stage names the load currently in flight.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BootstrapStage {
    #[default]
    Idle,
    LoadingEvents,
    LoadingGuests,
    LoadingRsvps,
}

impl BootstrapStage {
    /// The stage that follows once the current load has completed
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::LoadingEvents => Self::LoadingGuests,
            Self::LoadingGuests => Self::LoadingRsvps,
            Self::LoadingRsvps => Self::Idle,
        }
    }
}

/// Application Model - the complete state
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// All events, in the order the server returned them
    pub events: Vec<Party>,
    pub selected_event: Option<Party>,
    pub guests: Vec<Guest>,
    pub rsvps: Vec<Rsvp>,

    pub bootstrap: BootstrapStage,
}

impl Model {
    /// Whether `party` is the currently selected event (matched by id)
    pub fn is_selected(&self, party: &Party) -> bool {
        self.selected_event
            .as_ref()
            .is_some_and(|selected| selected.id == party.id)
    }

    /// Guests holding an RSVP for `party`, in stored guest order
    pub fn event_guests(&self, party: &Party) -> Vec<&Guest> {
        self.guests
            .iter()
            .filter(|guest| self.rsvps.iter().any(|rsvp| rsvp.links(guest.id, party.id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(id: u32) -> Party {
        Party {
            id,
            name: format!("Party {id}"),
            ..Default::default()
        }
    }

    fn guest(id: u32, name: &str) -> Guest {
        Guest {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn rsvp(guest_id: u32, event_id: u32) -> Rsvp {
        Rsvp {
            id: None,
            guest_id,
            event_id,
        }
    }

    fn fixture() -> Model {
        Model {
            events: vec![party(1), party(2)],
            guests: vec![guest(10, "A"), guest(20, "B"), guest(30, "C")],
            // listed out of guest order on purpose
            rsvps: vec![rsvp(20, 2), rsvp(20, 1), rsvp(10, 1)],
            ..Default::default()
        }
    }

    fn names(guests: Vec<&Guest>) -> Vec<&str> {
        guests.into_iter().map(|g| g.name.as_str()).collect()
    }

    #[test]
    fn event_guests_joins_rsvps() {
        let model = fixture();

        assert_eq!(names(model.event_guests(&party(1))), vec!["A", "B"]);
        assert_eq!(names(model.event_guests(&party(2))), vec!["B"]);
    }

    #[test]
    fn event_guests_empty_without_rsvps() {
        let model = fixture();

        assert!(model.event_guests(&party(3)).is_empty());
    }

    #[test]
    fn selection_matches_by_id() {
        let mut model = fixture();
        let mut stale_copy = party(2);
        stale_copy.name = "renamed".to_string();
        model.selected_event = Some(stale_copy);

        assert!(model.is_selected(&party(2)));
        assert!(!model.is_selected(&party(1)));
    }

    #[test]
    fn bootstrap_stages_advance_in_order() {
        assert_eq!(
            BootstrapStage::LoadingEvents.next(),
            BootstrapStage::LoadingGuests
        );
        assert_eq!(BootstrapStage::LoadingGuests.next(), BootstrapStage::LoadingRsvps);
        assert_eq!(BootstrapStage::LoadingRsvps.next(), BootstrapStage::Idle);
        assert_eq!(BootstrapStage::Idle.next(), BootstrapStage::Idle);
    }
}
