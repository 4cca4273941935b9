use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Initialization
    Initialize,

    // Domain events
    Party(PartyEvent),
    Guest(GuestEvent),
}

/// Event list, selection, creation and removal
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum PartyEvent {
    List,
    Select { id: u32 },
    Create(NewPartyForm),
    Remove { id: u32 },

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    ListResponse(Result<Vec<Party>, String>),
    #[serde(skip)]
    SelectResponse(Result<Party, String>),
    #[serde(skip)]
    CreateResponse(Result<(), String>),
    /// Carries the raw status code; only 204 counts as deleted
    #[serde(skip)]
    RemoveResponse(Result<u16, String>),
}

/// Guest and RSVP loading
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GuestEvent {
    ListGuests,
    ListRsvps,

    #[serde(skip)]
    GuestsResponse(Result<Vec<Guest>, String>),
    #[serde(skip)]
    RsvpsResponse(Result<Vec<Rsvp>, String>),
}
