mod bootstrap;
mod guest;
mod party;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

pub use bootstrap::{advance_bootstrap, start_bootstrap};

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => start_bootstrap(model),
        Event::Party(event) => party::handle(event, model),
        Event::Guest(event) => guest::handle(event, model),
    }
}
