use crux_core::{render::render, Command};
use log::debug;

use crate::events::{Event, GuestEvent, PartyEvent};
use crate::model::{BootstrapStage, Model};
use crate::Effect;

/// Begin the startup sequence by loading the events
pub fn start_bootstrap(model: &mut Model) -> Command<Effect, Event> {
    debug!("bootstrap: loading events");
    model.bootstrap = BootstrapStage::LoadingEvents;
    Command::event(Event::Party(PartyEvent::List))
}

/// Move the startup sequence on after the load for `completed` finished,
/// successfully or not.
///
/// Does nothing unless `completed` is the stage currently in flight, so
/// reloads triggered outside of startup never advance the sequence.
pub fn advance_bootstrap(model: &mut Model, completed: BootstrapStage) -> Command<Effect, Event> {
    if model.bootstrap != completed || completed == BootstrapStage::Idle {
        return Command::done();
    }

    model.bootstrap = completed.next();
    debug!("bootstrap: {completed:?} done, now {:?}", model.bootstrap);

    match model.bootstrap {
        BootstrapStage::LoadingGuests => Command::event(Event::Guest(GuestEvent::ListGuests)),
        BootstrapStage::LoadingRsvps => Command::event(Event::Guest(GuestEvent::ListRsvps)),
        BootstrapStage::Idle | BootstrapStage::LoadingEvents => render(),
    }
}
