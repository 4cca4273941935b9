pub mod events;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod render;
pub mod types;
pub mod update;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(test)]
mod tests;

use crux_core::Command;

// Re-export core types
pub use crate::{
    events::{Event, GuestEvent, PartyEvent},
    http_helpers::{
        build_url, handle_request_error, map_http_error, process_envelope_response,
        process_status_code, process_status_response, BASE_URL,
    },
    model::{BootstrapStage, Model},
    types::*,
    view::ViewModel,
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        ViewModel::new(model)
    }
}
