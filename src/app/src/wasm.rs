//! WebAssembly FFI bindings for the Crux Core
//!
//! This module provides the interface between JavaScript and the Crux Core.
//! It exposes functions for processing events and retrieving the view model.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Initialize the WASM module and set up logging
///
/// This runs automatically when the WASM module is loaded. Gateway failures
/// end up in the browser's developer console through this logger.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("logger already initialized");
    }
}

/// Process an event from JavaScript
///
/// Takes a bincode-serialized Event and returns bincode-serialized Effects.
/// A malformed event is logged and yields no effects.
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.update(event_bytes, &mut effects) {
        log::error!("failed to process event: {e}");
        effects.clear();
    }
    effects
}

/// Get the current view model
///
/// Returns the bincode-serialized view tree; the JavaScript shell replaces the
/// content of `#app` with it on every render effect.
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = CORE.view(&mut view) {
        log::error!("failed to serialize view: {e}");
        view.clear();
    }
    view
}

/// Handle a response to an effect
///
/// Takes an effect ID and bincode-serialized response data, e.g. the outcome
/// of an HTTP request. Returns bincode-serialized Effects that should be processed.
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    ) {
        log::error!("failed to resolve effect {id}: {e}");
        effects.clear();
    }
    effects
}
