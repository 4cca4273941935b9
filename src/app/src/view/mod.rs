//! Declarative view layer
//!
//! View functions read the [`Model`] and describe the visible tree as
//! [`Node`]s. Turning the tree into something visible is the job of a
//! renderer (see [`crate::render`]).

mod components;
mod node;

use serde::{Deserialize, Serialize};

use crate::model::Model;

pub use components::{
    app, event_details, event_list, event_list_item, guest_list, new_event_form,
    NO_SELECTION_PROMPT,
};
pub use node::{Action, Attribute, Element, Node};

/// What the shell gets to display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub app: Node,
}

impl ViewModel {
    pub fn new(model: &Model) -> Self {
        Self { app: app(model) }
    }
}
