//! Renderers materialize a [`Node`] tree for a particular surface.

mod html;

pub use html::{ActionRoutes, HtmlRenderer};

use crate::view::Node;

/// Turns a view tree into a concrete output for some UI surface
pub trait Renderer {
    type Output;

    fn render(&self, node: &Node) -> Self::Output;
}
