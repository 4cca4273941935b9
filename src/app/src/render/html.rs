use maud::{Markup, PreEscaped, Render};

use crate::view::{Action, Element, Node};

use super::Renderer;

/// Elements without closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Where interactions go when rendered as plain HTML
///
/// Select actions are rendered as links (GET), create and remove actions as
/// form posts.
pub trait ActionRoutes {
    fn route(&self, action: &Action) -> String;
}

/// Renders a view tree into HTML markup.
///
/// Interactions become plain links and forms:
/// - `a` gets its `href` replaced by the action's route
/// - `form` gets `method="post"` and the route as `action`
/// - `button` is wrapped in its own posting form
///
/// Text and attribute values go through maud's escaping; tag and attribute
/// names come from the view functions and are written as-is.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer<R> {
    routes: R,
}

impl<R: ActionRoutes> HtmlRenderer<R> {
    pub fn new(routes: R) -> Self {
        Self { routes }
    }

    fn write_node(&self, out: &mut String, node: &Node) {
        match node {
            Node::Text(text) => text.render_to(out),
            Node::Element(element) => self.write_element(out, element),
        }
    }

    fn write_element(&self, out: &mut String, element: &Element) {
        let route = element.action.as_ref().map(|action| self.routes.route(action));

        if let (Some(route), "button") = (&route, element.tag.as_str()) {
            out.push_str(r#"<form method="post" action=""#);
            route.render_to(out);
            out.push_str(r#"">"#);
            self.write_plain_element(out, element, &[]);
            out.push_str("</form>");
            return;
        }

        let overrides: Vec<(&str, &str)> = match (&route, element.tag.as_str()) {
            (Some(route), "a") => vec![("href", route.as_str())],
            (Some(route), "form") => vec![("method", "post"), ("action", route.as_str())],
            (Some(route), _) => vec![("data-href", route.as_str())],
            (None, _) => Vec::new(),
        };

        self.write_plain_element(out, element, &overrides);
    }

    fn write_plain_element(&self, out: &mut String, element: &Element, overrides: &[(&str, &str)]) {
        out.push('<');
        out.push_str(&element.tag);

        let kept = element
            .attributes
            .iter()
            .filter(|attribute| !overrides.iter().any(|(name, _)| *name == attribute.name))
            .map(|attribute| (attribute.name.as_str(), attribute.value.as_str()));

        for (name, value) in kept.chain(overrides.iter().copied()) {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                value.render_to(out);
                out.push('"');
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&element.tag.as_str()) {
            return;
        }

        for child in &element.children {
            self.write_node(out, child);
        }

        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }
}

impl<R: ActionRoutes> Renderer for HtmlRenderer<R> {
    type Output = Markup;

    fn render(&self, node: &Node) -> Markup {
        let mut out = String::new();
        self.write_node(&mut out, node);
        PreEscaped(out)
    }
}
