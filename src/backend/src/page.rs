use maud::{DOCTYPE, Markup, html};
use party_planner_core::{render::ActionRoutes, view::Action};

/// Shell routes the rendered links and forms point at
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellRoutes;

impl ActionRoutes for ShellRoutes {
    fn route(&self, action: &Action) -> String {
        match action {
            Action::SelectEvent { id } => format!("/events/{id}/select"),
            Action::CreateEvent => "/events".to_string(),
            Action::RemoveEvent { id } => format!("/events/{id}/remove"),
        }
    }
}

/// Wrap the rendered application tree into a full document
pub fn document(app: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Party Planner" }
                link rel="stylesheet" href="/static/style.css";
            }
            body { (app) }
        }
    }
}
