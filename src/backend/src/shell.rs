use crate::{page::ShellRoutes, transport::ApiTransport};
use crux_core::Core;
use log::{debug, error};
use maud::Markup;
use party_planner_core::{
    App, Effect, Event, ViewModel,
    render::{HtmlRenderer, Renderer},
};
use std::collections::VecDeque;

/// Hosts the core and executes its effects
///
/// Events are processed one effect at a time: an HTTP effect is sent, its
/// response resolved into the core, and any follow-up effects queued behind
/// the remaining ones.
pub struct Shell<T> {
    core: Core<App>,
    transport: T,
    renderer: HtmlRenderer<ShellRoutes>,
}

impl<T: ApiTransport> Shell<T> {
    pub fn new(transport: T) -> Self {
        Self {
            core: Core::new(),
            transport,
            renderer: HtmlRenderer::new(ShellRoutes),
        }
    }

    /// Process `event` and run every resulting effect to completion
    pub async fn dispatch(&self, event: Event) {
        debug!("dispatch: {event:?}");
        let effects = self.core.process_event(event);
        self.run(effects).await;
    }

    async fn run(&self, effects: Vec<Effect>) {
        let mut queue = VecDeque::from(effects);

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Render(_) => debug!("render requested"),
                Effect::Http(mut request) => {
                    let result = self.transport.send(request.operation.clone()).await;
                    match self.core.resolve(&mut request, result) {
                        Ok(follow_ups) => queue.extend(follow_ups),
                        Err(e) => error!("failed to resolve http effect: {e}"),
                    }
                }
            }
        }
    }

    pub fn view(&self) -> ViewModel {
        self.core.view()
    }

    /// Current view tree as markup
    pub fn render(&self) -> Markup {
        self.renderer.render(&self.view().app)
    }

    /// Current view tree as an HTML string
    pub fn render_html(&self) -> String {
        self.render().into_string()
    }
}
