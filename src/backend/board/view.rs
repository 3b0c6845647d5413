//! Board page rendering.

use minijinja::{context, Environment};

use crate::shared::MessageView;

const INDEX_TEMPLATE: &str = "index.html";

/// Renders the board page from its embedded template
///
/// The template is named with an `.html` suffix, so minijinja autoescapes
/// every interpolated value.
#[derive(Debug)]
pub struct BoardView {
    env: Environment<'static>,
}

impl BoardView {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../../../templates/index.html"))?;
        Ok(Self { env })
    }

    /// Render all messages with their comments
    pub fn render_index(&self, messages: &[MessageView]) -> Result<String, minijinja::Error> {
        self.env
            .get_template(INDEX_TEMPLATE)?
            .render(context! { messages => messages, error => false })
    }

    /// Render the page with no messages and a notice that loading failed
    pub fn render_unavailable(&self) -> Result<String, minijinja::Error> {
        self.env
            .get_template(INDEX_TEMPLATE)?
            .render(context! { messages => Vec::<MessageView>::new(), error => true })
    }
}
