//! Text rendering for console frames.

pub mod views;

use askama::{Error as AskamaError, Template};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message} ({source})")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

pub fn render_template<T: Template>(
    template: &T,
    source: &'static str,
) -> Result<String, TemplateRenderError> {
    template
        .render()
        .map_err(|err| TemplateRenderError::new(source, "Template rendering failed", err))
}
