//! Local form state and validation. A form that fails validation never
//! produces a request record, so nothing reaches the server.

pub mod menu;
pub mod menu_item;
pub mod page;
pub mod settings;
pub mod template;

use thiserror::Error;

pub use menu::MenuForm;
pub use menu_item::MenuItemForm;
pub use page::PageForm;
pub use settings::{SettingsEditor, Widget};
pub use template::TemplateForm;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{message}")]
    Required {
        field: &'static str,
        message: &'static str,
    },
}

impl FormError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field, .. } => field,
        }
    }
}

/// Trimmed value of a required field.
fn required(value: &str, field: &'static str, message: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Required { field, message });
    }
    Ok(value.to_string())
}

/// Trimmed value of an optional field; blank counts as absent.
fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
