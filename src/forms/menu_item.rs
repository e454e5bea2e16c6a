use novacore_api_types::dashboard::{
    CreateMenuItemRequest, DashboardMenuItem, UpdateMenuItemRequest,
};

use super::{FormError, optional, required};
use crate::locale::Messages;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemForm {
    pub label: String,
    pub url: String,
    pub icon: String,
    pub order: i32,
    pub parent_id: Option<i64>,
}

impl MenuItemForm {
    pub fn from_item(item: &DashboardMenuItem) -> Self {
        Self {
            label: item.label.clone(),
            url: item.url.clone(),
            icon: item.icon.clone().unwrap_or_default(),
            order: item.order,
            parent_id: item.parent_id,
        }
    }

    fn validate(&self, msgs: &Messages) -> Result<(String, String), FormError> {
        let label = required(&self.label, "label", msgs.item_label_required)?;
        let url = required(&self.url, "url", msgs.item_url_required)?;
        Ok((label, url))
    }

    pub fn to_create(&self, msgs: &Messages) -> Result<CreateMenuItemRequest, FormError> {
        let (label, url) = self.validate(msgs)?;
        Ok(CreateMenuItemRequest {
            label,
            url,
            icon: optional(&self.icon),
            order: self.order,
            parent_id: self.parent_id,
        })
    }

    /// Icon and parent are always sent so they can be cleared.
    pub fn to_update(&self, msgs: &Messages) -> Result<UpdateMenuItemRequest, FormError> {
        let (label, url) = self.validate(msgs)?;
        Ok(UpdateMenuItemRequest {
            label: Some(label),
            url: Some(url),
            icon: Some(self.icon.trim().to_string()),
            order: Some(self.order),
            parent_id: Some(self.parent_id),
        })
    }
}

/// Candidate parents: every item of the menu, depth-first, except the one being edited.
pub fn parent_options(items: &[DashboardMenuItem], editing: Option<i64>) -> Vec<(i64, String)> {
    fn walk(items: &[DashboardMenuItem], editing: Option<i64>, out: &mut Vec<(i64, String)>) {
        for item in items {
            if Some(item.id) == editing {
                continue;
            }
            out.push((item.id, item.label.clone()));
            if let Some(children) = item.children.as_deref() {
                walk(children, editing, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(items, editing, &mut out);
    out
}
