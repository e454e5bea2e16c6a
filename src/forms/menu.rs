use novacore_api_types::cms::{CmsMenu, CmsMenuRequest};
use novacore_api_types::dashboard::{CreateMenuRequest, DashboardMenu, UpdateMenuRequest};

use super::{FormError, optional, required};
use crate::locale::Messages;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuForm {
    pub name: String,
    pub description: String,
}

impl MenuForm {
    pub fn from_menu(menu: &DashboardMenu) -> Self {
        Self {
            name: menu.name.clone(),
            description: menu.description.clone(),
        }
    }

    pub fn from_cms_menu(menu: &CmsMenu) -> Self {
        Self {
            name: menu.name.clone(),
            description: menu.description.clone().unwrap_or_default(),
        }
    }

    pub fn to_create(&self, msgs: &Messages) -> Result<CreateMenuRequest, FormError> {
        Ok(CreateMenuRequest {
            name: required(&self.name, "name", msgs.menu_name_required)?,
            description: optional(&self.description),
            menu_structure: None,
        })
    }

    /// Description is always sent on update so it can be cleared.
    pub fn to_update(&self, msgs: &Messages) -> Result<UpdateMenuRequest, FormError> {
        Ok(UpdateMenuRequest {
            name: Some(required(&self.name, "name", msgs.menu_name_required)?),
            description: Some(self.description.trim().to_string()),
            menu_structure: None,
        })
    }

    /// Site menus share the name rule; their item structure is left untouched.
    pub fn to_cms(&self, msgs: &Messages) -> Result<CmsMenuRequest, FormError> {
        Ok(CmsMenuRequest {
            name: Some(required(&self.name, "name", msgs.menu_name_required)?),
            description: optional(&self.description),
            menu_structure: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn blank_name_is_rejected() {
        let form = MenuForm {
            name: "   ".to_string(),
            description: "Top navigation".to_string(),
        };
        let err = form.to_create(Locale::En.messages()).expect_err("blank name");
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn create_omits_blank_description() {
        let form = MenuForm {
            name: " Main ".to_string(),
            description: String::new(),
        };
        let req = form.to_create(Locale::En.messages()).expect("valid");
        assert_eq!(req.name, "Main");
        let body = serde_json::to_value(&req).expect("json");
        assert_eq!(body, serde_json::json!({"name": "Main"}));
    }
}
