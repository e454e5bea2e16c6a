use novacore_api_types::cms::{
    CreatePageTemplateRequest, PageTemplate, UpdatePageTemplateRequest,
};

use super::{FormError, optional, required};
use crate::locale::Messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateForm {
    pub name: String,
    pub description: String,
    pub content: String,
    pub is_active: bool,
}

impl Default for TemplateForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            content: String::new(),
            is_active: true,
        }
    }
}

impl TemplateForm {
    pub fn from_template(template: &PageTemplate) -> Self {
        Self {
            name: template.name.clone(),
            description: template.description.clone().unwrap_or_default(),
            content: template.content.clone(),
            is_active: template.is_active,
        }
    }

    fn validate(&self, msgs: &Messages) -> Result<(String, String), FormError> {
        let name = required(&self.name, "name", msgs.template_name_required)?;
        required(&self.content, "content", msgs.template_content_required)?;
        Ok((name, self.content.clone()))
    }

    pub fn to_create(&self, msgs: &Messages) -> Result<CreatePageTemplateRequest, FormError> {
        let (name, content) = self.validate(msgs)?;
        Ok(CreatePageTemplateRequest {
            name,
            description: optional(&self.description),
            content,
        })
    }

    /// Description is always sent on update so it can be cleared.
    pub fn to_update(&self, msgs: &Messages) -> Result<UpdatePageTemplateRequest, FormError> {
        let (name, content) = self.validate(msgs)?;
        Ok(UpdatePageTemplateRequest {
            name: Some(name),
            description: Some(self.description.trim().to_string()),
            content: Some(content),
            is_active: Some(self.is_active),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn name_then_content_are_required() {
        let msgs = Locale::En.messages();
        let mut form = TemplateForm::default();
        assert_eq!(form.to_create(msgs).expect_err("no name").field(), "name");

        form.name = "Landing".to_string();
        assert_eq!(form.to_create(msgs).expect_err("no content").field(), "content");

        form.content = "<main>{{content}}</main>".to_string();
        let req = form.to_create(msgs).expect("valid");
        assert_eq!(req.content, "<main>{{content}}</main>");
    }

    #[test]
    fn update_carries_stored_state() {
        let template = PageTemplate {
            id: 3,
            name: "Landing".to_string(),
            description: Some("Hero and footer".to_string()),
            content: "<main/>".to_string(),
            is_active: false,
        };
        let req = TemplateForm::from_template(&template)
            .to_update(Locale::En.messages())
            .expect("valid");
        assert_eq!(req.description.as_deref(), Some("Hero and footer"));
        assert_eq!(req.is_active, Some(false));
    }
}
