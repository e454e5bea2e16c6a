use novacore_api_types::cms::{CreatePageRequest, Page, UpdatePageRequest};

use super::{FormError, optional, required};
use crate::locale::Messages;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageForm {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub template_id: Option<i64>,
}

impl PageForm {
    pub fn from_page(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            slug: page.slug.clone(),
            content: page.content.clone(),
            template_id: page.template_id,
        }
    }

    /// Slug to submit: the typed one, else derived from the title.
    pub fn effective_slug(&self) -> String {
        optional(&self.slug).unwrap_or_else(|| slug::slugify(self.title.trim()))
    }

    pub fn to_create(&self, msgs: &Messages) -> Result<CreatePageRequest, FormError> {
        let title = required(&self.title, "title", msgs.page_title_required)?;
        Ok(CreatePageRequest {
            slug: self.effective_slug(),
            title,
            content: self.content.clone(),
            template_id: self.template_id,
        })
    }

    pub fn to_update(&self, msgs: &Messages) -> Result<UpdatePageRequest, FormError> {
        let title = required(&self.title, "title", msgs.page_title_required)?;
        Ok(UpdatePageRequest {
            slug: Some(self.effective_slug()),
            title: Some(title),
            content: Some(self.content.clone()),
            template_id: self.template_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn slug_defaults_to_slugified_title() {
        let form = PageForm {
            title: "About Our Team".to_string(),
            ..Default::default()
        };
        let req = form.to_create(Locale::En.messages()).expect("valid");
        assert_eq!(req.slug, "about-our-team");
    }

    #[test]
    fn explicit_slug_wins() {
        let form = PageForm {
            title: "About".to_string(),
            slug: " company ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.effective_slug(), "company");
    }

    #[test]
    fn title_is_required() {
        let err = PageForm::default()
            .to_update(Locale::Fa.messages())
            .expect_err("blank title");
        assert_eq!(err.field(), "title");
        assert_eq!(err.to_string(), Locale::Fa.messages().page_title_required);
    }
}
