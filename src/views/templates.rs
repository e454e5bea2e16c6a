use novacore_api_types::cms::PageTemplate;

use super::{Outcome, ViewState};
use crate::api::CmsApi;
use crate::client::ApiError;
use crate::forms::TemplateForm;
use crate::locale::Messages;
use crate::presentation::views::{BannerView, EmptyStateView, ListTemplate, ListView};
use crate::presentation::{TemplateRenderError, render_template};

#[derive(Debug)]
pub struct TemplatesView {
    api: CmsApi,
    msgs: &'static Messages,
    pub state: ViewState,
    templates: Option<Vec<PageTemplate>>,
    selected: Option<PageTemplate>,
}

impl TemplatesView {
    pub fn new(api: CmsApi, msgs: &'static Messages) -> Self {
        Self {
            api,
            msgs,
            state: ViewState::default(),
            templates: None,
            selected: None,
        }
    }

    pub fn templates(&self) -> Option<&[PageTemplate]> {
        self.templates.as_deref()
    }

    pub fn selected(&self) -> Option<&PageTemplate> {
        self.selected.as_ref()
    }

    pub async fn load(&mut self) {
        self.state.begin();
        match self.api.templates().await {
            Ok(templates) => {
                self.templates = Some(templates);
                self.state.ready();
            }
            Err(err) => self.state.fail(&err, self.msgs.templates_load_failed, self.msgs),
        }
    }

    pub async fn select(&mut self, id: i64) {
        match self.api.template(id).await {
            Ok(template) => self.selected = Some(template),
            Err(err) => self.state.reject(&err, self.msgs.templates_load_failed, self.msgs),
        }
    }

    pub async fn create(&mut self, form: &TemplateForm) -> Outcome {
        let req = match form.to_create(self.msgs) {
            Ok(req) => req,
            Err(err) => return Outcome::Invalid(err),
        };
        let result = self.api.create_template(&req).await.map(|_| ());
        self.settle(result, self.msgs.template_save_failed).await
    }

    pub async fn update(&mut self, id: i64, form: &TemplateForm) -> Outcome {
        let req = match form.to_update(self.msgs) {
            Ok(req) => req,
            Err(err) => return Outcome::Invalid(err),
        };
        let result = self.api.update_template(id, &req).await;
        let outcome = self.settle(result, self.msgs.template_save_failed).await;
        if outcome.is_applied() && self.selected.as_ref().is_some_and(|t| t.id == id) {
            self.select(id).await;
        }
        outcome
    }

    pub async fn delete(&mut self, id: i64) -> Outcome {
        let result = self.api.delete_template(id).await;
        if result.is_ok() && self.selected.as_ref().is_some_and(|t| t.id == id) {
            self.selected = None;
        }
        self.settle(result, self.msgs.template_delete_failed).await
    }

    async fn settle(&mut self, result: Result<(), ApiError>, fallback: &'static str) -> Outcome {
        match result {
            Ok(()) => {
                self.state.dismiss();
                self.load().await;
                Outcome::Applied
            }
            Err(err) => {
                self.state.reject(&err, fallback, self.msgs);
                Outcome::Failed
            }
        }
    }

    pub fn render(&self) -> Result<String, TemplateRenderError> {
        let m = self.msgs;
        let mut list = ListView::new(m.templates_title);
        list.banner = self.state.banner.as_ref().map(BannerView::from);
        if self.state.is_loading() {
            list.loading = Some(m.loading.to_string());
        }
        match self.templates.as_deref() {
            Some([]) => {
                list.empty = Some(EmptyStateView {
                    message: m.templates_empty.to_string(),
                    hint: None,
                });
            }
            Some(templates) => {
                list.rows = templates
                    .iter()
                    .map(|template| {
                        let description = template.description.as_deref().unwrap_or("");
                        format!(
                            "#{} {} [{}] {description}",
                            template.id,
                            template.name,
                            m.activity(template.is_active)
                        )
                        .trim_end()
                        .to_string()
                    })
                    .collect();
            }
            None => {}
        }

        let mut sections = vec![list];
        if let Some(template) = &self.selected {
            let mut detail = ListView::new(format!("#{} {}", template.id, template.name));
            detail.subtitle = template.description.clone();
            detail.rows = template.content.lines().map(str::to_string).collect();
            sections.push(detail);
        }
        render_template(&ListTemplate { sections }, "views::templates::render")
    }
}
