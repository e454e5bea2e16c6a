use novacore_api_types::cms::CmsMenu;

use super::tree::flatten;
use super::{Outcome, ViewState};
use crate::api::CmsApi;
use crate::client::ApiError;
use crate::forms::MenuForm;
use crate::locale::Messages;
use crate::presentation::views::{BannerView, EmptyStateView, ListTemplate, ListView};
use crate::presentation::{TemplateRenderError, render_template};

/// Site (CMS) menus with the selected menu's item tree.
#[derive(Debug)]
pub struct CmsMenusView {
    api: CmsApi,
    msgs: &'static Messages,
    pub state: ViewState,
    is_active: Option<bool>,
    menus: Option<Vec<CmsMenu>>,
    selected: Option<CmsMenu>,
}

impl CmsMenusView {
    pub fn new(api: CmsApi, msgs: &'static Messages) -> Self {
        Self {
            api,
            msgs,
            state: ViewState::default(),
            is_active: None,
            menus: None,
            selected: None,
        }
    }

    pub fn menus(&self) -> Option<&[CmsMenu]> {
        self.menus.as_deref()
    }

    pub fn selected(&self) -> Option<&CmsMenu> {
        self.selected.as_ref()
    }

    pub fn set_active_filter(&mut self, is_active: Option<bool>) {
        self.is_active = is_active;
    }

    pub async fn load(&mut self) {
        self.state.begin();
        match self.api.menus(self.is_active).await {
            Ok(menus) => {
                self.menus = Some(menus);
                self.state.ready();
            }
            Err(err) => self.state.fail(&err, self.msgs.cms_menus_load_failed, self.msgs),
        }
    }

    pub async fn select(&mut self, id: i64) {
        let result = self.api.menu(id).await;
        self.show(result);
    }

    pub async fn select_by_name(&mut self, name: &str) {
        let result = self.api.menu_by_name(name).await;
        self.show(result);
    }

    fn show(&mut self, result: Result<CmsMenu, ApiError>) {
        match result {
            Ok(menu) => self.selected = Some(menu),
            Err(err) => self.state.reject(&err, self.msgs.cms_menus_load_failed, self.msgs),
        }
    }

    pub async fn create(&mut self, form: &MenuForm) -> Outcome {
        let req = match form.to_cms(self.msgs) {
            Ok(req) => req,
            Err(err) => return Outcome::Invalid(err),
        };
        let result = self.api.create_menu(&req).await.map(|_| ());
        self.settle(result, self.msgs.cms_menu_save_failed).await
    }

    pub async fn update(&mut self, id: i64, form: &MenuForm) -> Outcome {
        let req = match form.to_cms(self.msgs) {
            Ok(req) => req,
            Err(err) => return Outcome::Invalid(err),
        };
        let result = self.api.update_menu(id, &req).await;
        let outcome = self.settle(result, self.msgs.cms_menu_save_failed).await;
        if outcome.is_applied() && self.selected.as_ref().is_some_and(|menu| menu.id == id) {
            self.select(id).await;
        }
        outcome
    }

    pub async fn delete(&mut self, id: i64) -> Outcome {
        let result = self.api.delete_menu(id).await;
        if result.is_ok() && self.selected.as_ref().is_some_and(|menu| menu.id == id) {
            self.selected = None;
        }
        self.settle(result, self.msgs.cms_menu_delete_failed).await
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
        let mut list = ListView::new(m.cms_menus_title);
        list.banner = self.state.banner.as_ref().map(BannerView::from);
        if self.state.is_loading() {
            list.loading = Some(m.loading.to_string());
        }
        match self.menus.as_deref() {
            Some([]) => {
                list.empty = Some(EmptyStateView {
                    message: m.cms_menus_empty.to_string(),
                    hint: None,
                });
            }
            Some(menus) => {
                list.rows = menus
                    .iter()
                    .map(|menu| {
                        format!(
                            "#{} {} [{}] {}: {}",
                            menu.id,
                            menu.name,
                            m.activity(menu.is_active),
                            m.items_count,
                            menu.menu_structure.len()
                        )
                    })
                    .collect();
            }
            None => {}
        }

        let mut sections = vec![list];
        if let Some(menu) = &self.selected {
            let mut detail = ListView::new(format!("{}: {}", m.menu_items_heading, menu.name));
            detail.subtitle = menu.description.clone().filter(|d| !d.is_empty());
            let rows = flatten(&menu.menu_structure);
            if rows.is_empty() {
                detail.empty = Some(EmptyStateView {
                    message: m.menu_items_empty.to_string(),
                    hint: None,
                });
            } else {
                detail.rows = rows
                    .iter()
                    .map(|row| {
                        let indent = "  ".repeat(row.depth);
                        format!("{indent}#{} {} -> {}", row.item.id, row.item.label, row.item.url)
                    })
                    .collect();
            }
            sections.push(detail);
        }
        render_template(&ListTemplate { sections }, "views::cms_menus::render")
    }
}
