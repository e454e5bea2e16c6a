//! Dashboard menus: filtered list, local search, selected menu detail and
//! item management.

use std::fmt;
use std::str::FromStr;

use novacore_api_types::dashboard::{DashboardMenu, DashboardMenuDetail};
use tracing::debug;

use super::tree::flatten;
use super::{Outcome, ViewState};
use crate::api::DashboardApi;
use crate::client::ApiError;
use crate::forms::{MenuForm, MenuItemForm};
use crate::locale::Messages;
use crate::presentation::views::{BannerView, EmptyStateView, ListTemplate, ListView};
use crate::presentation::{TemplateRenderError, render_template};

/// Server-side activity filter, sent as `isActive`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActiveFilter {
    pub fn as_query(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Active => Some(true),
            Self::Inactive => Some(false),
        }
    }
}

impl FromStr for ActiveFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown filter `{other}` (expected all, active or inactive)")),
        }
    }
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        })
    }
}

#[derive(Debug)]
pub struct MenusView {
    api: DashboardApi,
    msgs: &'static Messages,
    pub state: ViewState,
    filter: ActiveFilter,
    search: String,
    menus: Option<Vec<DashboardMenu>>,
    selected: Option<DashboardMenuDetail>,
}

impl MenusView {
    pub fn new(api: DashboardApi, msgs: &'static Messages) -> Self {
        Self {
            api,
            msgs,
            state: ViewState::default(),
            filter: ActiveFilter::All,
            search: String::new(),
            menus: None,
            selected: None,
        }
    }

    pub fn filter(&self) -> ActiveFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ActiveFilter) {
        self.filter = filter;
    }

    /// Local search; never sent to the server.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn selected(&self) -> Option<&DashboardMenuDetail> {
        self.selected.as_ref()
    }

    /// Loaded menus matching the search term on name or description.
    pub fn visible_menus(&self) -> Vec<&DashboardMenu> {
        let term = self.search.trim().to_lowercase();
        self.menus
            .iter()
            .flatten()
            .filter(|menu| {
                term.is_empty()
                    || menu.name.to_lowercase().contains(&term)
                    || menu.description.to_lowercase().contains(&term)
            })
            .collect()
    }

    pub async fn load(&mut self) {
        self.state.begin();
        match self.api.menus(self.filter.as_query()).await {
            Ok(menus) => {
                debug!(count = menus.len(), filter = %self.filter, "menus loaded");
                self.menus = Some(menus);
                self.state.ready();
            }
            Err(err) => self.state.fail(&err, self.msgs.menus_load_failed, self.msgs),
        }
    }

    pub async fn select(&mut self, id: i64) {
        match self.api.menu(id).await {
            Ok(detail) => self.selected = Some(detail),
            Err(err) => self.state.reject(&err, self.msgs.menu_detail_failed, self.msgs),
        }
    }

    pub async fn create_menu(&mut self, form: &MenuForm) -> Outcome {
        let req = match form.to_create(self.msgs) {
            Ok(req) => req,
            Err(err) => return Outcome::Invalid(err),
        };
        let result = self.api.create_menu(&req).await.map(|_| ());
        self.settle_menu(None, result, self.msgs.menu_save_failed).await
    }

    pub async fn update_menu(&mut self, id: i64, form: &MenuForm) -> Outcome {
        let req = match form.to_update(self.msgs) {
            Ok(req) => req,
            Err(err) => return Outcome::Invalid(err),
        };
        let result = self.api.update_menu(id, &req).await;
        self.settle_menu(Some(id), result, self.msgs.menu_save_failed).await
    }

    pub async fn toggle_menu(&mut self, id: i64) -> Outcome {
        let result = self.api.toggle_menu_active(id).await;
        self.settle_menu(Some(id), result, self.msgs.menu_toggle_failed).await
    }

    pub async fn delete_menu(&mut self, id: i64) -> Outcome {
        let result = self.api.delete_menu(id).await;
        if result.is_ok() && self.selected_id() == Some(id) {
            self.selected = None;
        }
        self.settle_menu(None, result, self.msgs.menu_delete_failed).await
    }

    pub async fn add_item(&mut self, menu_id: i64, form: &MenuItemForm) -> Outcome {
        let req = match form.to_create(self.msgs) {
            Ok(req) => req,
            Err(err) => return Outcome::Invalid(err),
        };
        let result = self.api.add_menu_item(menu_id, &req).await.map(|_| ());
        self.settle_item(menu_id, result, self.msgs.item_save_failed).await
    }

    pub async fn update_item(
        &mut self,
        menu_id: i64,
        item_id: i64,
        form: &MenuItemForm,
    ) -> Outcome {
        let req = match form.to_update(self.msgs) {
            Ok(req) => req,
            Err(err) => return Outcome::Invalid(err),
        };
        let result = self.api.update_menu_item(item_id, &req).await;
        self.settle_item(menu_id, result, self.msgs.item_save_failed).await
    }

    pub async fn delete_item(&mut self, menu_id: i64, item_id: i64) -> Outcome {
        let result = self.api.delete_menu_item(item_id).await;
        self.settle_item(menu_id, result, self.msgs.item_delete_failed).await
    }

    pub async fn toggle_item(&mut self, menu_id: i64, item_id: i64) -> Outcome {
        let result = self.api.toggle_item_visibility(item_id).await;
        self.settle_item(menu_id, result, self.msgs.item_toggle_failed).await
    }

    pub async fn reorder_items(&mut self, menu_id: i64, item_ids: Vec<i64>) -> Outcome {
        let result = self.api.reorder_items(menu_id, item_ids).await;
        self.settle_item(menu_id, result, self.msgs.item_reorder_failed).await
    }

    fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(|menu| menu.id)
    }

    /// Re-fetch the list, and the detail too when the changed menu is the selected one.
    async fn settle_menu(
        &mut self,
        changed: Option<i64>,
        result: Result<(), ApiError>,
        fallback: &'static str,
    ) -> Outcome {
        if let Err(err) = result {
            self.state.reject(&err, fallback, self.msgs);
            return Outcome::Failed;
        }
        self.state.dismiss();
        self.load().await;
        if let Some(id) = changed.filter(|id| Some(*id) == self.selected_id()) {
            self.select(id).await;
        }
        Outcome::Applied
    }

    async fn settle_item(
        &mut self,
        menu_id: i64,
        result: Result<(), ApiError>,
        fallback: &'static str,
    ) -> Outcome {
        if let Err(err) = result {
            self.state.reject(&err, fallback, self.msgs);
            return Outcome::Failed;
        }
        self.state.dismiss();
        self.select(menu_id).await;
        Outcome::Applied
    }

    pub fn render(&self) -> Result<String, TemplateRenderError> {
        let m = self.msgs;
        let mut list = ListView::new(m.menus_title);
        list.subtitle = Some(m.menus_subtitle.to_string());
        list.banner = self.state.banner.as_ref().map(BannerView::from);
        list.filters = self.filter_lines();
        if self.state.is_loading() {
            list.loading = Some(m.loading.to_string());
        }

        if self.menus.is_some() {
            let menus = self.visible_menus();
            if menus.is_empty() {
                list.empty = Some(EmptyStateView {
                    message: m.menus_empty.to_string(),
                    hint: Some(m.menus_empty_hint.to_string()),
                });
            } else {
                list.rows = menus
                    .iter()
                    .map(|menu| {
                        let marker = if Some(menu.id) == self.selected_id() { '>' } else { '#' };
                        format!(
                            "{marker}{} {} [{}] {}: {} {}",
                            menu.id,
                            menu.name,
                            m.activity(menu.is_active),
                            m.items_count,
                            menu.items,
                            menu.description
                        )
                        .trim_end()
                        .to_string()
                    })
                    .collect();
            }
        }

        let mut sections = vec![list];
        if let Some(detail) = &self.selected {
            sections.push(self.detail_section(detail));
        }
        render_template(&ListTemplate { sections }, "views::menus::render")
    }

    fn filter_lines(&self) -> Vec<String> {
        let m = self.msgs;
        let filter = match self.filter {
            ActiveFilter::All => m.filter_all,
            ActiveFilter::Active => m.active,
            ActiveFilter::Inactive => m.inactive,
        };
        let mut lines = vec![format!("{}: {filter}", m.status_label)];
        let term = self.search.trim();
        if !term.is_empty() {
            lines.push(format!("{}: {term}", m.search_label));
        }
        lines
    }

    fn detail_section(&self, detail: &DashboardMenuDetail) -> ListView {
        let m = self.msgs;
        let mut section = ListView::new(format!("{}: {}", m.menu_items_heading, detail.name));
        if !detail.description.is_empty() {
            section.subtitle = Some(detail.description.clone());
        }
        let rows = flatten(&detail.items);
        if rows.is_empty() {
            section.empty = Some(EmptyStateView {
                message: m.menu_items_empty.to_string(),
                hint: None,
            });
        } else {
            section.rows = rows
                .iter()
                .map(|row| {
                    let item = row.item;
                    format!(
                        "{}#{} {} -> {} [{}]",
                        "  ".repeat(row.depth),
                        item.id,
                        item.label,
                        item.url,
                        m.visibility(item.is_visible)
                    )
                })
                .collect();
        }
        section
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httpmock::MockServer;
    use serde_json::json;

    use super::*;
    use crate::client::ApiClient;
    use crate::infra::token::MemoryTokenStore;
    use crate::locale::Locale;

    fn view(server: &MockServer) -> MenusView {
        let client = ApiClient::with_base(&server.base_url(), Arc::new(MemoryTokenStore::default()))
            .expect("client");
        MenusView::new(DashboardApi::new(client), Locale::En.messages())
    }

    fn menus_json() -> serde_json::Value {
        json!([
            {"id": 1, "name": "Main", "description": "Top navigation", "isActive": true, "items": 2},
            {"id": 2, "name": "Footer", "description": "Legal links", "isActive": false, "items": 0}
        ])
    }

    fn detail_json(items: serde_json::Value) -> serde_json::Value {
        json!({
            "id": 1,
            "name": "Main",
            "description": "Top navigation",
            "isActive": true,
            "items": items
        })
    }

    #[tokio::test]
    async fn search_is_local_and_case_insensitive() {
        let server = MockServer::start();
        let list = server.mock(|when, then| {
            when.method("GET")
                .path("/api/v1/dashboard/menus")
                .query_param_missing("isActive");
            then.status(200).json_body(menus_json());
        });

        let mut view = view(&server);
        view.load().await;
        view.set_search("LEGAL");

        let names: Vec<&str> = view.visible_menus().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Footer"]);
        list.assert_calls(1);
    }

    #[tokio::test]
    async fn empty_list_shows_empty_state() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/menus");
            then.status(200).json_body(json!([]));
        });

        let mut view = view(&server);
        view.set_filter(ActiveFilter::Active);
        view.load().await;

        let out = view.render().expect("render");
        assert!(out.contains(Locale::En.messages().menus_empty));
    }

    #[tokio::test]
    async fn blank_item_label_sends_nothing() {
        let server = MockServer::start();
        let add = server.mock(|when, then| {
            when.method("POST").path("/api/v1/dashboard/menus/1/items");
            then.status(201);
        });

        let mut view = view(&server);
        let form = MenuItemForm {
            label: "  ".to_string(),
            url: "/docs".to_string(),
            ..Default::default()
        };
        let outcome = view.add_item(1, &form).await;

        match outcome {
            Outcome::Invalid(err) => assert_eq!(err.field(), "label"),
            other => panic!("expected validation failure, got {other:?}"),
        }
        add.assert_calls(0);
    }

    #[tokio::test]
    async fn item_delete_refetches_the_menu() {
        let server = MockServer::start();
        let mut before = server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/menus/1");
            then.status(200).json_body(detail_json(json!([
                {"id": 10, "menuId": 1, "label": "Home", "url": "/", "order": 0, "isVisible": true},
                {"id": 11, "menuId": 1, "label": "Blog", "url": "/blog", "order": 1, "isVisible": false}
            ])));
        });
        let delete = server.mock(|when, then| {
            when.method("DELETE").path("/api/v1/dashboard/menus/items/11");
            then.status(204);
        });

        let mut view = view(&server);
        view.select(1).await;
        before.assert_calls(1);
        before.delete();

        let after = server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/menus/1");
            then.status(200).json_body(detail_json(json!([
                {"id": 10, "menuId": 1, "label": "Home", "url": "/", "order": 0, "isVisible": true}
            ])));
        });

        assert!(view.delete_item(1, 11).await.is_applied());
        delete.assert();
        after.assert();

        let ids: Vec<i64> = view
            .selected()
            .map(|menu| menu.items.iter().map(|item| item.id).collect())
            .unwrap_or_default();
        assert_eq!(ids, vec![10]);
        let out = view.render().expect("render");
        assert!(!out.contains("Blog"));
    }

    #[tokio::test]
    async fn deleting_selected_menu_clears_selection() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/menus/1");
            then.status(200).json_body(detail_json(json!([])));
        });
        server.mock(|when, then| {
            when.method("DELETE").path("/api/v1/dashboard/menus/1");
            then.status(204);
        });
        let list = server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/menus");
            then.status(200).json_body(json!([]));
        });

        let mut view = view(&server);
        view.select(1).await;
        assert!(view.selected().is_some());

        assert!(view.delete_menu(1).await.is_applied());
        assert!(view.selected().is_none());
        list.assert_calls(1);
    }

    #[test]
    fn filter_parses_cli_values() {
        assert_eq!("Active".parse::<ActiveFilter>(), Ok(ActiveFilter::Active));
        assert_eq!(ActiveFilter::Inactive.as_query(), Some(false));
        assert!("sometimes".parse::<ActiveFilter>().is_err());
    }
}
