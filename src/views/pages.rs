//! CMS page list with filters, status transitions and the selected page's
//! blocks and versions.

use novacore_api_types::PagedResult;
use novacore_api_types::cms::{
    AddPageBlockRequest, Page, PageListQuery, PageStatus, UpdatePageBlockRequest,
};
use tracing::debug;

use super::{Outcome, ViewState, pager_footer};
use crate::api::CmsApi;
use crate::api::cms::PageTransition;
use crate::client::ApiError;
use crate::forms::PageForm;
use crate::locale::Messages;
use crate::presentation::views::{BannerView, EmptyStateView, ListTemplate, ListView};
use crate::presentation::{TemplateRenderError, render_template};

/// Action applied to a single page from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Transition(PageTransition),
    Duplicate,
    Delete,
}

#[derive(Debug)]
pub struct PagesView {
    api: CmsApi,
    msgs: &'static Messages,
    pub state: ViewState,
    query: PageListQuery,
    result: Option<PagedResult<Page>>,
    selected: Option<Page>,
    versions: Option<Vec<serde_json::Value>>,
}

impl PagesView {
    pub fn new(api: CmsApi, msgs: &'static Messages, page_size: u32) -> Self {
        Self {
            api,
            msgs,
            state: ViewState::default(),
            query: PageListQuery {
                page_number: Some(1),
                page_size: Some(page_size),
                ..Default::default()
            },
            result: None,
            selected: None,
            versions: None,
        }
    }

    pub fn query(&self) -> &PageListQuery {
        &self.query
    }

    pub fn result(&self) -> Option<&PagedResult<Page>> {
        self.result.as_ref()
    }

    pub fn selected(&self) -> Option<&Page> {
        self.selected.as_ref()
    }

    pub fn versions(&self) -> Option<&[serde_json::Value]> {
        self.versions.as_deref()
    }

    pub fn set_page(&mut self, page_number: u32) {
        self.query.page_number = Some(page_number.max(1));
    }

    /// Filters apply from the first page.
    pub fn set_filters(
        &mut self,
        status: Option<PageStatus>,
        template_id: Option<i64>,
        created_by_user_id: Option<i64>,
        search_term: Option<String>,
    ) {
        self.query.status = status;
        self.query.template_id = template_id;
        self.query.created_by_user_id = created_by_user_id;
        self.query.search_term = search_term
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty());
        self.query.page_number = Some(1);
    }

    pub async fn load(&mut self) {
        self.state.begin();
        match self.api.pages(&self.query).await {
            Ok(result) => {
                debug!(total = result.total_count, "pages loaded");
                self.result = Some(result);
                self.state.ready();
            }
            Err(err) => self.state.fail(&err, self.msgs.pages_load_failed, self.msgs),
        }
    }

    pub async fn apply(&mut self, id: i64, action: PageAction) -> Outcome {
        let result = match action {
            PageAction::Transition(to) => self.api.transition_page(id, to).await,
            PageAction::Duplicate => self.api.duplicate_page(id).await.map(|_| ()),
            PageAction::Delete => self.api.delete_page(id).await,
        };
        if result.is_ok() && action == PageAction::Delete && self.selected_id() == Some(id) {
            self.selected = None;
            self.versions = None;
        }
        let fallback = self.msgs.page_action_failed;
        self.settle(result, fallback).await
    }

    pub async fn create(&mut self, form: &PageForm) -> Outcome {
        let req = match form.to_create(self.msgs) {
            Ok(req) => req,
            Err(err) => return Outcome::Invalid(err),
        };
        let result = self.api.create_page(&req).await.map(|_| ());
        let fallback = self.msgs.page_save_failed;
        self.settle(result, fallback).await
    }

    pub async fn update(&mut self, id: i64, form: &PageForm) -> Outcome {
        let req = match form.to_update(self.msgs) {
            Ok(req) => req,
            Err(err) => return Outcome::Invalid(err),
        };
        let result = self.api.update_page(id, &req).await;
        let fallback = self.msgs.page_save_failed;
        let outcome = self.settle(result, fallback).await;
        if outcome.is_applied() && self.selected_id() == Some(id) {
            self.select(id).await;
        }
        outcome
    }

    /// Load one page with its blocks and version history.
    pub async fn select(&mut self, id: i64) {
        let loaded = match self.api.page(id).await {
            Ok(page) => self.api.versions(id).await.map(|versions| (page, versions)),
            Err(err) => Err(err),
        };
        match loaded {
            Ok((page, versions)) => {
                self.selected = Some(page);
                self.versions = Some(versions);
            }
            Err(err) => self.state.reject(&err, self.msgs.pages_load_failed, self.msgs),
        }
    }

    pub async fn select_by_slug(&mut self, slug: &str) {
        match self.api.page_by_slug(slug).await {
            Ok(page) => self.select(page.id).await,
            Err(err) => self.state.reject(&err, self.msgs.pages_load_failed, self.msgs),
        }
    }

    pub async fn add_block(&mut self, page_id: i64, req: &AddPageBlockRequest) -> Outcome {
        let result = self.api.add_block(page_id, req).await;
        self.settle_detail(page_id, result).await
    }

    pub async fn update_block(
        &mut self,
        page_id: i64,
        block_id: i64,
        req: &UpdatePageBlockRequest,
    ) -> Outcome {
        let result = self.api.update_block(block_id, req).await;
        self.settle_detail(page_id, result).await
    }

    pub async fn delete_block(&mut self, page_id: i64, block_id: i64) -> Outcome {
        let result = self.api.delete_block(block_id).await;
        self.settle_detail(page_id, result).await
    }

    pub async fn reorder_blocks(&mut self, page_id: i64, block_ids: Vec<i64>) -> Outcome {
        let result = self.api.reorder_blocks(page_id, block_ids).await;
        self.settle_detail(page_id, result).await
    }

    pub async fn create_version(&mut self, page_id: i64) -> Outcome {
        let result = self.api.create_version(page_id).await;
        self.settle_detail(page_id, result).await
    }

    pub async fn restore_version(&mut self, page_id: i64, version_id: i64) -> Outcome {
        let result = self.api.restore_version(page_id, version_id).await;
        self.settle_detail(page_id, result).await
    }

    fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(|page| page.id)
    }

    async fn settle(&mut self, result: Result<(), ApiError>, fallback: &str) -> Outcome {
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

    async fn settle_detail(&mut self, page_id: i64, result: Result<(), ApiError>) -> Outcome {
        match result {
            Ok(()) => {
                self.state.dismiss();
                self.select(page_id).await;
                Outcome::Applied
            }
            Err(err) => {
                self.state.reject(&err, self.msgs.page_save_failed, self.msgs);
                Outcome::Failed
            }
        }
    }

    pub fn render(&self) -> Result<String, TemplateRenderError> {
        let m = self.msgs;
        let mut list = ListView::new(m.pages_title);
        list.subtitle = Some(m.pages_subtitle.to_string());
        list.banner = self.state.banner.as_ref().map(BannerView::from);
        list.filters = self.filter_lines();
        if self.state.is_loading() {
            list.loading = Some(m.loading.to_string());
        }

        if let Some(result) = &self.result {
            if result.is_empty() {
                list.empty = Some(EmptyStateView {
                    message: m.pages_empty.to_string(),
                    hint: Some(m.pages_empty_hint.to_string()),
                });
            } else {
                list.rows = result.items.iter().map(|page| self.page_row(page)).collect();
                list.footer = Some(pager_footer(m, result));
            }
        }

        let mut sections = vec![list];
        if let Some(page) = &self.selected {
            sections.push(self.detail_section(page));
        }
        render_template(&ListTemplate { sections }, "views::pages::render")
    }

    fn filter_lines(&self) -> Vec<String> {
        let m = self.msgs;
        let q = &self.query;
        let mut lines = Vec::new();
        if let Some(status) = q.status {
            lines.push(format!("{}: {}", m.status_label, m.page_status(status)));
        }
        if let Some(template) = q.template_id {
            lines.push(format!("{}: #{template}", m.template_label));
        }
        if let Some(creator) = q.created_by_user_id {
            lines.push(format!("{}: #{creator}", m.created_label));
        }
        if let Some(term) = &q.search_term {
            lines.push(format!("{}: {term}", m.search_label));
        }
        lines
    }

    fn page_row(&self, page: &Page) -> String {
        let template = page.template_name.as_deref().unwrap_or("-");
        format!(
            "#{} {} /{} [{}] {}: {} {}: {}",
            page.id,
            page.title,
            page.slug,
            self.msgs.page_status(page.status),
            self.msgs.template_label,
            template,
            self.msgs.updated_label,
            page.updated_at.date()
        )
    }

    fn detail_section(&self, page: &Page) -> ListView {
        let mut detail = ListView::new(format!("#{} {}", page.id, page.title));
        let status = self.msgs.page_status(page.status);
        detail.subtitle = Some(format!("/{} [{status}]", page.slug));
        let mut blocks = page.blocks.clone().unwrap_or_default();
        blocks.sort_by_key(|block| block.order);
        detail.rows = blocks
            .iter()
            .map(|block| {
                format!(
                    "{}. #{} {} {}",
                    block.order,
                    block.id,
                    block.block_type.as_str(),
                    block.configuration
                )
            })
            .collect();
        if let Some(versions) = &self.versions {
            detail.rows.extend(versions.iter().map(|version| format!("v {version}")));
        }
        detail
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
    use crate::views::RequestStatus;

    fn view(server: &MockServer, tokens: Arc<MemoryTokenStore>) -> PagesView {
        let client = ApiClient::with_base(&server.base_url(), tokens).expect("client");
        PagesView::new(CmsApi::new(client), Locale::En.messages(), 10)
    }

    fn page_json(id: i64, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "slug": title.to_lowercase(),
            "content": "",
            "status": 1,
            "templateName": "Landing",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-02T10:00:00Z"
        })
    }

    fn paged(items: Vec<serde_json::Value>) -> serde_json::Value {
        let total = items.len();
        json!({
            "items": items,
            "totalCount": total,
            "pageNumber": 1,
            "pageSize": 10,
            "totalPages": if total == 0 { 0 } else { 1 }
        })
    }

    #[tokio::test]
    async fn first_load_requests_page_one_of_ten() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/api/v1/cms/pages")
                .query_param("pageNumber", "1")
                .query_param("pageSize", "10");
            then.status(200).json_body(paged(vec![page_json(1, "About")]));
        });

        let mut view = view(&server, Arc::new(MemoryTokenStore::default()));
        view.load().await;

        mock.assert();
        assert_eq!(view.state.status, RequestStatus::Ready);
        let out = view.render().expect("render");
        assert!(out.contains("#1 About /about [Published]"));
        assert!(out.contains("Page 1/1 (1)"));
    }

    #[tokio::test]
    async fn empty_result_shows_empty_state() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/cms/pages");
            then.status(200).json_body(paged(Vec::new()));
        });

        let mut view = view(&server, Arc::new(MemoryTokenStore::default()));
        view.load().await;

        let out = view.render().expect("render");
        let msgs = Locale::En.messages();
        assert!(out.contains(msgs.pages_empty));
        assert!(!out.contains("Page 1/"));
    }

    #[tokio::test]
    async fn delete_refetches_and_drops_the_row() {
        let server = MockServer::start();
        let mut before = server.mock(|when, then| {
            when.method("GET").path("/api/v1/cms/pages");
            then.status(200)
                .json_body(paged(vec![page_json(1, "About"), page_json(2, "Contact")]));
        });
        let delete = server.mock(|when, then| {
            when.method("DELETE").path("/api/v1/cms/pages/2");
            then.status(204);
        });

        let mut view = view(&server, Arc::new(MemoryTokenStore::default()));
        view.load().await;
        before.assert_calls(1);
        before.delete();

        let after = server.mock(|when, then| {
            when.method("GET").path("/api/v1/cms/pages");
            then.status(200).json_body(paged(vec![page_json(1, "About")]));
        });

        let outcome = view.apply(2, PageAction::Delete).await;
        assert!(outcome.is_applied());
        delete.assert();
        after.assert();

        let ids: Vec<i64> = view
            .result()
            .map(|r| r.items.iter().map(|p| p.id).collect())
            .unwrap_or_default();
        assert_eq!(ids, vec![1]);
    }

    #[tokio::test]
    async fn filters_restart_from_first_page() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/api/v1/cms/pages")
                .query_param("pageNumber", "1")
                .query_param("status", "0")
                .query_param("searchTerm", "team");
            then.status(200).json_body(paged(Vec::new()));
        });

        let mut view = view(&server, Arc::new(MemoryTokenStore::default()));
        view.set_page(4);
        view.set_filters(Some(PageStatus::Draft), None, None, Some(" team ".to_string()));
        view.load().await;
        mock.assert();
    }

    #[tokio::test]
    async fn unauthorized_load_clears_token_once() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/cms/pages");
            then.status(401);
        });

        let tokens = Arc::new(MemoryTokenStore::with_token("expired"));
        let mut view = view(&server, tokens.clone());
        view.load().await;

        assert_eq!(tokens.clear_count(), 1);
        assert_eq!(view.state.status, RequestStatus::Failed);
        assert!(view.state.has_error());
        let out = view.render().expect("render");
        assert!(out.contains(Locale::En.messages().unauthorized));
    }

    #[tokio::test]
    async fn blank_title_never_reaches_the_server() {
        let server = MockServer::start();
        let create = server.mock(|when, then| {
            when.method("POST").path("/api/v1/cms/pages");
            then.status(201);
        });

        let mut view = view(&server, Arc::new(MemoryTokenStore::default()));
        let outcome = view.create(&PageForm::default()).await;

        assert!(matches!(outcome, Outcome::Invalid(_)));
        create.assert_calls(0);
    }
}
