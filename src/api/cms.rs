//! CMS endpoints: pages, blocks, versions, templates, media, menus and form submissions.

use std::path::Path;

use reqwest::Method;

use novacore_api_types::PagedResult;
use novacore_api_types::cms::{
    AddPageBlockRequest, CmsMenu, CmsMenuRequest, CmsUiData, CreatePageRequest,
    CreatePageTemplateRequest, FormSubmission, Media, MediaListQuery, Page, PageListQuery,
    PageTemplate, ReorderPageBlocksRequest, SubmissionListQuery, UpdatePageBlockRequest,
    UpdatePageRequest, UpdatePageTemplateRequest,
};

use super::{active_filter, segment};
use crate::client::{ApiClient, ApiError, to_body};

const BASE: &str = "api/v1/cms";

/// Status transitions a page can be sent through with a bodyless `PUT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTransition {
    Publish,
    Unpublish,
    Archive,
}

impl PageTransition {
    fn action(self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Unpublish => "unpublish",
            Self::Archive => "archive",
        }
    }
}

#[derive(Clone, Debug)]
pub struct CmsApi {
    client: ApiClient,
}

impl CmsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // pages

    pub async fn pages(&self, query: &PageListQuery) -> Result<PagedResult<Page>, ApiError> {
        let pairs = query.to_pairs();
        self.client
            .request(Method::GET, &format!("{BASE}/pages"), Some(&pairs), None)
            .await
    }

    pub async fn page(&self, id: i64) -> Result<Page, ApiError> {
        self.client
            .request(Method::GET, &format!("{BASE}/pages/{id}"), None, None)
            .await
    }

    pub async fn page_by_slug(&self, slug: &str) -> Result<Page, ApiError> {
        let path = format!("{BASE}/pages/slug/{}", segment(slug));
        self.client.request(Method::GET, &path, None, None).await
    }

    pub async fn create_page(&self, req: &CreatePageRequest) -> Result<Page, ApiError> {
        let body = to_body(req)?;
        self.client
            .request(Method::POST, &format!("{BASE}/pages"), None, Some(body))
            .await
    }

    pub async fn update_page(&self, id: i64, req: &UpdatePageRequest) -> Result<(), ApiError> {
        let body = to_body(req)?;
        self.client
            .request_unit(Method::PUT, &format!("{BASE}/pages/{id}"), None, Some(body))
            .await
    }

    pub async fn delete_page(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .request_unit(Method::DELETE, &format!("{BASE}/pages/{id}"), None, None)
            .await
    }

    pub async fn transition_page(&self, id: i64, to: PageTransition) -> Result<(), ApiError> {
        let path = format!("{BASE}/pages/{id}/{}", to.action());
        self.client.request_unit(Method::PUT, &path, None, None).await
    }

    pub async fn duplicate_page(&self, id: i64) -> Result<Page, ApiError> {
        let path = format!("{BASE}/pages/{id}/duplicate");
        self.client.request(Method::POST, &path, None, None).await
    }

    // blocks

    pub async fn add_block(&self, page_id: i64, req: &AddPageBlockRequest) -> Result<(), ApiError> {
        let body = to_body(req)?;
        let path = format!("{BASE}/pages/{page_id}/blocks");
        self.client
            .request_unit(Method::POST, &path, None, Some(body))
            .await
    }

    pub async fn update_block(
        &self,
        block_id: i64,
        req: &UpdatePageBlockRequest,
    ) -> Result<(), ApiError> {
        let body = to_body(req)?;
        let path = format!("{BASE}/pages/blocks/{block_id}");
        self.client
            .request_unit(Method::PUT, &path, None, Some(body))
            .await
    }

    pub async fn delete_block(&self, block_id: i64) -> Result<(), ApiError> {
        let path = format!("{BASE}/pages/blocks/{block_id}");
        self.client
            .request_unit(Method::DELETE, &path, None, None)
            .await
    }

    pub async fn reorder_blocks(&self, page_id: i64, block_ids: Vec<i64>) -> Result<(), ApiError> {
        let body = to_body(&ReorderPageBlocksRequest { block_ids })?;
        let path = format!("{BASE}/pages/{page_id}/blocks/reorder");
        self.client
            .request_unit(Method::PUT, &path, None, Some(body))
            .await
    }

    // versions

    pub async fn create_version(&self, page_id: i64) -> Result<(), ApiError> {
        let path = format!("{BASE}/pages/{page_id}/versions");
        self.client.request_unit(Method::POST, &path, None, None).await
    }

    /// Version records are returned untyped by the server.
    pub async fn versions(&self, page_id: i64) -> Result<Vec<serde_json::Value>, ApiError> {
        let path = format!("{BASE}/pages/{page_id}/versions");
        self.client.request(Method::GET, &path, None, None).await
    }

    pub async fn restore_version(&self, page_id: i64, version_id: i64) -> Result<(), ApiError> {
        let path = format!("{BASE}/pages/{page_id}/versions/{version_id}/restore");
        self.client.request_unit(Method::POST, &path, None, None).await
    }

    // templates

    pub async fn templates(&self) -> Result<Vec<PageTemplate>, ApiError> {
        self.client
            .request(Method::GET, &format!("{BASE}/templates"), None, None)
            .await
    }

    pub async fn template(&self, id: i64) -> Result<PageTemplate, ApiError> {
        self.client
            .request(Method::GET, &format!("{BASE}/templates/{id}"), None, None)
            .await
    }

    pub async fn create_template(
        &self,
        req: &CreatePageTemplateRequest,
    ) -> Result<PageTemplate, ApiError> {
        let body = to_body(req)?;
        self.client
            .request(Method::POST, &format!("{BASE}/templates"), None, Some(body))
            .await
    }

    pub async fn update_template(
        &self,
        id: i64,
        req: &UpdatePageTemplateRequest,
    ) -> Result<(), ApiError> {
        let body = to_body(req)?;
        let path = format!("{BASE}/templates/{id}");
        self.client
            .request_unit(Method::PUT, &path, None, Some(body))
            .await
    }

    pub async fn delete_template(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .request_unit(Method::DELETE, &format!("{BASE}/templates/{id}"), None, None)
            .await
    }

    // media

    pub async fn media(&self, query: &MediaListQuery) -> Result<PagedResult<Media>, ApiError> {
        let pairs = query.to_pairs();
        self.client
            .request(Method::GET, &format!("{BASE}/media"), Some(&pairs), None)
            .await
    }

    pub async fn upload_media(&self, file: &Path) -> Result<Media, ApiError> {
        self.client.upload(&format!("{BASE}/media"), file).await
    }

    pub async fn delete_media(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .request_unit(Method::DELETE, &format!("{BASE}/media/{id}"), None, None)
            .await
    }

    // menus

    pub async fn menus(&self, is_active: Option<bool>) -> Result<Vec<CmsMenu>, ApiError> {
        let query = active_filter(is_active);
        self.client
            .request(Method::GET, &format!("{BASE}/menus"), Some(&query), None)
            .await
    }

    pub async fn menu(&self, id: i64) -> Result<CmsMenu, ApiError> {
        self.client
            .request(Method::GET, &format!("{BASE}/menus/{id}"), None, None)
            .await
    }

    /// Menus are also addressable by name on the same route as ids.
    pub async fn menu_by_name(&self, name: &str) -> Result<CmsMenu, ApiError> {
        let path = format!("{BASE}/menus/{}", segment(name));
        self.client.request(Method::GET, &path, None, None).await
    }

    pub async fn create_menu(&self, req: &CmsMenuRequest) -> Result<CmsMenu, ApiError> {
        let body = to_body(req)?;
        self.client
            .request(Method::POST, &format!("{BASE}/menus"), None, Some(body))
            .await
    }

    pub async fn update_menu(&self, id: i64, req: &CmsMenuRequest) -> Result<(), ApiError> {
        let body = to_body(req)?;
        self.client
            .request_unit(Method::PUT, &format!("{BASE}/menus/{id}"), None, Some(body))
            .await
    }

    pub async fn delete_menu(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .request_unit(Method::DELETE, &format!("{BASE}/menus/{id}"), None, None)
            .await
    }

    // form submissions

    pub async fn submissions(
        &self,
        query: &SubmissionListQuery,
    ) -> Result<PagedResult<FormSubmission>, ApiError> {
        let pairs = query.to_pairs();
        let path = format!("{BASE}/form-submissions");
        self.client
            .request(Method::GET, &path, Some(&pairs), None)
            .await
    }

    pub async fn submission(&self, id: i64) -> Result<FormSubmission, ApiError> {
        let path = format!("{BASE}/form-submissions/{id}");
        self.client.request(Method::GET, &path, None, None).await
    }

    pub async fn ui_data(&self) -> Result<CmsUiData, ApiError> {
        self.client
            .request(Method::GET, &format!("{BASE}/pages/ui-data"), None, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httpmock::MockServer;
    use novacore_api_types::cms::PageStatus;
    use serde_json::json;

    use super::*;
    use crate::infra::token::MemoryTokenStore;

    fn api(server: &MockServer) -> CmsApi {
        let client = ApiClient::with_base(&server.base_url(), Arc::new(MemoryTokenStore::default()))
            .expect("client");
        CmsApi::new(client)
    }

    fn empty_page() -> serde_json::Value {
        json!({"items": [], "totalCount": 0, "pageNumber": 1, "pageSize": 10, "totalPages": 0})
    }

    #[tokio::test]
    async fn page_list_sends_populated_filters_verbatim() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/api/v1/cms/pages")
                .query_param("pageNumber", "2")
                .query_param("pageSize", "10")
                .query_param("status", "1")
                .query_param("searchTerm", "about us")
                .query_param_missing("templateId")
                .query_param_missing("createdByUserId");
            then.status(200).json_body(empty_page());
        });

        let query = PageListQuery {
            page_number: Some(2),
            page_size: Some(10),
            status: Some(PageStatus::Published),
            search_term: Some("about us".to_string()),
            ..Default::default()
        };
        let result = api(&server).pages(&query).await?;
        assert!(result.is_empty());
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn slug_lookup_encodes_the_segment() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/api/v1/cms/pages/slug/a%20b");
            then.status(200).json_body(json!({
                "id": 4,
                "title": "A B",
                "slug": "a b",
                "content": "",
                "status": 0,
                "createdAt": "2024-05-01T10:00:00Z",
                "updatedAt": "2024-05-01T10:00:00Z"
            }));
        });

        let page = api(&server).page_by_slug("a b").await?;
        assert_eq!(page.status, PageStatus::Draft);
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn transitions_hit_their_action_routes() -> Result<(), ApiError> {
        let server = MockServer::start();
        let publish = server.mock(|when, then| {
            when.method("PUT").path("/api/v1/cms/pages/5/publish");
            then.status(204);
        });
        let archive = server.mock(|when, then| {
            when.method("PUT").path("/api/v1/cms/pages/5/archive");
            then.status(204);
        });

        let api = api(&server);
        api.transition_page(5, PageTransition::Publish).await?;
        api.transition_page(5, PageTransition::Archive).await?;
        publish.assert();
        archive.assert();
        Ok(())
    }

    #[tokio::test]
    async fn upload_posts_multipart_file() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/api/v1/cms/media")
                .header_includes("content-type", "multipart/form-data")
                .body_includes("name=\"file\"")
                .body_includes("filename=\"logo.png\"");
            then.status(201).json_body(json!({
                "id": 11,
                "fileName": "logo.png",
                "filePath": "/uploads/logo.png",
                "fileSize": 4,
                "mimeType": "image/png",
                "uploadedAt": "2024-05-01T10:00:00Z"
            }));
        });

        let dir = tempfile::tempdir().expect("tmp dir");
        let file = dir.path().join("logo.png");
        std::fs::write(&file, b"\x89PNG").expect("write");

        let media = api(&server).upload_media(&file).await?;
        assert_eq!(media.id, 11);
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn submissions_filter_by_page() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/api/v1/cms/form-submissions")
                .query_param("pageId", "9")
                .query_param("pageNumber", "1");
            then.status(200).json_body(empty_page());
        });

        let query = SubmissionListQuery {
            page_id: Some(9),
            page_number: Some(1),
            page_size: None,
        };
        api(&server).submissions(&query).await?;
        mock.assert();
        Ok(())
    }
}
