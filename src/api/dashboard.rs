//! Dashboard endpoints: settings, menus and menu items.

use reqwest::Method;

use novacore_api_types::dashboard::{
    CreateMenuItemRequest, CreateMenuRequest, DashboardMenu, DashboardMenuDetail,
    DashboardMenuItem, DashboardSetting, DashboardUiData, ReorderMenuItemsRequest,
    UpdateMenuItemRequest, UpdateMenuRequest,
};

use super::active_filter;
use crate::client::{ApiClient, ApiError, to_body};

const BASE: &str = "api/v1/dashboard";

#[derive(Clone, Debug)]
pub struct DashboardApi {
    client: ApiClient,
}

impl DashboardApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn settings(&self) -> Result<Vec<DashboardSetting>, ApiError> {
        self.client
            .request(Method::GET, &format!("{BASE}/settings"), None, None)
            .await
    }

    /// Replaces every setting at once; the server receives the whole array.
    pub async fn update_settings(&self, settings: &[DashboardSetting]) -> Result<(), ApiError> {
        let body = to_body(&settings)?;
        self.client
            .request_unit(Method::PUT, &format!("{BASE}/settings"), None, Some(body))
            .await
    }

    /// `is_active: None` lists every menu.
    pub async fn menus(&self, is_active: Option<bool>) -> Result<Vec<DashboardMenu>, ApiError> {
        let query = active_filter(is_active);
        self.client
            .request(Method::GET, &format!("{BASE}/menus"), Some(&query), None)
            .await
    }

    pub async fn menu(&self, id: i64) -> Result<DashboardMenuDetail, ApiError> {
        self.client
            .request(Method::GET, &format!("{BASE}/menus/{id}"), None, None)
            .await
    }

    pub async fn create_menu(&self, req: &CreateMenuRequest) -> Result<DashboardMenu, ApiError> {
        let body = to_body(req)?;
        self.client
            .request(Method::POST, &format!("{BASE}/menus"), None, Some(body))
            .await
    }

    pub async fn update_menu(&self, id: i64, req: &UpdateMenuRequest) -> Result<(), ApiError> {
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

    pub async fn toggle_menu_active(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .request_unit(Method::PUT, &format!("{BASE}/menus/{id}/active"), None, None)
            .await
    }

    pub async fn add_menu_item(
        &self,
        menu_id: i64,
        req: &CreateMenuItemRequest,
    ) -> Result<DashboardMenuItem, ApiError> {
        let body = to_body(req)?;
        let path = format!("{BASE}/menus/{menu_id}/items");
        self.client
            .request(Method::POST, &path, None, Some(body))
            .await
    }

    pub async fn update_menu_item(
        &self,
        item_id: i64,
        req: &UpdateMenuItemRequest,
    ) -> Result<(), ApiError> {
        let body = to_body(req)?;
        let path = format!("{BASE}/menus/items/{item_id}");
        self.client
            .request_unit(Method::PUT, &path, None, Some(body))
            .await
    }

    pub async fn delete_menu_item(&self, item_id: i64) -> Result<(), ApiError> {
        let path = format!("{BASE}/menus/items/{item_id}");
        self.client
            .request_unit(Method::DELETE, &path, None, None)
            .await
    }

    pub async fn toggle_item_visibility(&self, item_id: i64) -> Result<(), ApiError> {
        let path = format!("{BASE}/menus/items/{item_id}/visibility");
        self.client.request_unit(Method::PUT, &path, None, None).await
    }

    pub async fn reorder_items(&self, menu_id: i64, item_ids: Vec<i64>) -> Result<(), ApiError> {
        let body = to_body(&ReorderMenuItemsRequest { item_ids })?;
        let path = format!("{BASE}/menus/{menu_id}/items/reorder");
        self.client
            .request_unit(Method::PUT, &path, None, Some(body))
            .await
    }

    pub async fn ui_data(&self) -> Result<DashboardUiData, ApiError> {
        self.client
            .request(Method::GET, &format!("{BASE}/ui-data"), None, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httpmock::MockServer;
    use serde_json::json;

    use super::*;
    use crate::infra::token::MemoryTokenStore;

    fn api(server: &MockServer) -> DashboardApi {
        let client = ApiClient::with_base(&server.base_url(), Arc::new(MemoryTokenStore::default()))
            .expect("client");
        DashboardApi::new(client)
    }

    #[tokio::test]
    async fn menus_sends_active_filter_only_when_set() -> Result<(), ApiError> {
        let server = MockServer::start();
        let filtered = server.mock(|when, then| {
            when.method("GET")
                .path("/api/v1/dashboard/menus")
                .query_param("isActive", "false");
            then.status(200).json_body(json!([
                {"id": 3, "name": "Footer", "description": "", "isActive": false, "items": 0}
            ]));
        });

        let menus = api(&server).menus(Some(false)).await?;
        assert_eq!(menus.len(), 1);
        assert!(!menus[0].is_active);
        filtered.assert();
        Ok(())
    }

    #[tokio::test]
    async fn menu_detail_carries_item_list() -> Result<(), ApiError> {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/menus/7");
            then.status(200).json_body(json!({
                "id": 7,
                "name": "Main",
                "description": "Top navigation",
                "isActive": true,
                "items": [
                    {"id": 1, "menuId": 7, "label": "Home", "url": "/", "order": 0, "isVisible": true}
                ]
            }));
        });

        let detail = api(&server).menu(7).await?;
        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.items[0].label, "Home");
        Ok(())
    }

    #[tokio::test]
    async fn reorder_sends_item_ids() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("PUT")
                .path("/api/v1/dashboard/menus/7/items/reorder")
                .json_body(json!({"itemIds": [3, 1, 2]}));
            then.status(204);
        });

        api(&server).reorder_items(7, vec![3, 1, 2]).await?;
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn toggles_are_bodyless_puts() -> Result<(), ApiError> {
        let server = MockServer::start();
        let menu = server.mock(|when, then| {
            when.method("PUT").path("/api/v1/dashboard/menus/7/active");
            then.status(204);
        });
        let item = server.mock(|when, then| {
            when.method("PUT")
                .path("/api/v1/dashboard/menus/items/12/visibility");
            then.status(204);
        });

        let api = api(&server);
        api.toggle_menu_active(7).await?;
        api.toggle_item_visibility(12).await?;
        menu.assert();
        item.assert();
        Ok(())
    }
}
