//! HTTP client wrapper shared by every API module.
//!
//! Reads the bearer token from the configured [`TokenStore`] on each request and
//! clears it when the server answers 401. No retries, caching or redirects.

mod error;

use std::path::Path;
use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiSettings;
use crate::infra::token::TokenStore;

pub use error::ApiError;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base: Url,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(Self::user_agent());
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base: settings.base_url.clone(),
            tokens,
        })
    }

    /// Client rooted at `base` with transport defaults.
    pub fn with_base(base: &str, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let http = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self { http, base, tokens })
    }

    pub fn user_agent() -> &'static str {
        concat!("novacore-admin/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Resolve an API path (relative, e.g. `api/v1/cms/pages`) against the base URL.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(ApiError::Url)
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let resp = self.send(method, path, query, body).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    /// Issue a request whose response body, if any, is ignored.
    pub async fn request_unit(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiError> {
        self.send(method, path, query, body).await?;
        Ok(())
    }

    /// Multipart upload of a single file under the `file` field.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file: &Path,
    ) -> Result<T, ApiError> {
        let data = tokio::fs::read(file)
            .await
            .map_err(|source| ApiError::UploadFile {
                path: file.to_path_buf(),
                source,
            })?;
        let file_name = file
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload.bin")
            .to_string();
        let mime = mime_guess::from_path(file).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(file_name)
            .mime_str(mime.essence_str())?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = self.url(path)?;
        let req = self.authorize(self.http.post(url))?.multipart(form);
        let resp = self.dispatch(&Method::POST, path, req).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let mut url = self.url(path)?;
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            url.set_query(None);
            let mut qp = url.query_pairs_mut();
            for (k, v) in q {
                qp.append_pair(k, v);
            }
        }

        let mut req = self.authorize(self.http.request(method.clone(), url))?;
        if let Some(b) = body {
            req = req.json(&b);
        }
        self.dispatch(&method, path, req).await
    }

    fn authorize(&self, req: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let Some(token) = self.tokens.load()? else {
            return Ok(req);
        };
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
        value.set_sensitive(true);
        Ok(req.header(AUTHORIZATION, value))
    }

    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        req: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        debug!(%method, path, status = status.as_u16(), "api request completed");

        if status == StatusCode::UNAUTHORIZED {
            if let Err(err) = self.tokens.clear() {
                warn!(error = %err, "failed to clear session token after 401");
            } else {
                warn!(%method, path, "session token rejected; cleared stored token");
            }
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(resp)
    }
}

/// Serialize a request record into the JSON body form `request` expects.
pub fn to_body<T: Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::InvalidInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;

    use super::*;
    use crate::infra::token::MemoryTokenStore;

    fn client(server: &MockServer, tokens: Arc<MemoryTokenStore>) -> ApiClient {
        ApiClient::with_base(&server.base_url(), tokens).expect("client")
    }

    #[tokio::test]
    async fn attaches_bearer_token_when_present() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/api/v1/dashboard/settings")
                .header("authorization", "Bearer secret");
            then.status(200)
                .header("content-type", "application/json")
                .body("[]");
        });

        let tokens = Arc::new(MemoryTokenStore::with_token("secret"));
        let api = client(&server, tokens);
        let res: Vec<serde_json::Value> = api
            .request(Method::GET, "api/v1/dashboard/settings", None, None)
            .await?;
        assert!(res.is_empty());
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn unauthorized_clears_token_once() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/cms/pages");
            then.status(401).body(r#"{"message":"expired"}"#);
        });

        let tokens = Arc::new(MemoryTokenStore::with_token("stale"));
        let api = client(&server, tokens.clone());
        let err = api
            .request::<serde_json::Value>(Method::GET, "api/v1/cms/pages", None, None)
            .await
            .expect_err("401 must surface");

        assert!(err.is_unauthorized());
        assert_eq!(tokens.clear_count(), 1);
        assert_eq!(tokens.load().expect("load"), None);
    }

    #[tokio::test]
    async fn other_failures_carry_status_and_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("DELETE").path("/api/v1/cms/pages/9");
            then.status(409).body(r#"{"message":"Page is referenced by a menu"}"#);
        });

        let tokens = Arc::new(MemoryTokenStore::default());
        let api = client(&server, tokens.clone());
        let err = api
            .request_unit(Method::DELETE, "api/v1/cms/pages/9", None, None)
            .await
            .expect_err("409 must surface");

        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
        assert_eq!(
            err.server_message().as_deref(),
            Some("Page is referenced by a menu")
        );
        assert_eq!(tokens.clear_count(), 0);
    }

    #[test]
    fn base_path_prefix_is_preserved() {
        let api = ApiClient::with_base(
            "https://admin.example.com/backend",
            Arc::new(MemoryTokenStore::default()),
        )
        .expect("client");
        let url = api.url("/api/v1/cms/media").expect("url");
        assert_eq!(url.as_str(), "https://admin.example.com/backend/api/v1/cms/media");
    }
}
