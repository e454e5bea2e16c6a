use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::infra::error::InfraError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unauthorized: the stored session token was cleared")]
    Unauthorized,
    #[error("server error: status {status} body {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to parse body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read upload {path}: {source}")]
    UploadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Token(#[from] InfraError),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// The `message` field of a JSON error body, when the server sent one.
    pub fn server_message(&self) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(body: &str) -> ApiError {
        ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            body: body.to_string(),
        }
    }

    #[test]
    fn extracts_json_message() {
        let err = status_error(r#"{"message":"Slug already exists","errors":[]}"#);
        assert_eq!(err.server_message().as_deref(), Some("Slug already exists"));
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn ignores_plain_text_and_blank_messages() {
        assert_eq!(status_error("Bad Request").server_message(), None);
        assert_eq!(status_error(r#"{"message":"  "}"#).server_message(), None);
        assert_eq!(ApiError::Unauthorized.server_message(), None);
    }
}
