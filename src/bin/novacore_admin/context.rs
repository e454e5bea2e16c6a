#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;
use std::sync::Arc;

use novacore_admin::api::{CmsApi, DashboardApi};
use novacore_admin::client::{ApiClient, ApiError};
use novacore_admin::config::{LoadError, Settings};
use novacore_admin::forms::FormError;
use novacore_admin::infra::error::InfraError;
use novacore_admin::infra::token::FileTokenStore;
use novacore_admin::locale::Messages;
use novacore_admin::presentation::TemplateRenderError;
use novacore_admin::shell::{Route, render_frame};
use novacore_admin::views::{Outcome, ViewState};
use serde::Serialize;
use thiserror::Error;

use crate::print::{print_json, print_text};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Render(#[from] TemplateRenderError),
    #[error("{0}")]
    Validation(#[from] FormError),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to render output: {0}")]
    Output(serde_json::Error),
    /// The view finished with an error banner; the frame was already printed.
    #[error("{0}")]
    Rejected(String),
}

#[derive(Clone, Debug)]
pub struct Ctx {
    pub settings: Settings,
    pub tokens: Arc<FileTokenStore>,
    pub client: ApiClient,
    pub msgs: &'static Messages,
    pub json: bool,
}

impl Ctx {
    pub fn new(settings: Settings, json: bool) -> Result<Self, CliError> {
        let tokens = Arc::new(FileTokenStore::new(settings.session.token_path.clone()));
        let client = ApiClient::new(&settings.api, tokens.clone())?;
        Ok(Self {
            msgs: settings.ui.locale.messages(),
            settings,
            tokens,
            client,
            json,
        })
    }

    pub fn dashboard(&self) -> DashboardApi {
        DashboardApi::new(self.client.clone())
    }

    pub fn cms(&self) -> CmsApi {
        CmsApi::new(self.client.clone())
    }

    pub fn page_size(&self, requested: Option<u32>) -> u32 {
        requested
            .filter(|size| *size > 0)
            .unwrap_or_else(|| self.settings.ui.page_size.get())
    }

    pub fn token_path(&self) -> PathBuf {
        self.tokens.path().to_path_buf()
    }

    /// Print a finished view, as a frame or as JSON, and turn an error banner
    /// into a failing exit.
    pub fn emit<T: Serialize + ?Sized>(
        &self,
        route: Route,
        state: &ViewState,
        body: &str,
        data: Option<&T>,
    ) -> Result<(), CliError> {
        if self.json {
            if let (false, Some(data)) = (state.has_error(), data) {
                print_json(data)?;
            }
        } else {
            print_text(&render_frame(route, body, self.msgs)?);
        }

        match state.banner.as_ref().filter(|banner| banner.is_error()) {
            Some(banner) => Err(CliError::Rejected(banner.message.clone())),
            None => Ok(()),
        }
    }
}

/// Validation failures stop before anything is printed; server failures are
/// reported through the view banner by [`Ctx::emit`].
pub fn check(outcome: Outcome) -> Result<(), CliError> {
    match outcome {
        Outcome::Invalid(err) => Err(CliError::Validation(err)),
        Outcome::Applied | Outcome::Failed => Ok(()),
    }
}
