//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{
    num::NonZeroU32,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use clap::{Args, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::locale::Locale;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "novacore";
const FALLBACK_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_PAGE_SIZE: u32 = 10;
const TOKEN_DIR: &str = ".novacore";
const TOKEN_FILE: &str = "token";

/// Base URL baked in at build time through `NOVACORE_API_BASE_URL`, else the local default.
pub fn default_api_base_url() -> &'static str {
    option_env!("NOVACORE_API_BASE_URL").unwrap_or(FALLBACK_API_BASE_URL)
}

/// Command-line overrides; each flag wins over file and environment values.
#[derive(Debug, Args, Default, Clone)]
pub struct ConfigOverrides {
    /// Override the REST API base URL.
    #[arg(long = "api-base-url", value_name = "URL", global = true)]
    pub api_base_url: Option<String>,

    /// Override the per-request timeout (no timeout when unset).
    #[arg(long = "request-timeout-seconds", value_name = "SECONDS", global = true)]
    pub request_timeout_seconds: Option<u64>,

    /// Override where the bearer token is persisted.
    #[arg(long = "token-file", value_name = "PATH", global = true)]
    pub token_file: Option<PathBuf>,

    /// Override the display language (en|fa).
    #[arg(long = "locale", value_name = "LOCALE", global = true)]
    pub locale: Option<String>,

    /// Override the default page size for paginated lists.
    #[arg(long = "default-page-size", value_name = "COUNT", global = true)]
    pub page_size: Option<u32>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

/// Fully-resolved console settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub session: SessionSettings,
    pub logging: LoggingSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub token_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    pub locale: Locale,
    pub page_size: NonZeroU32,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("NOVACORE").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(overrides);

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    api: RawApiSettings,
    session: RawSessionSettings,
    logging: RawLoggingSettings,
    ui: RawUiSettings,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = overrides.api_base_url.as_ref() {
            self.api.base_url = Some(url.clone());
        }
        if let Some(seconds) = overrides.request_timeout_seconds {
            self.api.request_timeout_seconds = Some(seconds);
        }
        if let Some(path) = overrides.token_file.as_ref() {
            self.session.token_path = Some(path.clone());
        }
        if let Some(locale) = overrides.locale.as_ref() {
            self.ui.locale = Some(locale.clone());
        }
        if let Some(size) = overrides.page_size {
            self.ui.page_size = Some(size);
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            api,
            session,
            logging,
            ui,
        } = raw;

        Ok(Self {
            api: build_api_settings(api)?,
            session: build_session_settings(session)?,
            logging: build_logging_settings(logging)?,
            ui: build_ui_settings(ui)?,
        })
    }
}

fn build_api_settings(api: RawApiSettings) -> Result<ApiSettings, LoadError> {
    let raw_url = api
        .base_url
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default_api_base_url().to_string());

    let mut base_url = Url::parse(&raw_url)
        .map_err(|err| LoadError::invalid("api.base_url", format!("failed to parse: {err}")))?;
    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(LoadError::invalid(
            "api.base_url",
            "scheme must be http or https",
        ));
    }
    base_url.set_query(None);
    base_url.set_fragment(None);
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }

    let request_timeout = match api.request_timeout_seconds {
        Some(0) => {
            return Err(LoadError::invalid(
                "api.request_timeout_seconds",
                "must be greater than zero",
            ));
        }
        Some(seconds) => Some(Duration::from_secs(seconds)),
        None => None,
    };

    Ok(ApiSettings {
        base_url,
        request_timeout,
    })
}

fn build_session_settings(session: RawSessionSettings) -> Result<SessionSettings, LoadError> {
    let token_path = session.token_path.unwrap_or_else(default_token_path);
    if token_path.as_os_str().is_empty() {
        return Err(LoadError::invalid(
            "session.token_path",
            "path must not be empty",
        ));
    }

    Ok(SessionSettings { token_path })
}

fn default_token_path() -> PathBuf {
    let base = std::env::var_os("HOME").map_or_else(PathBuf::new, PathBuf::from);
    base.join(TOKEN_DIR).join(TOKEN_FILE)
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::WARN,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_ui_settings(ui: RawUiSettings) -> Result<UiSettings, LoadError> {
    let locale = match ui.locale {
        Some(value) => {
            Locale::from_str(&value).map_err(|reason| LoadError::invalid("ui.locale", reason))?
        }
        None => Locale::default(),
    };

    let page_size = NonZeroU32::new(ui.page_size.unwrap_or(DEFAULT_PAGE_SIZE))
        .ok_or_else(|| LoadError::invalid("ui.page_size", "must be greater than zero"))?;

    Ok(UiSettings { locale, page_size })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawApiSettings {
    base_url: Option<String>,
    request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSessionSettings {
    token_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawUiSettings {
    locale: Option<String>,
    page_size: Option<u32>,
}

#[cfg(test)]
mod tests;
