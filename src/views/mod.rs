//! In-process view models. Each view owns its fetched snapshot, a request
//! status and an optional banner; every mutation is followed by a re-fetch.

pub mod cms_menus;
pub mod home;
pub mod media;
pub mod menus;
pub mod pages;
pub mod settings;
pub mod submissions;
pub mod templates;
pub mod tree;

use novacore_api_types::PagedResult;
use tracing::warn;

use crate::client::ApiError;
use crate::forms::FormError;
use crate::locale::Messages;

pub use cms_menus::CmsMenusView;
pub use home::HomeView;
pub use media::MediaView;
pub use menus::{ActiveFilter, MenusView};
pub use pages::PagesView;
pub use settings::SettingsView;
pub use submissions::SubmissionsView;
pub use templates::TemplatesView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

/// Dismissable notice shown above a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    /// Server message when present, else the localized fallback.
    pub fn from_error(err: &ApiError, fallback: &str, msgs: &Messages) -> Self {
        let message = if err.is_unauthorized() {
            msgs.unauthorized.to_string()
        } else {
            err.server_message().unwrap_or_else(|| fallback.to_string())
        };
        Self {
            kind: BannerKind::Error,
            message,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

/// Result of a user action against a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Local validation failed; no request was sent.
    Invalid(FormError),
    /// The server rejected the request; see the view's banner.
    Failed,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Status and banner shared by every view.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub status: RequestStatus,
    pub banner: Option<Banner>,
}

impl ViewState {
    pub fn begin(&mut self) {
        self.status = RequestStatus::Loading;
    }

    pub fn ready(&mut self) {
        self.status = RequestStatus::Ready;
    }

    /// Record a failed load.
    pub fn fail(&mut self, err: &ApiError, fallback: &str, msgs: &Messages) {
        self.status = RequestStatus::Failed;
        self.reject(err, fallback, msgs);
    }

    /// Record a rejected mutation; the loaded data stays on screen.
    pub fn reject(&mut self, err: &ApiError, fallback: &str, msgs: &Messages) {
        warn!(error = %err, "api request failed");
        self.banner = Some(Banner::from_error(err, fallback, msgs));
    }

    pub fn notify(&mut self, message: &str) {
        self.banner = Some(Banner::success(message));
    }

    pub fn dismiss(&mut self) {
        self.banner = None;
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub fn has_error(&self) -> bool {
        self.banner.as_ref().is_some_and(Banner::is_error)
    }
}

/// Footer for paged lists: position and total, with previous/next markers
/// where those pages exist.
pub(crate) fn pager_footer<T>(msgs: &Messages, result: &PagedResult<T>) -> String {
    let mut footer = format!(
        "{} {}/{} ({})",
        msgs.page_label,
        result.page_number,
        result.total_pages.max(1),
        result.total_count
    );
    if result.has_previous() {
        footer.push_str(" < ");
        footer.push_str(msgs.previous_page);
    }
    if result.has_next() {
        footer.push(' ');
        footer.push_str(msgs.next_page);
        footer.push_str(" >");
    }
    footer
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::locale::Locale;

    #[test]
    fn banner_prefers_server_message() {
        let msgs = Locale::En.messages();
        let err = ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            body: r#"{"message":"Slug taken"}"#.to_string(),
        };
        let banner = Banner::from_error(&err, msgs.page_save_failed, msgs);
        assert_eq!(banner.message, "Slug taken");

        let err = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        };
        let banner = Banner::from_error(&err, msgs.page_save_failed, msgs);
        assert_eq!(banner.message, msgs.page_save_failed);
    }

    #[test]
    fn unauthorized_uses_session_message() {
        let msgs = Locale::Fa.messages();
        let mut state = ViewState::default();
        state.fail(&ApiError::Unauthorized, msgs.pages_load_failed, msgs);
        assert_eq!(state.status, RequestStatus::Failed);
        assert!(state.has_error());
        assert_eq!(state.banner.as_ref().map(|b| b.message.as_str()), Some(msgs.unauthorized));

        state.dismiss();
        assert!(!state.has_error());
    }

    #[test]
    fn pager_footer_marks_reachable_neighbours() {
        let msgs = Locale::En.messages();
        let middle = PagedResult::<u8> {
            total_count: 30,
            page_number: 2,
            page_size: 10,
            total_pages: 3,
            ..PagedResult::default()
        };
        assert_eq!(pager_footer(msgs, &middle), "Page 2/3 (30) < previous next >");

        let only = PagedResult::<u8> {
            total_count: 4,
            total_pages: 1,
            ..PagedResult::default()
        };
        assert_eq!(pager_footer(msgs, &only), "Page 1/1 (4)");
    }
}
