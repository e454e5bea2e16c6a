use askama::Template;

use crate::views::{Banner, BannerKind};

#[derive(Clone)]
pub struct BannerView {
    pub marker: &'static str,
    pub message: String,
}

impl From<&Banner> for BannerView {
    fn from(banner: &Banner) -> Self {
        Self {
            marker: match banner.kind {
                BannerKind::Error => "!",
                BannerKind::Success => "ok",
            },
            message: banner.message.clone(),
        }
    }
}

#[derive(Clone)]
pub struct EmptyStateView {
    pub message: String,
    pub hint: Option<String>,
}

/// One list screen: heading, optional notices, then either rows or an empty state.
#[derive(Clone)]
pub struct ListView {
    pub heading: String,
    pub subtitle: Option<String>,
    pub banner: Option<BannerView>,
    pub filters: Vec<String>,
    pub loading: Option<String>,
    pub empty: Option<EmptyStateView>,
    pub rows: Vec<String>,
    pub footer: Option<String>,
}

impl ListView {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            subtitle: None,
            banner: None,
            filters: Vec::new(),
            loading: None,
            empty: None,
            rows: Vec::new(),
            footer: None,
        }
    }
}

#[derive(Template)]
#[template(path = "list.txt")]
pub struct ListTemplate {
    /// Main list first; later sections are details such as a selected menu's items.
    pub sections: Vec<ListView>,
}

#[derive(Clone)]
pub struct StatCardView {
    pub title: String,
    pub value: String,
    pub description: String,
    pub trend: String,
}

#[derive(Clone)]
pub struct StatusRowView {
    pub label: String,
    pub value: String,
}

#[derive(Clone)]
pub struct HomeContentView {
    pub heading: String,
    pub welcome: String,
    pub cards: Vec<StatCardView>,
    pub activity_heading: String,
    pub status_heading: String,
    pub status_rows: Vec<StatusRowView>,
}

#[derive(Template)]
#[template(path = "home.txt")]
pub struct HomeTemplate {
    pub view: HomeContentView,
}

#[derive(Clone)]
pub struct SettingRowView {
    pub key: String,
    pub type_label: String,
    pub input: String,
    pub description: Option<String>,
}

#[derive(Clone)]
pub struct SettingsContentView {
    pub heading: String,
    pub subtitle: String,
    pub banner: Option<BannerView>,
    pub loading: Option<String>,
    pub empty: Option<String>,
    pub rows: Vec<SettingRowView>,
}

#[derive(Template)]
#[template(path = "settings.txt")]
pub struct SettingsTemplate {
    pub view: SettingsContentView,
}

#[derive(Clone)]
pub struct NavEntryView {
    pub label: String,
    pub path: String,
    pub is_active: bool,
}

#[derive(Clone)]
pub struct FrameView {
    pub app_name: String,
    pub app_subtitle: String,
    pub navigation: Vec<NavEntryView>,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub version_label: String,
    pub version: String,
}

#[derive(Template)]
#[template(path = "frame.txt")]
pub struct FrameTemplate {
    pub view: FrameView,
}
