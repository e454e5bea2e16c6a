//! Application shell: routes, sidebar navigation and the frame that wraps
//! every rendered view.

use crate::locale::Messages;
use crate::presentation::views::{FrameTemplate, FrameView, NavEntryView};
use crate::presentation::{TemplateRenderError, render_template};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Menus,
    Settings,
    CmsPages,
    CmsTemplates,
    CmsMedia,
    CmsSubmissions,
    CmsMenus,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Menus => "/menus",
            Self::Settings => "/settings",
            Self::CmsPages => "/cms",
            Self::CmsTemplates => "/cms/templates",
            Self::CmsMedia => "/cms/media",
            Self::CmsSubmissions => "/cms/submissions",
            Self::CmsMenus => "/cms/menus",
        }
    }

    /// Header title and subtitle for the route.
    pub fn heading(self, msgs: &Messages) -> (&'static str, &'static str) {
        match self {
            Self::Home => (msgs.home_title, msgs.home_welcome),
            Self::Menus => (msgs.menus_title, msgs.menus_subtitle),
            Self::Settings => (msgs.settings_title, msgs.settings_subtitle),
            Self::CmsPages => (msgs.pages_title, msgs.pages_subtitle),
            Self::CmsTemplates => (msgs.templates_title, msgs.pages_subtitle),
            Self::CmsMedia => (msgs.media_title, msgs.pages_subtitle),
            Self::CmsSubmissions => (msgs.submissions_title, msgs.pages_subtitle),
            Self::CmsMenus => (msgs.cms_menus_title, msgs.pages_subtitle),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Match {
    Exact,
    Prefix,
}

#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    matching: Match,
}

impl NavEntry {
    pub fn is_active(&self, current: &str) -> bool {
        match self.matching {
            Match::Exact => current == self.path,
            Match::Prefix => {
                current == self.path
                    || current
                        .strip_prefix(self.path)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

pub fn sidebar(msgs: &Messages) -> [NavEntry; 4] {
    [
        NavEntry {
            label: msgs.nav_home,
            path: "/",
            matching: Match::Exact,
        },
        NavEntry {
            label: msgs.nav_menus,
            path: "/menus",
            matching: Match::Prefix,
        },
        NavEntry {
            label: msgs.nav_settings,
            path: "/settings",
            matching: Match::Prefix,
        },
        NavEntry {
            label: msgs.nav_cms,
            path: "/cms",
            matching: Match::Prefix,
        },
    ]
}

/// Wrap a rendered view in the sidebar, header and footer.
pub fn render_frame(
    route: Route,
    body: &str,
    msgs: &Messages,
) -> Result<String, TemplateRenderError> {
    let (title, subtitle) = route.heading(msgs);
    let view = FrameView {
        app_name: msgs.app_name.to_string(),
        app_subtitle: msgs.app_subtitle.to_string(),
        navigation: sidebar(msgs)
            .iter()
            .map(|entry| NavEntryView {
                label: entry.label.to_string(),
                path: entry.path.to_string(),
                is_active: entry.is_active(route.path()),
            })
            .collect(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        body: body.trim_end().to_string(),
        version_label: msgs.version_label.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    render_template(&FrameTemplate { view }, "shell::render_frame")
}
