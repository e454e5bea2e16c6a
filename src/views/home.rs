//! Landing view. The figures are fixed placeholders; nothing is fetched.

use serde::Serialize;

use crate::locale::Messages;
use crate::presentation::views::{HomeContentView, HomeTemplate, StatCardView, StatusRowView};
use crate::presentation::{TemplateRenderError, render_template};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    /// Percent change; positive is an increase.
    pub trend: f32,
}

impl StatCard {
    pub fn trend_label(&self) -> String {
        let arrow = if self.trend >= 0.0 { "↑" } else { "↓" };
        format!("{arrow} {:.1}%", self.trend.abs())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HomeView {
    msgs: &'static Messages,
}

impl HomeView {
    pub fn new(msgs: &'static Messages) -> Self {
        Self { msgs }
    }

    pub fn cards(&self) -> [StatCard; 4] {
        let m = self.msgs;
        [
            StatCard {
                title: m.stat_menus,
                value: "12",
                description: m.stat_menus_hint,
                trend: 5.2,
            },
            StatCard {
                title: m.stat_settings,
                value: "24",
                description: m.stat_settings_hint,
                trend: 12.5,
            },
            StatCard {
                title: m.stat_visits,
                value: "1,234",
                description: m.stat_visits_hint,
                trend: 8.1,
            },
            StatCard {
                title: m.stat_users,
                value: "89",
                description: m.stat_users_hint,
                trend: 3.2,
            },
        ]
    }

    pub fn system_status(&self) -> [(&'static str, &'static str); 3] {
        let m = self.msgs;
        [
            (m.status_server, m.status_server_value),
            (m.status_database, m.status_database_value),
            (m.status_gateway, m.status_gateway_value),
        ]
    }

    pub fn render(&self) -> Result<String, TemplateRenderError> {
        let view = HomeContentView {
            heading: self.msgs.home_title.to_string(),
            welcome: self.msgs.home_welcome.to_string(),
            cards: self
                .cards()
                .iter()
                .map(|card| StatCardView {
                    title: card.title.to_string(),
                    value: card.value.to_string(),
                    description: card.description.to_string(),
                    trend: card.trend_label(),
                })
                .collect(),
            activity_heading: self.msgs.recent_activity.to_string(),
            status_heading: self.msgs.system_status.to_string(),
            status_rows: self
                .system_status()
                .iter()
                .map(|(label, value)| StatusRowView {
                    label: label.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        };
        render_template(&HomeTemplate { view }, "views::home::render")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn renders_cards_and_status_rows() {
        let out = HomeView::new(Locale::En.messages()).render().expect("render");
        assert!(out.contains("Total menus: 12 (↑ 5.2%)"));
        assert!(out.contains("Visits today: 1,234"));
        assert!(out.contains("Database: Connected"));
    }
}
