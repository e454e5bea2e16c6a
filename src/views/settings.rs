//! Dashboard settings editor view.

use novacore_api_types::dashboard::DashboardUiData;
use tracing::{debug, info};

use super::{Outcome, ViewState};
use crate::api::DashboardApi;
use crate::forms::settings::is_on;
use crate::forms::{SettingsEditor, Widget};
use crate::locale::Messages;
use crate::presentation::views::{
    BannerView, SettingRowView, SettingsContentView, SettingsTemplate,
};
use crate::presentation::{TemplateRenderError, render_template};

#[derive(Debug)]
pub struct SettingsView {
    api: DashboardApi,
    msgs: &'static Messages,
    pub state: ViewState,
    editor: Option<SettingsEditor>,
    ui: Option<DashboardUiData>,
}

impl SettingsView {
    pub fn new(api: DashboardApi, msgs: &'static Messages) -> Self {
        Self {
            api,
            msgs,
            state: ViewState::default(),
            editor: None,
            ui: None,
        }
    }

    pub fn editor(&self) -> Option<&SettingsEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut SettingsEditor> {
        self.editor.as_mut()
    }

    /// Settings and ui-data are fetched together; nothing is shown unless both succeed.
    pub async fn load(&mut self) {
        self.state.begin();
        match tokio::try_join!(self.api.settings(), self.api.ui_data()) {
            Ok((settings, ui)) => {
                debug!(count = settings.len(), "settings loaded");
                self.editor = Some(SettingsEditor::new(settings));
                self.ui = Some(ui);
                self.state.ready();
            }
            Err(err) => {
                self.editor = None;
                self.ui = None;
                self.state.fail(&err, self.msgs.settings_load_failed, self.msgs);
            }
        }
    }

    /// Drop local edits by reloading from the server.
    pub async fn reset(&mut self) {
        self.state.dismiss();
        self.load().await;
    }

    /// Submit the whole settings array in one request.
    pub async fn save(&mut self) -> Outcome {
        let Some(editor) = self.editor.as_mut() else {
            return Outcome::Failed;
        };
        match self.api.update_settings(editor.rows()).await {
            Ok(()) => {
                info!(count = editor.rows().len(), "settings saved");
                self.state.notify(self.msgs.settings_saved);
                Outcome::Applied
            }
            Err(err) => {
                self.state.reject(&err, self.msgs.settings_save_failed, self.msgs);
                Outcome::Failed
            }
        }
    }

    pub fn render(&self) -> Result<String, TemplateRenderError> {
        let m = self.msgs;
        let mut view = SettingsContentView {
            heading: m.settings_title.to_string(),
            subtitle: m.settings_subtitle.to_string(),
            banner: self.state.banner.as_ref().map(BannerView::from),
            loading: self.state.is_loading().then(|| m.loading.to_string()),
            empty: None,
            rows: Vec::new(),
        };

        if let Some(editor) = &self.editor {
            if editor.is_empty() {
                view.empty = Some(m.settings_empty.to_string());
            } else {
                view.rows = editor
                    .rows()
                    .iter()
                    .enumerate()
                    .map(|(index, row)| SettingRowView {
                        key: row.key.clone(),
                        type_label: editor.data_type_label(index, self.ui.as_ref()).to_string(),
                        input: self.input(Widget::for_type(&row.data_type), &row.value),
                        description: row.description.clone(),
                    })
                    .collect();
            }
        }

        render_template(&SettingsTemplate { view }, "views::settings::render")
    }

    fn input(&self, widget: Widget, value: &str) -> String {
        match widget {
            Widget::Toggle => {
                let mark = if is_on(value) { "x" } else { " " };
                format!("[{mark}] {}", self.msgs.activity(is_on(value)))
            }
            Widget::Color => format!("[■ {value}] {value}"),
            Widget::ImageUrl => format!("<{value}>"),
            Widget::MenuReference if value.is_empty() => {
                format!("({})", self.msgs.menu_reference_placeholder)
            }
            Widget::MenuReference | Widget::Text => format!("\"{value}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httpmock::MockServer;
    use serde_json::json;

    use super::*;
    use crate::client::ApiClient;
    use crate::infra::token::MemoryTokenStore;
    use crate::locale::Locale;
    use crate::views::RequestStatus;

    fn view(server: &MockServer) -> SettingsView {
        let client = ApiClient::with_base(&server.base_url(), Arc::new(MemoryTokenStore::default()))
            .expect("client");
        SettingsView::new(DashboardApi::new(client), Locale::En.messages())
    }

    fn settings_json() -> serde_json::Value {
        json!([
            {"key": "site.title", "value": "NovaCore", "dataType": "Text"},
            {"key": "maintenance", "value": "false", "dataType": "Boolean", "description": "Maintenance mode"}
        ])
    }

    fn ui_json() -> serde_json::Value {
        json!({
            "dataTypes": [{"value": "Boolean", "label": "Yes/No"}],
            "menuStatuses": []
        })
    }

    #[tokio::test]
    async fn shows_nothing_unless_both_requests_succeed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/settings");
            then.status(200).json_body(settings_json());
        });
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/ui-data");
            then.status(500);
        });

        let mut view = view(&server);
        view.load().await;

        assert_eq!(view.state.status, RequestStatus::Failed);
        assert!(view.editor().is_none());
        let out = view.render().expect("render");
        assert!(out.contains(Locale::En.messages().settings_load_failed));
        assert!(!out.contains("site.title"));
    }

    #[tokio::test]
    async fn toggle_twice_then_save_sends_whole_array() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/settings");
            then.status(200).json_body(settings_json());
        });
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/ui-data");
            then.status(200).json_body(ui_json());
        });
        let save = server.mock(|when, then| {
            when.method("PUT")
                .path("/api/v1/dashboard/settings")
                .json_body(settings_json());
            then.status(204);
        });

        let mut view = view(&server);
        view.load().await;

        let editor = view.editor_mut().expect("loaded");
        let index = editor.find("maintenance").expect("row");
        assert_eq!(editor.toggle(index), Some(true));
        assert_eq!(editor.toggle(index), Some(false));
        assert_eq!(editor.rows()[index].value, "false");

        let out = view.render().expect("render");
        assert!(out.contains("maintenance <Yes/No> [ ] Inactive"));

        assert!(view.save().await.is_applied());
        save.assert();
        assert!(!view.state.has_error());
    }

    #[tokio::test]
    async fn empty_settings_show_empty_state() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/settings");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/ui-data");
            then.status(200).json_body(ui_json());
        });

        let mut view = view(&server);
        view.load().await;

        let out = view.render().expect("render");
        assert!(out.contains(Locale::En.messages().settings_empty));
    }

    #[tokio::test]
    async fn reset_reloads_and_drops_local_edits() {
        let server = MockServer::start();
        let settings = server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/settings");
            then.status(200).json_body(settings_json());
        });
        server.mock(|when, then| {
            when.method("GET").path("/api/v1/dashboard/ui-data");
            then.status(200).json_body(ui_json());
        });

        let mut view = view(&server);
        view.load().await;
        let editor = view.editor_mut().expect("loaded");
        assert!(editor.edit(0, "Draft title"));

        view.reset().await;
        settings.assert_calls(2);
        let editor = view.editor().expect("reloaded");
        assert_eq!(editor.rows()[0].value, "NovaCore");
    }
}
