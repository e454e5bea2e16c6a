//! Typed editor over the dashboard settings array.

use novacore_api_types::dashboard::{DashboardSetting, DashboardUiData, SettingDataType};

/// Input widget used for a setting, chosen by its declared data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Toggle,
    /// Color swatch mirrored by a hex text field.
    Color,
    ImageUrl,
    /// Free-text menu id.
    MenuReference,
    Text,
}

impl Widget {
    pub fn for_type(data_type: &SettingDataType) -> Self {
        match data_type {
            SettingDataType::Boolean => Self::Toggle,
            SettingDataType::Color => Self::Color,
            SettingDataType::ImageUrl => Self::ImageUrl,
            SettingDataType::MenuReference => Self::MenuReference,
            SettingDataType::Text | SettingDataType::Other(_) => Self::Text,
        }
    }
}

/// Boolean settings travel as strings; only the exact text `"true"` is on.
pub fn is_on(value: &str) -> bool {
    value == "true"
}

pub fn toggled(value: &str) -> &'static str {
    if is_on(value) { "false" } else { "true" }
}

/// Local edit buffer. Edits are addressed by row index and the whole array
/// is submitted at once.
#[derive(Debug, Clone, Default)]
pub struct SettingsEditor {
    rows: Vec<DashboardSetting>,
}

impl SettingsEditor {
    pub fn new(settings: Vec<DashboardSetting>) -> Self {
        Self { rows: settings }
    }

    pub fn rows(&self) -> &[DashboardSetting] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn widget(&self, index: usize) -> Option<Widget> {
        self.rows.get(index).map(|row| Widget::for_type(&row.data_type))
    }

    /// Returns `false` when `index` is out of range.
    pub fn edit(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Flip a toggle row and return its new state. Non-toggle rows are left alone.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let row = self.rows.get_mut(index)?;
        if Widget::for_type(&row.data_type) != Widget::Toggle {
            return None;
        }
        row.value = toggled(&row.value).to_string();
        Some(is_on(&row.value))
    }

    pub fn find(&self, key: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.key == key)
    }

    /// Server label for a row's data type, else its raw name.
    pub fn data_type_label<'a>(&'a self, index: usize, ui: Option<&'a DashboardUiData>) -> &'a str {
        let Some(row) = self.rows.get(index) else {
            return "";
        };
        ui.and_then(|ui| ui.data_type_label(&row.data_type))
            .unwrap_or_else(|| row.data_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use novacore_api_types::dashboard::LabeledOption;

    use super::*;

    fn setting(key: &str, value: &str, data_type: SettingDataType) -> DashboardSetting {
        DashboardSetting {
            key: key.to_string(),
            value: value.to_string(),
            data_type,
            description: None,
        }
    }

    fn editor() -> SettingsEditor {
        SettingsEditor::new(vec![
            setting("site.title", "NovaCore", SettingDataType::Text),
            setting("maintenance", "TRUE", SettingDataType::Boolean),
            setting("brand.color", "#3366ff", SettingDataType::Color),
            setting("legacy", "x", SettingDataType::Other("Json".to_string())),
        ])
    }

    #[test]
    fn widgets_follow_data_type() {
        let editor = editor();
        assert_eq!(editor.widget(0), Some(Widget::Text));
        assert_eq!(editor.widget(1), Some(Widget::Toggle));
        assert_eq!(editor.widget(2), Some(Widget::Color));
        assert_eq!(editor.widget(3), Some(Widget::Text));
        assert_eq!(editor.widget(9), None);
    }

    #[test]
    fn toggling_twice_restores_displayed_state() {
        let mut editor = editor();
        // "TRUE" is not the exact text "true", so it displays as off.
        assert!(!is_on(&editor.rows()[1].value));
        assert_eq!(editor.toggle(1), Some(true));
        assert_eq!(editor.toggle(1), Some(false));
        assert_eq!(editor.rows()[1].value, "false");
        assert!(!is_on(&editor.rows()[1].value));
    }

    #[test]
    fn toggle_ignores_non_boolean_rows() {
        let mut editor = editor();
        assert_eq!(editor.toggle(0), None);
        assert_eq!(editor.rows()[0].value, "NovaCore");
    }

    #[test]
    fn edits_are_held_by_index() {
        let mut editor = editor();
        assert!(editor.edit(2, "#000000"));
        assert_eq!(editor.rows()[2].value, "#000000");
        assert!(!editor.edit(42, "nope"));
    }

    #[test]
    fn labels_prefer_ui_data() {
        let editor = editor();
        let ui = DashboardUiData {
            data_types: vec![LabeledOption {
                value: "Color".to_string(),
                label: "Colour".to_string(),
            }],
            menu_statuses: Vec::new(),
        };
        assert_eq!(editor.data_type_label(2, Some(&ui)), "Colour");
        assert_eq!(editor.data_type_label(1, Some(&ui)), "Boolean");
        assert_eq!(editor.data_type_label(3, None), "Json");
    }
}
