//! Dashboard namespace: settings, menus and their items.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Menu summary as listed by `GET /api/v1/dashboard/menus`; `items` is a count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMenu {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    #[serde(default)]
    pub items: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Menu detail as returned by `GET /api/v1/dashboard/menus/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMenuDetail {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub items: Vec<DashboardMenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMenuItem {
    pub id: i64,
    pub menu_id: i64,
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub order: i32,
    pub is_visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DashboardMenuItem>>,
}

/// Declared type of a dashboard setting; unrecognised names are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SettingDataType {
    Text,
    Boolean,
    Color,
    ImageUrl,
    MenuReference,
    Other(String),
}

impl SettingDataType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "Text",
            Self::Boolean => "Boolean",
            Self::Color => "Color",
            Self::ImageUrl => "ImageUrl",
            Self::MenuReference => "MenuReference",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for SettingDataType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Text" => Self::Text,
            "Boolean" => Self::Boolean,
            "Color" => Self::Color,
            "ImageUrl" => Self::ImageUrl,
            "MenuReference" => Self::MenuReference,
            _ => Self::Other(value),
        }
    }
}

impl From<SettingDataType> for String {
    fn from(value: SettingDataType) -> Self {
        match value {
            SettingDataType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SettingDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSetting {
    pub key: String,
    pub value: String,
    pub data_type: SettingDataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardUiData {
    #[serde(default)]
    pub data_types: Vec<LabeledOption>,
    #[serde(default)]
    pub menu_statuses: Vec<LabeledOption>,
}

impl DashboardUiData {
    /// Display label for a setting data type, if the server supplied one.
    pub fn data_type_label(&self, data_type: &SettingDataType) -> Option<&str> {
        self.data_types
            .iter()
            .find(|option| option.value == data_type.as_str())
            .map(|option| option.label.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_structure: Option<Vec<DashboardMenuItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_structure: Option<Vec<DashboardMenuItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemRequest {
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    /// `Some(None)` sends `null` and moves the item to the top level.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::wire::nullable"
    )]
    pub parent_id: Option<Option<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderMenuItemsRequest {
    pub item_ids: Vec<i64>,
}
