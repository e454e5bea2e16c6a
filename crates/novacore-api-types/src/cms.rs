//! CMS namespace: pages, blocks, templates, media, menus and form submissions.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::UnknownDiscriminant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PageStatus {
    Draft,
    Published,
    Archived,
}

impl PageStatus {
    pub const ALL: [PageStatus; 3] = [Self::Draft, Self::Published, Self::Archived];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl From<PageStatus> for u8 {
    fn from(value: PageStatus) -> Self {
        match value {
            PageStatus::Draft => 0,
            PageStatus::Published => 1,
            PageStatus::Archived => 2,
        }
    }
}

impl TryFrom<u8> for PageStatus {
    type Error = UnknownDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Draft),
            1 => Ok(Self::Published),
            2 => Ok(Self::Archived),
            other => Err(UnknownDiscriminant {
                kind: "page status",
                value: other,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BlockType {
    Text,
    Image,
    Video,
    Form,
    Gallery,
    Code,
}

impl BlockType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Form => "form",
            Self::Gallery => "gallery",
            Self::Code => "code",
        }
    }
}

impl From<BlockType> for u8 {
    fn from(value: BlockType) -> Self {
        match value {
            BlockType::Text => 0,
            BlockType::Image => 1,
            BlockType::Video => 2,
            BlockType::Form => 3,
            BlockType::Gallery => 4,
            BlockType::Code => 5,
        }
    }
}

impl TryFrom<u8> for BlockType {
    type Error = UnknownDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Text),
            1 => Ok(Self::Image),
            2 => Ok(Self::Video),
            3 => Ok(Self::Form),
            4 => Ok(Self::Gallery),
            5 => Ok(Self::Code),
            other => Err(UnknownDiscriminant {
                kind: "block type",
                value: other,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: String,
    pub status: PageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(with = "crate::wire::timestamp")]
    pub created_at: OffsetDateTime,
    #[serde(with = "crate::wire::timestamp")]
    pub updated_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<PageBlock>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBlock {
    pub id: i64,
    pub page_id: i64,
    pub block_type: BlockType,
    pub configuration: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTemplate {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub content: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: i64,
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(with = "crate::wire::timestamp")]
    pub uploaded_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by_user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsMenu {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub menu_structure: Vec<CmsMenuItem>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsMenuItem {
    pub id: i64,
    pub label: String,
    pub url: String,
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CmsMenuItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub id: i64,
    pub page_id: i64,
    pub page_block_id: i64,
    #[serde(default)]
    pub form_data: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    pub status: String,
    #[serde(with = "crate::wire::timestamp")]
    pub submitted_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedOption {
    pub value: u8,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsUiData {
    #[serde(default)]
    pub page_statuses: Vec<NamedOption>,
    #[serde(default)]
    pub block_types: Vec<NamedOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<TemplateOption>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageTemplateRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageTemplateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPageBlockRequest {
    pub block_type: BlockType,
    pub configuration: String,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageBlockRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_type: Option<BlockType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderPageBlocksRequest {
    pub block_ids: Vec<i64>,
}

/// Body for CMS menu create/update; the backend treats every field as optional on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsMenuRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_structure: Option<Vec<CmsMenuItem>>,
}

/// Query for `GET /api/v1/cms/pages`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageListQuery {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub status: Option<PageStatus>,
    pub template_id: Option<i64>,
    pub created_by_user_id: Option<i64>,
    pub search_term: Option<String>,
}

impl PageListQuery {
    /// Populated fields as wire query pairs, in declaration order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(number) = self.page_number {
            pairs.push(("pageNumber", number.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("pageSize", size.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", u8::from(status).to_string()));
        }
        if let Some(template) = self.template_id {
            pairs.push(("templateId", template.to_string()));
        }
        if let Some(creator) = self.created_by_user_id {
            pairs.push(("createdByUserId", creator.to_string()));
        }
        if let Some(search) = &self.search_term {
            pairs.push(("searchTerm", search.clone()));
        }
        pairs
    }
}

/// Query for `GET /api/v1/cms/media`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaListQuery {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl MediaListQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(number) = self.page_number {
            pairs.push(("pageNumber", number.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("pageSize", size.to_string()));
        }
        pairs
    }
}

/// Query for `GET /api/v1/cms/form-submissions`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionListQuery {
    pub page_id: Option<i64>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl SubmissionListQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page_id {
            pairs.push(("pageId", page.to_string()));
        }
        if let Some(number) = self.page_number {
            pairs.push(("pageNumber", number.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("pageSize", size.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_status_travels_as_integer() {
        assert_eq!(serde_json::to_string(&PageStatus::Archived).expect("json"), "2");
        let parsed: PageStatus = serde_json::from_str("1").expect("status");
        assert_eq!(parsed, PageStatus::Published);
        assert!(serde_json::from_str::<PageStatus>("7").is_err());
    }

    #[test]
    fn page_query_emits_only_populated_fields() {
        let query = PageListQuery {
            page_number: Some(3),
            page_size: Some(25),
            status: Some(PageStatus::Draft),
            search_term: Some("about us".into()),
            ..PageListQuery::default()
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("pageNumber", "3".to_string()),
                ("pageSize", "25".to_string()),
                ("status", "0".to_string()),
                ("searchTerm", "about us".to_string()),
            ]
        );
        assert!(PageListQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn page_parses_backend_payload() {
        let raw = r#"{
            "id": 4, "title": "About", "slug": "about", "content": "<p>hi</p>", "status": 1,
            "templateName": "Landing", "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-02T08:30:00+03:30",
            "blocks": [{"id": 9, "pageId": 4, "blockType": 5, "configuration": "{}", "order": 0}]
        }"#;
        let page: Page = serde_json::from_str(raw).expect("page");
        assert_eq!(page.status, PageStatus::Published);
        assert_eq!(page.blocks.expect("blocks")[0].block_type, BlockType::Code);
    }

    #[test]
    fn offsetless_timestamps_do_not_break_lists() {
        let raw = r#"{
            "items": [{"id": 1, "fileName": "logo.png", "filePath": "/media/logo.png",
                "fileSize": 2048, "mimeType": "image/png", "uploadedAt": "2024-05-01T10:00:00"}],
            "totalCount": 1, "pageNumber": 1, "pageSize": 10, "totalPages": 1
        }"#;
        let page: crate::PagedResult<Media> = serde_json::from_str(raw).expect("media page");
        assert_eq!(page.items[0].uploaded_at.offset(), time::UtcOffset::UTC);
        assert_eq!(page.items[0].uploaded_at.hour(), 10);

        let raw = r#"{"id": 5, "title": "Home", "slug": "home", "status": 0,
            "createdAt": "2024-05-01T10:00:00", "updatedAt": "2024-05-01T10:00:00.1234567"}"#;
        let page: Page = serde_json::from_str(raw).expect("page");
        assert_eq!(page.created_at.date(), time::macros::date!(2024 - 05 - 01));
    }
}
