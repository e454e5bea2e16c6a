use std::path::Path;

use novacore_api_types::PagedResult;
use novacore_api_types::cms::{Media, MediaListQuery};
use tracing::info;

use super::{Outcome, ViewState, pager_footer};
use crate::api::CmsApi;
use crate::client::ApiError;
use crate::locale::Messages;
use crate::presentation::views::{BannerView, EmptyStateView, ListTemplate, ListView};
use crate::presentation::{TemplateRenderError, render_template};

#[derive(Debug)]
pub struct MediaView {
    api: CmsApi,
    msgs: &'static Messages,
    pub state: ViewState,
    query: MediaListQuery,
    result: Option<PagedResult<Media>>,
}

impl MediaView {
    pub fn new(api: CmsApi, msgs: &'static Messages, page_size: u32) -> Self {
        Self {
            api,
            msgs,
            state: ViewState::default(),
            query: MediaListQuery {
                page_number: Some(1),
                page_size: Some(page_size),
            },
            result: None,
        }
    }

    pub fn result(&self) -> Option<&PagedResult<Media>> {
        self.result.as_ref()
    }

    pub fn set_page(&mut self, page_number: u32) {
        self.query.page_number = Some(page_number.max(1));
    }

    pub async fn load(&mut self) {
        self.state.begin();
        match self.api.media(&self.query).await {
            Ok(result) => {
                self.result = Some(result);
                self.state.ready();
            }
            Err(err) => self.state.fail(&err, self.msgs.media_load_failed, self.msgs),
        }
    }

    pub async fn upload(&mut self, file: &Path) -> Outcome {
        let result = self.api.upload_media(file).await.map(|media| {
            info!(id = media.id, file = %media.file_name, "media uploaded");
        });
        self.settle(result, self.msgs.media_upload_failed).await
    }

    pub async fn delete(&mut self, id: i64) -> Outcome {
        let result = self.api.delete_media(id).await;
        self.settle(result, self.msgs.media_delete_failed).await
    }

    async fn settle(&mut self, result: Result<(), ApiError>, fallback: &'static str) -> Outcome {
        match result {
            Ok(()) => {
                self.state.dismiss();
                self.load().await;
                Outcome::Applied
            }
            Err(err) => {
                self.state.reject(&err, fallback, self.msgs);
                Outcome::Failed
            }
        }
    }

    pub fn render(&self) -> Result<String, TemplateRenderError> {
        let m = self.msgs;
        let mut list = ListView::new(m.media_title);
        list.banner = self.state.banner.as_ref().map(BannerView::from);
        if self.state.is_loading() {
            list.loading = Some(m.loading.to_string());
        }
        if let Some(result) = &self.result {
            if result.is_empty() {
                list.empty = Some(EmptyStateView {
                    message: m.media_empty.to_string(),
                    hint: None,
                });
            } else {
                list.rows = result
                    .items
                    .iter()
                    .map(|media| {
                        format!(
                            "#{} {} {} {} {}",
                            media.id,
                            media.file_name,
                            media.mime_type,
                            human_size(media.file_size),
                            media.file_path
                        )
                    })
                    .collect();
                list.footer = Some(pager_footer(m, result));
            }
        }
        render_template(&ListTemplate { sections: vec![list] }, "views::media::render")
    }
}

fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}
