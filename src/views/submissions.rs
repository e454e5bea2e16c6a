use novacore_api_types::PagedResult;
use novacore_api_types::cms::{FormSubmission, SubmissionListQuery};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::{ViewState, pager_footer};
use crate::api::CmsApi;
use crate::locale::Messages;
use crate::presentation::views::{BannerView, EmptyStateView, ListTemplate, ListView};
use crate::presentation::{TemplateRenderError, render_template};

/// Read-only list of form submissions, optionally narrowed to one page.
#[derive(Debug)]
pub struct SubmissionsView {
    api: CmsApi,
    msgs: &'static Messages,
    pub state: ViewState,
    query: SubmissionListQuery,
    result: Option<PagedResult<FormSubmission>>,
    selected: Option<FormSubmission>,
}

impl SubmissionsView {
    pub fn new(api: CmsApi, msgs: &'static Messages, page_size: u32) -> Self {
        Self {
            api,
            msgs,
            state: ViewState::default(),
            query: SubmissionListQuery {
                page_id: None,
                page_number: Some(1),
                page_size: Some(page_size),
            },
            result: None,
            selected: None,
        }
    }

    pub fn result(&self) -> Option<&PagedResult<FormSubmission>> {
        self.result.as_ref()
    }

    pub fn selected(&self) -> Option<&FormSubmission> {
        self.selected.as_ref()
    }

    pub fn set_page_filter(&mut self, page_id: Option<i64>) {
        self.query.page_id = page_id;
        self.query.page_number = Some(1);
    }

    pub fn set_page(&mut self, page_number: u32) {
        self.query.page_number = Some(page_number.max(1));
    }

    pub async fn load(&mut self) {
        self.state.begin();
        match self.api.submissions(&self.query).await {
            Ok(result) => {
                self.result = Some(result);
                self.state.ready();
            }
            Err(err) => self.state.fail(&err, self.msgs.submissions_load_failed, self.msgs),
        }
    }

    pub async fn select(&mut self, id: i64) {
        match self.api.submission(id).await {
            Ok(submission) => self.selected = Some(submission),
            Err(err) => self.state.reject(&err, self.msgs.submissions_load_failed, self.msgs),
        }
    }

    pub fn render(&self) -> Result<String, TemplateRenderError> {
        let m = self.msgs;
        let mut list = ListView::new(m.submissions_title);
        list.banner = self.state.banner.as_ref().map(BannerView::from);
        if let Some(page_id) = self.query.page_id {
            list.filters.push(format!("{}: #{page_id}", m.page_label));
        }
        if self.state.is_loading() {
            list.loading = Some(m.loading.to_string());
        }
        if let Some(result) = &self.result {
            if result.is_empty() {
                list.empty = Some(EmptyStateView {
                    message: m.submissions_empty.to_string(),
                    hint: None,
                });
            } else {
                list.rows = result.items.iter().map(summary).collect();
                list.footer = Some(pager_footer(m, result));
            }
        }

        let mut sections = vec![list];
        if let Some(submission) = &self.selected {
            let mut detail = ListView::new(summary(submission));
            detail.subtitle = submission
                .submitted_by
                .iter()
                .chain(submission.ip_address.iter())
                .chain(submission.user_agent.iter())
                .cloned()
                .reduce(|acc, part| format!("{acc} | {part}"));
            detail.rows = submission
                .form_data
                .iter()
                .map(|(field, value)| match value.as_str() {
                    Some(text) => format!("{field}: {text}"),
                    None => format!("{field}: {value}"),
                })
                .collect();
            sections.push(detail);
        }
        render_template(&ListTemplate { sections }, "views::submissions::render")
    }
}

const SUBMITTED_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

fn summary(submission: &FormSubmission) -> String {
    let submitted = submission
        .submitted_at
        .format(SUBMITTED_FORMAT)
        .unwrap_or_else(|_| submission.submitted_at.date().to_string());
    format!(
        "#{} page #{} block #{} [{}] {submitted}",
        submission.id, submission.page_id, submission.page_block_id, submission.status,
    )
}
