#![deny(clippy::all, clippy::pedantic)]

use novacore_admin::shell::Route;
use novacore_admin::views::SubmissionsView;

use crate::args::SubmissionsCmd;
use crate::context::{CliError, Ctx};

pub async fn handle(ctx: &Ctx, cmd: SubmissionsCmd) -> Result<(), CliError> {
    match cmd {
        SubmissionsCmd::List {
            page_id,
            page,
            page_size,
        } => {
            let mut view = SubmissionsView::new(ctx.cms(), ctx.msgs, ctx.page_size(page_size));
            view.set_page_filter(page_id);
            view.set_page(page);
            view.load().await;
            let body = view.render()?;
            ctx.emit(Route::CmsSubmissions, &view.state, &body, view.result())
        }
        SubmissionsCmd::Show { id } => {
            let mut view = SubmissionsView::new(ctx.cms(), ctx.msgs, ctx.page_size(None));
            view.select(id).await;
            let body = view.render()?;
            ctx.emit(Route::CmsSubmissions, &view.state, &body, view.selected())
        }
    }
}
