#![deny(clippy::all, clippy::pedantic)]

use novacore_admin::shell::Route;
use novacore_admin::views::MediaView;

use crate::args::MediaCmd;
use crate::context::{CliError, Ctx, check};

pub async fn handle(ctx: &Ctx, cmd: MediaCmd) -> Result<(), CliError> {
    let requested = match &cmd {
        MediaCmd::List { page_size, .. } => *page_size,
        MediaCmd::Upload { .. } | MediaCmd::Delete { .. } => None,
    };
    let mut view = MediaView::new(ctx.cms(), ctx.msgs, ctx.page_size(requested));
    match cmd {
        MediaCmd::List { page, .. } => {
            view.set_page(page);
            view.load().await;
        }
        MediaCmd::Upload { file } => check(view.upload(&file).await)?,
        MediaCmd::Delete { id } => check(view.delete(id).await)?,
    }

    let body = view.render()?;
    ctx.emit(Route::CmsMedia, &view.state, &body, view.result())
}
