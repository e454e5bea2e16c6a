#![deny(clippy::all, clippy::pedantic)]

use crate::args::UiDataCmd;
use crate::context::{CliError, Ctx};
use crate::print::print_json;

/// Option lists are printed as JSON in every output mode.
pub async fn handle(ctx: &Ctx, cmd: UiDataCmd) -> Result<(), CliError> {
    match cmd {
        UiDataCmd::Dashboard => print_json(&ctx.dashboard().ui_data().await?),
        UiDataCmd::Cms => print_json(&ctx.cms().ui_data().await?),
    }
}
