#![deny(clippy::all, clippy::pedantic)]

use novacore_admin::shell::Route;
use novacore_admin::views::{HomeView, ViewState};

use crate::context::{CliError, Ctx};

pub fn handle(ctx: &Ctx) -> Result<(), CliError> {
    let view = HomeView::new(ctx.msgs);
    let cards = view.cards();
    ctx.emit(Route::Home, &ViewState::default(), &view.render()?, Some(&cards))
}
