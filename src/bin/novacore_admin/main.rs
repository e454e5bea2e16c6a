//! novacore-admin: console for the NovaCore dashboard and CMS APIs.
//! Each command drives one library view and prints its frame, or raw JSON with `--json`.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod context;
mod handlers;
mod io;
mod print;


use std::process::ExitCode;

use clap::Parser;
use novacore_admin::{config, infra::telemetry};
use tracing::debug;

use args::{Cli, Commands};
use context::{CliError, Ctx};
use handlers::{
    cms_menus, home, media, menus, pages, session, settings, submissions, templates, ui_data,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = config::load(cli.config_file.as_deref(), &cli.overrides)?;
    telemetry::init(&settings.logging)?;
    debug!(api = %settings.api.base_url, locale = settings.ui.locale.as_str(), "settings loaded");

    let ctx = Ctx::new(settings, cli.json)?;
    dispatch(&ctx, cli.command).await
}

async fn dispatch(ctx: &Ctx, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Session(cmd) => session::handle(ctx, cmd.action).await,
        Commands::Home => home::handle(ctx),
        Commands::Menus(cmd) => menus::handle(ctx, cmd.action).await,
        Commands::Settings(cmd) => settings::handle(ctx, cmd.action).await,
        Commands::Pages(cmd) => pages::handle(ctx, cmd.action).await,
        Commands::Templates(cmd) => templates::handle(ctx, cmd.action).await,
        Commands::Media(cmd) => media::handle(ctx, cmd.action).await,
        Commands::Submissions(cmd) => submissions::handle(ctx, cmd.action).await,
        Commands::CmsMenus(cmd) => cms_menus::handle(ctx, cmd.action).await,
        Commands::UiData(cmd) => ui_data::handle(ctx, cmd.action).await,
    }
}
