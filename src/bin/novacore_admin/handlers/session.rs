#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use novacore_admin::infra::token::TokenStore;
use serde::Serialize;
use tracing::{info, warn};

use crate::args::SessionCmd;
use crate::context::{CliError, Ctx};
use crate::io::read_token;
use crate::print::{print_json, print_text};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionStatus {
    api_base_url: String,
    token_file: PathBuf,
    signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verify_error: Option<String>,
}

pub async fn handle(ctx: &Ctx, cmd: SessionCmd) -> Result<(), CliError> {
    match cmd {
        SessionCmd::Login {
            token_file_input,
            token_env,
        } => login(ctx, token_file_input, token_env),
        SessionCmd::Logout => {
            ctx.tokens.clear()?;
            info!(path = %ctx.token_path().display(), "session token cleared");
            print_text("Signed out.");
            Ok(())
        }
        SessionCmd::Status { verify } => status(ctx, verify).await,
    }
}

fn login(
    ctx: &Ctx,
    token_file_input: Option<PathBuf>,
    token_env: Option<String>,
) -> Result<(), CliError> {
    let token = match (token_file_input, token_env) {
        (Some(path), _) => read_token(&path)?,
        (None, Some(token)) if !token.trim().is_empty() => token.trim().to_string(),
        _ => {
            return Err(CliError::InvalidInput(
                "token is required (use --token-file-input or NOVACORE_TOKEN)".into(),
            ));
        }
    };
    ctx.tokens.store(&token)?;
    info!(path = %ctx.token_path().display(), "session token stored");
    print_text(&format!("Token stored at {}", ctx.token_path().display()));
    Ok(())
}

async fn status(ctx: &Ctx, verify: bool) -> Result<(), CliError> {
    let signed_in = ctx.tokens.load()?.is_some();
    let mut failure = None;
    let verified = if verify && signed_in {
        match ctx.dashboard().ui_data().await {
            Ok(_) => Some(true),
            // The client has already cleared the rejected token.
            Err(err) if err.is_unauthorized() => Some(false),
            Err(err) => {
                warn!(error = %err, "could not verify session token");
                failure = Some(err);
                None
            }
        }
    } else {
        None
    };
    let report = SessionStatus {
        api_base_url: ctx.settings.api.base_url.to_string(),
        token_file: ctx.token_path(),
        signed_in: signed_in && verified != Some(false),
        verified,
        verify_error: failure.as_ref().map(ToString::to_string),
    };

    if ctx.json {
        print_json(&report)?;
    } else {
        let note = match (report.verified, &report.verify_error) {
            (Some(true), _) => " (verified)".to_string(),
            (Some(false), _) => " (rejected by server)".to_string(),
            (None, Some(error)) => format!(" (could not verify: {error})"),
            (None, None) => String::new(),
        };
        print_text(&format!(
            "API: {}\nToken file: {}\nSigned in: {}{note}",
            report.api_base_url,
            report.token_file.display(),
            if report.signed_in { "yes" } else { "no" },
        ));
    }
    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
