#![deny(clippy::all, clippy::pedantic)]

use std::fs;
use std::path::{Path, PathBuf};

use crate::context::CliError;

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::InputFile {
        path: path.display().to_string(),
        source,
    })
}

/// Inline value or file contents; the file wins when both are given.
pub fn read_value(val: Option<String>, file: Option<PathBuf>) -> Result<String, CliError> {
    read_opt_value(val, file)?.ok_or_else(|| CliError::InvalidInput("value required".into()))
}

pub fn read_opt_value(
    val: Option<String>,
    file: Option<PathBuf>,
) -> Result<Option<String>, CliError> {
    match file {
        Some(path) => read_file(&path).map(Some),
        None => Ok(val),
    }
}

/// Token text from a file, trimmed; blank files are rejected.
pub fn read_token(path: &Path) -> Result<String, CliError> {
    let token = read_file(path)?.trim().to_string();
    if token.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "token file {} is empty",
            path.display()
        )));
    }
    Ok(token)
}
