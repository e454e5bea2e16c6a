#![deny(clippy::all, clippy::pedantic)]

use serde::Serialize;

use crate::context::CliError;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value).map_err(CliError::Output)?;
    println!("{out}");
    Ok(())
}

pub fn print_text(text: &str) {
    println!("{}", text.trim_end());
}
