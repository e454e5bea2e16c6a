//! Admin console for the NovaCore content backend: typed REST client,
//! view models and text rendering shared by the `novacore-admin` binary.

pub mod api;
pub mod client;
pub mod config;
pub mod forms;
pub mod infra;
pub mod locale;
pub mod presentation;
pub mod shell;
pub mod views;
