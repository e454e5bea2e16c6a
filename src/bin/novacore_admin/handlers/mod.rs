#![deny(clippy::all, clippy::pedantic)]

pub mod cms_menus;
pub mod home;
pub mod media;
pub mod menus;
pub mod pages;
pub mod session;
pub mod settings;
pub mod submissions;
pub mod templates;
pub mod ui_data;
