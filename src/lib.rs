pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;

pub use models::{error::ThemeError, theme::Theme};
pub use services::controller::{DocumentThemeSink, PreferenceStore, ThemeController, ToggleControl};
