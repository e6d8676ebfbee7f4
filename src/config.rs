use crate::models::theme::Theme;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// localStorage key holding the persisted theme
    pub const STORAGE_KEY: &'static str = "theme";

    /// Attribute set on the document root; style rules select on it
    pub const THEME_ATTRIBUTE: &'static str = "data-theme";

    /// Element id of the toggle control
    pub const TOGGLE_ELEMENT_ID: &'static str = "themeToggle";

    /// Theme used when nothing usable has been persisted yet
    pub const DEFAULT_THEME: Theme = Theme::Light;
}
