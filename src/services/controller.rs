use crate::config::Config;
use crate::models::{error::ThemeError, theme::Theme};

/// Origin-scoped key-value storage that survives reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The document root whose presentation attribute carries the theme.
pub trait DocumentThemeSink {
    fn get_attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;
}

/// The control the user activates to switch themes.
pub trait ToggleControl {
    fn set_label(&self, label: &str);
}

/// Keeps the document attribute, the toggle label and the persisted value in
/// sync with a single theme.
///
/// Every method takes `&self`: the controller is shared with the activation
/// handler, and the host event loop never runs two handlers at once.
pub struct ThemeController<S, D, C> {
    store: S,
    document: D,
    control: C,
}

impl<S, D, C> ThemeController<S, D, C>
where
    S: PreferenceStore,
    D: DocumentThemeSink,
    C: ToggleControl,
{
    pub fn new(store: S, document: D, control: C) -> Self {
        Self {
            store,
            document,
            control,
        }
    }

    /// Resolves the persisted theme (or the default) and applies it.
    ///
    /// The resolved theme is written back even when it was just read.
    pub fn initialize(&self) -> Result<Theme, ThemeError> {
        let stored = self.store.get(Config::STORAGE_KEY);
        let theme = Theme::resolve_stored(stored.as_deref());
        self.apply(theme)?;
        Ok(theme)
    }

    /// Sets the root attribute, the toggle label and the persisted value.
    pub fn apply(&self, theme: Theme) -> Result<(), ThemeError> {
        self.document
            .set_attribute(Config::THEME_ATTRIBUTE, theme.as_str())?;
        self.control.set_label(theme.icon());
        self.store.set(Config::STORAGE_KEY, theme.as_str())
    }

    /// Flips the theme currently shown on the document and applies the result.
    pub fn on_toggle_activated(&self) -> Result<Theme, ThemeError> {
        let current = self.document.get_attribute(Config::THEME_ATTRIBUTE);
        let next = Theme::toggle_target(current.as_deref());
        self.apply(next)?;
        Ok(next)
    }

    /// Theme currently on the document, if the attribute holds a valid one.
    pub fn current(&self) -> Option<Theme> {
        self.document
            .get_attribute(Config::THEME_ATTRIBUTE)
            .and_then(|value| value.parse().ok())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    /// Hands the capabilities back, e.g. to reuse the store after a reload.
    pub fn into_parts(self) -> (S, D, C) {
        (self.store, self.document, self.control)
    }
}
