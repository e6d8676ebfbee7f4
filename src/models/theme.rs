use super::error::ThemeError;
use crate::config::Config;

/// Visual theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the document attribute and to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph shown on the toggle control: the theme a click switches to.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }

    /// Resolves a persisted value into a theme.
    ///
    /// A missing value resolves to the default. So does an unrecognized one:
    /// it is normalized rather than reported, and the next write replaces it.
    pub fn resolve_stored(stored: Option<&str>) -> Self {
        stored
            .and_then(|value| value.parse().ok())
            .unwrap_or(Config::DEFAULT_THEME)
    }

    /// Theme a toggle activation moves to, given the current root attribute.
    ///
    /// Only an exact `light` flips to dark. Every other value, including a
    /// missing or corrupted attribute, flips to light.
    pub fn toggle_target(current: Option<&str>) -> Self {
        match current.map(str::parse::<Theme>) {
            Some(Ok(Theme::Light)) => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeError::UnknownTheme(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parsing_is_exact() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("Dark".parse::<Theme>().is_err());
        assert!(" light".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_str_matches_display() {
        for theme in Theme::all() {
            assert_eq!(theme.to_string(), theme.as_str());
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), *theme);
        }
    }

    #[test]
    fn test_icons() {
        assert_eq!(Theme::Dark.icon(), "☀️");
        assert_eq!(Theme::Light.icon(), "🌙");
    }

    #[test]
    fn test_toggled_is_an_involution() {
        for theme in Theme::all() {
            assert_ne!(theme.toggled(), *theme);
            assert_eq!(theme.toggled().toggled(), *theme);
        }
    }

    #[test]
    fn test_resolve_stored() {
        assert_eq!(Theme::resolve_stored(None), Theme::Light);
        assert_eq!(Theme::resolve_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::resolve_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::resolve_stored(Some("solarized")), Theme::Light);
    }

    #[test]
    fn test_toggle_target() {
        assert_eq!(Theme::toggle_target(Some("light")), Theme::Dark);
        assert_eq!(Theme::toggle_target(Some("dark")), Theme::Light);
        assert_eq!(Theme::toggle_target(None), Theme::Light);
        assert_eq!(Theme::toggle_target(Some("purple")), Theme::Light);
    }
}
