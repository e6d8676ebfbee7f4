use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_theme::use_theme;

/// Theme toggle button component
///
/// Rendered without children: the label belongs to the theme controller.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    use_theme();

    html! {
        <button
            id={Config::TOGGLE_ELEMENT_ID}
            class="theme-toggle"
            title="Toggle theme"
        />
    }
}
