use yew::prelude::*;

use crate::services::web::{attach, document};

/// Binds the theme controller to the toggle control once it has rendered.
///
/// The binding is dropped (and the click subscription removed) on unmount.
#[hook]
pub fn use_theme() {
    use_effect_with((), move |_| {
        let binding = match document().and_then(|d| attach(&d)) {
            Ok(binding) => Some(binding),
            Err(e) => {
                web_sys::console::error_1(&format!("Theme setup failed: {e}").into());
                None
            }
        };
        move || drop(binding)
    });
}
