//! Browser capabilities backed by `web_sys`, and the binding that wires the
//! toggle control's click event to a [`ThemeController`].

use gloo::events::EventListener;
use web_sys::{Document, Element, Storage};

use super::controller::{DocumentThemeSink, PreferenceStore, ThemeController, ToggleControl};
use crate::config::Config;
use crate::models::error::ThemeError;

/// `localStorage` for the page's origin.
///
/// Values are stored as raw strings rather than JSON so they stay readable
/// by plain scripts sharing the same key.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPreferenceStore;

impl LocalPreferenceStore {
    /// `None` when storage access is denied (sandboxed frame, disabled by the user).
    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        match Self::storage() {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => {
                web_sys::console::warn_1(
                    &"localStorage unavailable or read failed, using default theme".into(),
                );
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()
            .ok_or_else(|| ThemeError::Storage("localStorage unavailable".to_string()))?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))
    }
}

/// The document's root (`<html>`) element.
pub struct RootElementSink {
    root: Element,
}

impl RootElementSink {
    pub fn new(document: &Document) -> Result<Self, ThemeError> {
        document
            .document_element()
            .map(|root| Self { root })
            .ok_or(ThemeError::MissingRoot)
    }
}

impl DocumentThemeSink for RootElementSink {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.root.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.root.set_attribute(name, value)?;
        Ok(())
    }
}

/// The toggle element; its text content is the label.
pub struct ElementToggle {
    element: Element,
}

impl ElementToggle {
    /// Looks up the toggle control by its fixed id.
    pub fn find(document: &Document) -> Result<Self, ThemeError> {
        document
            .get_element_by_id(Config::TOGGLE_ELEMENT_ID)
            .map(|element| Self { element })
            .ok_or_else(|| ThemeError::MissingControl(Config::TOGGLE_ELEMENT_ID.to_string()))
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl ToggleControl for ElementToggle {
    fn set_label(&self, label: &str) {
        self.element.set_text_content(Some(label));
    }
}

/// A live controller together with its click subscription.
///
/// Dropping the binding unsubscribes from the toggle control.
pub struct ThemeBinding {
    listener: EventListener,
}

impl ThemeBinding {
    /// Keeps the subscription alive for the rest of the page.
    pub fn forget(self) {
        self.listener.forget();
    }
}

/// Current browser document
pub fn document() -> Result<Document, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ThemeError::MissingDocument)
}

/// Whether the page already contains the toggle control.
pub fn page_has_toggle(document: &Document) -> bool {
    document.get_element_by_id(Config::TOGGLE_ELEMENT_ID).is_some()
}

/// Initializes the theme and subscribes to the toggle control's click event.
///
/// The document structure and the toggle control must already exist; a
/// missing control is reported as [`ThemeError::MissingControl`]. Other
/// initialization failures are logged and the control is still bound.
pub fn attach(document: &Document) -> Result<ThemeBinding, ThemeError> {
    let control = ElementToggle::find(document)?;
    let target = control.element().clone();
    let sink = RootElementSink::new(document)?;

    let controller = ThemeController::new(LocalPreferenceStore, sink, control);
    if let Err(e) = controller.initialize() {
        if e.is_fatal() {
            return Err(e);
        }
        // The page already shows the theme; keep the toggle usable.
        gloo::console::warn!(&format!("Theme initialization incomplete: {e}"));
    }

    let listener = EventListener::new(&target, "click", move |_event| {
        if let Err(e) = controller.on_toggle_activated() {
            gloo::console::warn!(&format!("Theme toggle failed: {e}"));
        }
    });

    Ok(ThemeBinding { listener })
}

/// Runs `f` once the document has been parsed.
///
/// While the document is still loading, `f` is deferred to
/// `DOMContentLoaded`; otherwise it runs immediately.
pub fn on_ready<F>(f: F)
where
    F: FnOnce(&Document) + 'static,
{
    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            gloo::console::error!(&format!("Theme setup failed: {e}"));
            return;
        }
    };

    if document.ready_state() == "loading" {
        let ready = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_event| f(&ready)).forget();
    } else {
        f(&document);
    }
}

/// Binds the controller to the page's toggle for the rest of the page.
pub fn bind_page(document: &Document) {
    match attach(document) {
        Ok(binding) => binding.forget(),
        Err(e) => {
            gloo::console::error!(&format!("Theme setup failed: {e}"));
        }
    }
}
