//! In-memory capabilities for tests and hosts without a browser document.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::controller::{DocumentThemeSink, PreferenceStore, ThemeController, ToggleControl};
use crate::models::error::ThemeError;

pub type MemoryController = ThemeController<MemoryStore, MemoryDocument, MemoryToggle>;

/// Controller over empty in-memory capabilities.
pub fn memory_controller() -> MemoryController {
    ThemeController::new(
        MemoryStore::default(),
        MemoryDocument::default(),
        MemoryToggle::default(),
    )
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    /// Store pre-seeded with a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of successful `set` calls
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Removes every entry, as a user clearing site data would
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    attributes: RefCell<HashMap<String, String>>,
}

impl MemoryDocument {
    /// Overwrites an attribute from outside the controller, e.g. another script
    pub fn inject(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove(&self, name: &str) {
        self.attributes.borrow_mut().remove(name);
    }
}

impl DocumentThemeSink for MemoryDocument {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.inject(name, value);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryToggle {
    label: RefCell<String>,
}

impl MemoryToggle {
    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }
}

impl ToggleControl for MemoryToggle {
    fn set_label(&self, label: &str) {
        *self.label.borrow_mut() = label.to_string();
    }
}
