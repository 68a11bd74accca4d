//! Application Context
//!
//! Shared modal dispatch provided via Leptos Context API. Every trigger on
//! the page (generic contact, per-card donate, close controls) goes through
//! one of these typed entry points instead of sniffing DOM classes.

use leptos::prelude::*;

use crate::models::{DonatePrefill, Kid};
use crate::store::{store_close_modal, store_open_modal, AppStore, ModalState};

/// App-wide modal dispatch, cheap to copy into event closures
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Generic contact/donate trigger: open the modal with empty fields
    pub fn open_contact(&self) {
        store_open_modal(&self.store, ModalState::OpenGeneric);
    }

    /// Per-card donate trigger: open the modal with the reason prefilled
    /// from the record
    pub fn open_donate_for(&self, kid: &Kid) {
        store_open_modal(
            &self.store,
            ModalState::OpenPrefilled(DonatePrefill::for_kid(kid)),
        );
    }

    /// Close control, backdrop click, or Escape
    pub fn close_modal(&self) {
        store_close_modal(&self.store);
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
