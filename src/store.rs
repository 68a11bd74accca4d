//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DonatePrefill, Kid};

/// Where the initial kids fetch currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// The contact modal is either fully closed or fully open; prefill only
/// exists for the lifetime of one open state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    OpenGeneric,
    OpenPrefilled(DonatePrefill),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn prefill(&self) -> Option<&DonatePrefill> {
        match self {
            ModalState::OpenPrefilled(prefill) => Some(prefill),
            _ => None,
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Visible records from the last successful fetch
    pub kids: Vec<Kid>,
    /// Fetch progress for the grid placeholders
    pub load_state: LoadState,
    /// Grid collapse flag (first row visible when true)
    pub collapsed: bool,
    /// Contact modal state; at most one modal, last open wins
    pub modal: ModalState,
    /// Bumped on every modal open so the form re-applies prefill/reset
    pub modal_epoch: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            kids: Vec::new(),
            load_state: LoadState::Loading,
            collapsed: true,
            modal: ModalState::Closed,
            modal_epoch: 0,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the kids list after a successful fetch; the grid always comes
/// back collapsed.
pub fn store_set_kids(store: &AppStore, kids: Vec<Kid>) {
    store.kids().set(kids);
    store.load_state().set(LoadState::Loaded);
    store.collapsed().set(true);
}

/// Record a fetch failure for the grid error message
pub fn store_set_load_failed(store: &AppStore, detail: String) {
    store.kids().set(Vec::new());
    store.load_state().set(LoadState::Failed(detail));
}

/// Flip the grid collapse flag
pub fn store_toggle_collapsed(store: &AppStore) {
    store.collapsed().update(|c| *c = !*c);
}

/// Open the modal (generic or prefilled). Replaces any already-open state.
pub fn store_open_modal(store: &AppStore, state: ModalState) {
    store.modal().set(state);
    store.modal_epoch().update(|v| *v += 1);
}

/// Close the modal and drop any prefill
pub fn store_close_modal(store: &AppStore) {
    store.modal().set(ModalState::Closed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert!(state.collapsed);
        assert_eq!(state.load_state, LoadState::Loading);
        assert_eq!(state.modal, ModalState::Closed);
        assert!(state.kids.is_empty());
    }

    #[test]
    fn test_toggle_flips_and_two_toggles_restore() {
        let store = Store::new(AppState::default());
        assert!(store.collapsed().get());
        store_toggle_collapsed(&store);
        assert!(!store.collapsed().get());
        store_toggle_collapsed(&store);
        assert!(store.collapsed().get());
    }

    #[test]
    fn test_open_replaces_open_and_close_clears() {
        let store = Store::new(AppState::default());
        store_open_modal(&store, ModalState::OpenGeneric);
        assert!(store.modal().get().is_open());

        // a second open while open replaces the state (last open wins)
        let prefill = DonatePrefill {
            reason: Some("hello".to_string()),
            ..Default::default()
        };
        store_open_modal(&store, ModalState::OpenPrefilled(prefill.clone()));
        let modal = store.modal().get();
        assert_eq!(modal.prefill(), Some(&prefill));
        assert_eq!(store.modal_epoch().get(), 2);

        store_close_modal(&store);
        assert_eq!(store.modal().get(), ModalState::Closed);
    }

    #[test]
    fn test_set_kids_recollapses_grid() {
        let store = Store::new(AppState::default());
        store_toggle_collapsed(&store);
        assert!(!store.collapsed().get());

        store_set_kids(&store, vec![Kid::default()]);
        assert!(store.collapsed().get());
        assert_eq!(store.load_state().get(), LoadState::Loaded);
        assert_eq!(store.kids().get().len(), 1);
    }

    #[test]
    fn test_modal_state_queries() {
        assert!(!ModalState::Closed.is_open());
        assert!(ModalState::OpenGeneric.is_open());
        assert!(ModalState::OpenGeneric.prefill().is_none());

        let prefill = DonatePrefill {
            reason: Some("hello".to_string()),
            ..Default::default()
        };
        let state = ModalState::OpenPrefilled(prefill.clone());
        assert!(state.is_open());
        assert_eq!(state.prefill(), Some(&prefill));
    }
}
