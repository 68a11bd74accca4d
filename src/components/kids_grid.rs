//! Kids Grid Component
//!
//! Collapsible card grid with loading, error, and empty placeholders, plus
//! the single show-all/show-less toggle.

use leptos::prelude::*;

use crate::components::KidCard;
use crate::models::Kid;
use crate::store::{store_toggle_collapsed, use_app_store, AppStateStoreFields, LoadState};

/// Toggle button label for the current collapse flag
fn toggle_label(collapsed: bool) -> &'static str {
    if collapsed {
        "Show All"
    } else {
        "Show Less"
    }
}

/// Grid container class for the current collapse flag
fn grid_class(collapsed: bool) -> &'static str {
    if collapsed {
        "kids-grid collapsed"
    } else {
        "kids-grid"
    }
}

/// What the grid body shows for a given load state and visible set
#[derive(Debug, Clone, PartialEq)]
enum GridContent {
    Loading,
    LoadFailed,
    Empty,
    Cards(Vec<Kid>),
}

fn grid_content(load_state: LoadState, kids: Vec<Kid>) -> GridContent {
    match load_state {
        LoadState::Loading => GridContent::Loading,
        LoadState::Failed(_) => GridContent::LoadFailed,
        LoadState::Loaded if kids.is_empty() => GridContent::Empty,
        LoadState::Loaded => GridContent::Cards(kids),
    }
}

/// Card grid for the visible set
#[component]
pub fn KidsGrid() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="kids-section">
            <div class=move || grid_class(store.collapsed().get())>
                {move || match grid_content(store.load_state().get(), store.kids().get()) {
                    GridContent::Loading => {
                        view! { <p class="grid-note">"Loading..."</p> }.into_any()
                    }
                    GridContent::LoadFailed => {
                        view! { <p class="grid-note">"Could not load the kids list."</p> }
                            .into_any()
                    }
                    GridContent::Empty => {
                        view! { <p class="grid-note">"No entries are live right now."</p> }
                            .into_any()
                    }
                    GridContent::Cards(kids) => {
                        // records have no identity beyond their position
                        view! {
                            <For
                                each=move || kids.clone().into_iter().enumerate()
                                key=|(idx, _)| *idx
                                children=move |(_, kid)| view! { <KidCard kid=kid/> }
                            />
                        }
                        .into_any()
                    }
                }}
            </div>
            <button
                class="toggle-kids"
                type="button"
                on:click=move |_| store_toggle_collapsed(&store)
            >
                {move || toggle_label(store.collapsed().get())}
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{visible_kids, KidsPayload};

    #[test]
    fn test_toggle_label_mapping() {
        assert_eq!(toggle_label(true), "Show All");
        assert_eq!(toggle_label(false), "Show Less");
        assert_eq!(grid_class(true), "kids-grid collapsed");
        assert_eq!(grid_class(false), "kids-grid");
    }

    #[test]
    fn test_double_toggle_restores_label() {
        // initial state is collapsed
        let mut collapsed = true;
        assert_eq!(toggle_label(collapsed), "Show All");
        collapsed = !collapsed;
        assert_eq!(toggle_label(collapsed), "Show Less");
        collapsed = !collapsed;
        assert!(collapsed);
        assert_eq!(toggle_label(collapsed), "Show All");
    }

    fn kid(initials: &str) -> Kid {
        Kid {
            initials: Some(initials.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_grid_content_branches() {
        assert_eq!(
            grid_content(LoadState::Loading, Vec::new()),
            GridContent::Loading
        );
        assert_eq!(
            grid_content(LoadState::Failed("network error: 500".to_string()), Vec::new()),
            GridContent::LoadFailed
        );
        assert_eq!(grid_content(LoadState::Loaded, Vec::new()), GridContent::Empty);
        assert_eq!(
            grid_content(LoadState::Loaded, vec![kid("AB")]),
            GridContent::Cards(vec![kid("AB")])
        );
    }

    #[test]
    fn test_all_inactive_payload_shows_placeholder() {
        let payload: KidsPayload =
            serde_json::from_str(r#"{"kids":[{"Initials":"X","status":"inactive"}]}"#).unwrap();
        let visible = visible_kids(payload.into_kids());
        assert_eq!(grid_content(LoadState::Loaded, visible), GridContent::Empty);
    }
}
