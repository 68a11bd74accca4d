//! Contact Modal Component
//!
//! Single page-wide modal hosting the contact form. Closed by the close
//! button, a click on the backdrop, or Escape. At most one modal exists;
//! an open request while open replaces the current state.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ContactForm;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Delay before focusing the first field, so the opening transition has
/// rendered (ms).
const FOCUS_DELAY_MS: u32 = 60;

/// Contact/donate modal
#[component]
pub fn ContactModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let first_field: NodeRef<Input> = NodeRef::new();

    // Escape closes the modal from anywhere on the page
    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.close_modal();
        }
    });
    on_cleanup(move || keydown.remove());

    // Focus the first field shortly after each open
    Effect::new(move |_| {
        let _ = store.modal_epoch().get();
        if !store.modal().get().is_open() {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(FOCUS_DELAY_MS).await;
            if let Some(input) = first_field.get_untracked() {
                let _ = input.focus();
            }
        });
    });

    view! {
        <Show when=move || store.modal().get().is_open()>
            // clicks on the backdrop close; the content box swallows its own
            <div class="modal-overlay show" on:click=move |_| ctx.close_modal()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button
                        class="modal-close"
                        type="button"
                        on:click=move |_| ctx.close_modal()
                    >
                        "×"
                    </button>
                    <h2>"Contact / Donate"</h2>
                    <ContactForm in_modal=true first_field=first_field/>
                </div>
            </div>
        </Show>
    }
}
