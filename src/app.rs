//! Wishlist Kids Page App
//!
//! Root component: provides the store and modal dispatch, kicks off the
//! initial kids fetch, and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ContactForm, ContactModal, KidsGrid};
use crate::context::AppContext;
use crate::store::{store_set_kids, store_set_load_failed, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);
    let ctx = AppContext::new(store);
    provide_context(ctx);

    // Load kids on mount. No cancellation: a late result lands on
    // whatever state exists by then.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_kids().await {
                Ok(kids) => {
                    web_sys::console::log_1(
                        &format!("[API] Loaded {} visible kids", kids.len()).into(),
                    );
                    store_set_kids(&store, kids);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[API] Kids fetch failed: {}", err).into());
                    store_set_load_failed(&store, err.to_string());
                }
            }
        });
    });

    view! {
        <div class="page-layout">
            <header class="page-header">
                <h1>"Holiday Wishlist"</h1>
                <nav>
                    <button class="nav-link" type="button" on:click=move |_| ctx.open_contact()>
                        "Donate"
                    </button>
                    <button class="nav-link" type="button" on:click=move |_| ctx.open_contact()>
                        "Contact"
                    </button>
                </nav>
            </header>

            <main class="main-content">
                <KidsGrid/>

                <section class="bottom-contact">
                    <h2>"Get in touch"</h2>
                    <ContactForm/>
                </section>
            </main>

            <ContactModal/>
        </div>
    }
}
