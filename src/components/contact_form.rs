//! Contact Form Component
//!
//! Controlled contact/donate form used both inside the modal and as the
//! standalone bottom form. Serializes trimmed fields to the relay and
//! reports the outcome on an inline status line.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SubmitOutcome};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// How long a successful modal submission stays visible before the modal
/// closes (ms).
const CLOSE_DELAY_MS: u32 = 1400;

/// Contact form posting to the relay endpoint.
///
/// With `in_modal` set, the form re-applies the store's modal prefill on
/// every open and closes the modal shortly after a successful submission.
#[component]
pub fn ContactForm(
    #[prop(optional)] in_modal: bool,
    #[prop(optional)] first_field: NodeRef<Input>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (reason, set_reason) = signal(String::new());
    let (status, set_status) = signal(String::new());

    if in_modal {
        // Re-run on every open: reset fields, clear status, apply prefill.
        // Also covers an open request arriving while already open.
        Effect::new(move |_| {
            let _ = store.modal_epoch().get();
            let modal = store.modal().get();
            if !modal.is_open() {
                return;
            }
            let prefill = modal.prefill().cloned().unwrap_or_default();
            set_status.set(String::new());
            set_name.set(prefill.name.unwrap_or_default());
            set_phone.set(prefill.phone.unwrap_or_default());
            set_email.set(prefill.email.unwrap_or_default());
            set_reason.set(prefill.reason.unwrap_or_default());
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_status.set("Submitting...".to_string());

        let payload = vec![
            ("name", name.get()),
            ("phone", phone.get()),
            ("email", email.get()),
            ("reason", reason.get()),
        ];

        spawn_local(async move {
            match api::submit_contact_form(&payload).await {
                Ok(SubmitOutcome::Accepted) => {
                    let confirmation = if in_modal {
                        "Thank you! Submission received."
                    } else {
                        "Thank you — submission received."
                    };
                    set_status.set(confirmation.to_string());
                    set_name.set(String::new());
                    set_phone.set(String::new());
                    set_email.set(String::new());
                    set_reason.set(String::new());
                    if in_modal {
                        // leave the confirmation readable before closing
                        TimeoutFuture::new(CLOSE_DELAY_MS).await;
                        ctx.close_modal();
                    }
                }
                Ok(SubmitOutcome::Rejected(server_reason)) => {
                    web_sys::console::error_1(
                        &format!("[FORM] Relay rejected submission: {:?}", server_reason).into(),
                    );
                    // fields stay populated for correction
                    set_status.set(match server_reason {
                        Some(msg) => format!("Submission failed: {}", msg),
                        None => "Submission failed. Please try again later.".to_string(),
                    });
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[FORM] Submit error: {}", err).into());
                    set_status.set("An error occurred. Please try again later.".to_string());
                }
            }
        });
    };

    let status_class = if in_modal {
        "contact-status"
    } else {
        "bottom-form-status"
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <label>
                "Name"
                <input
                    type="text"
                    name="name"
                    node_ref=first_field
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Phone"
                <input
                    type="tel"
                    name="phone"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    name="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Reason"
                <textarea
                    name="reason"
                    prop:value=move || reason.get()
                    on:input=move |ev| set_reason.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button type="submit">"Send"</button>
            <p class=status_class>{move || status.get()}</p>
        </form>
    }
}
