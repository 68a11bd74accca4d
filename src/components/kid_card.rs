//! Kid Card Component
//!
//! One card per visible record, with a fixed field order and a donate
//! button that carries the record itself for modal prefill.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Kid, MISSING_GLYPH};
use crate::sanitize::escape_html;

/// Display order of the labeled card fields
const CARD_FIELDS: &[(&str, fn(&Kid) -> Option<&str>)] = &[
    ("Initials", |k| k.initials.as_deref()),
    ("Interests", |k| k.interests.as_deref()),
    ("Age", |k| k.age.as_deref()),
    ("Needs", |k| k.needs.as_deref()),
    ("Wishes", |k| k.wishes.as_deref()),
    ("Notes", |k| k.notes.as_deref()),
];

/// One labeled field line, escaped, with the glyph for missing values
fn field_html(label: &str, value: Option<&str>) -> String {
    let value = value.filter(|s| !s.is_empty()).unwrap_or(MISSING_GLYPH);
    format!(
        "<p><strong>{}:</strong> {}</p>",
        escape_html(Some(label)),
        escape_html(Some(value))
    )
}

/// Card for a single record
#[component]
pub fn KidCard(kid: Kid) -> impl IntoView {
    let ctx = use_app_context();

    let fields_html: String = CARD_FIELDS
        .iter()
        .map(|(label, get)| field_html(label, get(&kid)))
        .collect();

    // The donate trigger keeps the record itself; card text is never
    // re-parsed at click time.
    let donate_kid = kid.clone();

    view! {
        <div class="kid-card">
            <div class="kid-card-fields" inner_html=fields_html></div>
            <div class="button-wrapper">
                <button
                    class="donate-btn"
                    type="button"
                    on:click=move |_| ctx.open_donate_for(&donate_kid)
                >
                    "Donate"
                </button>
            </div>
        </div>
    }
}
