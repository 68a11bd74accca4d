//! UI Components

mod contact_form;
mod contact_modal;
mod kid_card;
mod kids_grid;

pub use contact_form::ContactForm;
pub use contact_modal::ContactModal;
pub use kid_card::KidCard;
pub use kids_grid::KidsGrid;
