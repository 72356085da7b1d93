//! Domain building blocks shared by the Folio crates: ids, ordering, paging,
//! the admin gate, the contact-form cooldown and edit-state tracking.

pub mod admin;
pub mod commission;
pub mod cooldown;
pub mod edit_state;
pub mod error;
pub mod ids;
pub mod ordering;
pub mod pagination;
pub mod types;
