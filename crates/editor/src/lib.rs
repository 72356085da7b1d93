//! Admin-side list editors.
//!
//! Each editor holds a local copy of one section (prices, gallery, terms of
//! service, banner), applies changes to it optimistically and then persists
//! them through a [`store::SectionStore`]. Every item carries a
//! [`folio_core::edit_state::SyncStatus`] so callers can tell committed,
//! in-flight and failed writes apart.

pub mod banner;
pub mod section;
pub mod store;

pub use banner::BannerEditor;
pub use section::{ReorderOutcome, SectionEditor};
pub use store::{GalleryStore, PriceStore, Record, SectionStore, TosStore};

use folio_core::types::DbId;
use folio_db::DbError;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("No item with id {0} in this section")]
    UnknownItem(DbId),

    #[error("Item {0} has no open draft")]
    NotEditing(DbId),

    #[error("Cannot move item {from} to {to} in a list of {len}")]
    IndexOutOfRange { from: usize, to: usize, len: usize },

    #[error(transparent)]
    Store(#[from] DbError),
}
