//! Display ordering for sortable sections.
//!
//! Stored `order` values are ranks, not guaranteed unique or contiguous.
//! After a drag-and-drop move every item is renumbered by its position,
//! starting at [`FIRST_ORDER`].

use crate::error::CoreError;
use crate::types::SortOrder;

/// Rank given to the first item of a section.
pub const FIRST_ORDER: SortOrder = 1;

/// Rank for an item appended to a section that currently holds `len` items.
pub fn next_order(len: usize) -> SortOrder {
    FIRST_ORDER + len as SortOrder
}

/// Rank for the item at zero-based `index`.
pub fn order_for_index(index: usize) -> SortOrder {
    FIRST_ORDER + index as SortOrder
}

/// Move the element at `from` so it ends up at position `to`.
///
/// Both indices refer to positions in the list as it is before the move,
/// matching the semantics of a drag-and-drop source/destination pair.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), CoreError> {
    let len = items.len();
    if from >= len || to >= len {
        return Err(CoreError::Validation(format!(
            "Cannot move item from {from} to {to} in a list of {len}"
        )));
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}
