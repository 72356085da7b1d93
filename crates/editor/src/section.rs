//! Optimistic editor for an ordered section.

use folio_core::edit_state::Tracked;
use folio_core::ids::next_id;
use folio_core::ordering::{move_item, next_order, order_for_index};
use folio_core::types::DbId;
use serde::Serialize;

use crate::store::{Record, SectionStore};
use crate::EditorError;

/// Result of persisting a reorder: which items took their new order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReorderOutcome {
    pub persisted: Vec<DbId>,
    pub failed: Vec<DbId>,
}

impl ReorderOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Local copy of one section plus the store it is persisted to.
///
/// Mutations are applied locally first. When the remote write fails the
/// affected item is left with a `Failed` status, and where a previous value
/// exists it is restored.
pub struct SectionEditor<S: SectionStore> {
    store: S,
    items: Vec<Tracked<S::Item>>,
}

impl<S: SectionStore> SectionEditor<S> {
    /// Fetch the full section from `store`.
    pub async fn mount(store: S) -> Result<Self, EditorError> {
        let mut editor = Self {
            store,
            items: Vec::new(),
        };
        editor.reload().await?;
        Ok(editor)
    }

    /// Discard local state, including drafts and failure marks, and refetch.
    pub async fn reload(&mut self) -> Result<(), EditorError> {
        let rows = self.store.list().await?;
        self.items = rows.into_iter().map(Tracked::committed).collect();
        Ok(())
    }

    pub fn items(&self) -> &[Tracked<S::Item>] {
        &self.items
    }

    /// Committed values in display order.
    pub fn values(&self) -> impl Iterator<Item = &S::Item> {
        self.items.iter().map(Tracked::value)
    }

    pub fn get(&self, id: DbId) -> Option<&Tracked<S::Item>> {
        self.items.iter().find(|t| t.value().id() == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn position(&self, id: DbId) -> Result<usize, EditorError> {
        self.items
            .iter()
            .position(|t| t.value().id() == id)
            .ok_or(EditorError::UnknownItem(id))
    }

    /// Open a draft for `id`, seeded from its current value.
    pub fn begin_edit(&mut self, id: DbId) -> Result<(), EditorError> {
        let idx = self.position(id)?;
        self.items[idx].begin_edit();
        Ok(())
    }

    /// Change the open draft of `id`.
    pub fn edit_draft(
        &mut self,
        id: DbId,
        edit: impl FnOnce(&mut S::Item),
    ) -> Result<(), EditorError> {
        let idx = self.position(id)?;
        let draft = self.items[idx]
            .draft_mut()
            .ok_or(EditorError::NotEditing(id))?;
        edit(draft);
        Ok(())
    }

    pub fn cancel(&mut self, id: DbId) -> Result<(), EditorError> {
        let idx = self.position(id)?;
        self.items[idx].cancel();
        Ok(())
    }

    /// Commit the draft of `id` locally, then persist its content fields.
    ///
    /// On failure the previous value comes back and the draft stays open for
    /// another attempt.
    pub async fn save(&mut self, id: DbId) -> Result<(), EditorError> {
        let idx = self.position(id)?;
        let tracked = &mut self.items[idx];
        let previous = tracked.stage().ok_or(EditorError::NotEditing(id))?;

        let result = self.store.save_content(tracked.value()).await;
        match result {
            Ok(()) => {
                tracked.confirm();
                tracing::debug!(item_id = id, "Item saved");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(item_id = id, error = %e, "Item save failed, reverting");
                tracked.fail(previous, e.to_string());
                Err(e.into())
            }
        }
    }

    /// Remove `id` locally, then remotely. A failed delete puts the item
    /// back at its position.
    pub async fn delete(&mut self, id: DbId) -> Result<(), EditorError> {
        let idx = self.position(id)?;
        let mut removed = self.items.remove(idx);

        if let Err(e) = self.store.delete(id).await {
            tracing::warn!(item_id = id, error = %e, "Item delete failed, restoring");
            removed.mark_failed(e.to_string());
            self.items.insert(idx, removed);
            return Err(e.into());
        }
        tracing::debug!(item_id = id, "Item deleted");
        Ok(())
    }

    /// Move the item at `from` to `to`, renumber every item by its 1-based
    /// position and persist each new order with its own update.
    ///
    /// The updates run one after another and are not rolled back; items
    /// whose update failed are marked and listed in the outcome.
    pub async fn reorder(&mut self, from: usize, to: usize) -> Result<ReorderOutcome, EditorError> {
        let len = self.items.len();
        move_item(&mut self.items, from, to)
            .map_err(|_| EditorError::IndexOutOfRange { from, to, len })?;

        let mut outcome = ReorderOutcome::default();
        for (index, tracked) in self.items.iter_mut().enumerate() {
            let order = order_for_index(index);
            let id = tracked.value().id();
            tracked.value_mut().set_order(order);
            if let Some(draft) = tracked.draft_mut() {
                draft.set_order(order);
            }
            tracked.mark_pending();

            let result = self.store.save_order(id, order).await;
            match result {
                Ok(()) => {
                    tracked.confirm();
                    outcome.persisted.push(id);
                }
                Err(e) => {
                    tracing::warn!(item_id = id, order, error = %e, "Order update failed");
                    tracked.mark_failed(e.to_string());
                    outcome.failed.push(id);
                }
            }
        }

        tracing::info!(
            from,
            to,
            persisted = outcome.persisted.len(),
            failed = outcome.failed.len(),
            "Section reordered",
        );
        Ok(outcome)
    }

    /// Insert a placeholder item after the last one. It is only added
    /// locally once the store accepted it.
    pub async fn add_new(&mut self) -> Result<&S::Item, EditorError> {
        let item = <S::Item as Record>::placeholder(next_id(), next_order(self.items.len()));
        self.store.insert(&item).await?;
        tracing::debug!(item_id = item.id(), "Placeholder item added");
        self.items.push(Tracked::committed(item));
        let last = self.items.len() - 1;
        Ok(self.items[last].value())
    }
}
