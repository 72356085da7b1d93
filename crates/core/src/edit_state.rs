//! Per-item edit lifecycle for optimistic editors.
//!
//! Each item in an editor carries the last value known to be stored, an
//! optional draft being edited, and a [`SyncStatus`] describing whether the
//! latest local change has reached the store.
//!
//! ```text
//! Committed --save--> Pending --ok--> Committed
//!                        \---err--> Failed --save--> Pending
//! ```

use serde::Serialize;

/// Persistence state of an item's most recent local change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum SyncStatus {
    /// Local value matches what was last confirmed by the store.
    Committed,
    /// A write has been issued and not yet confirmed.
    Pending,
    /// The last write failed; the reason is kept for display.
    Failed(String),
}

impl SyncStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, SyncStatus::Failed(_))
    }
}

/// An item plus its draft and sync status.
#[derive(Debug, Clone)]
pub struct Tracked<T> {
    value: T,
    draft: Option<T>,
    status: SyncStatus,
}

impl<T: Clone> Tracked<T> {
    /// Wrap a value freshly loaded from the store.
    pub fn committed(value: T) -> Self {
        Self {
            value,
            draft: None,
            status: SyncStatus::Committed,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn draft(&self) -> Option<&T> {
        self.draft.as_ref()
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Open a draft seeded from the current value. An open draft is kept.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.value.clone());
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut T> {
        self.draft.as_mut()
    }

    /// Discard the draft.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Apply the draft locally and mark the write pending.
    ///
    /// Returns the value that was replaced, for [`Tracked::fail`], or `None`
    /// when no draft was open.
    pub fn stage(&mut self) -> Option<T> {
        let draft = self.draft.take()?;
        let previous = std::mem::replace(&mut self.value, draft);
        self.status = SyncStatus::Pending;
        Some(previous)
    }

    /// Mark the value as pending without touching drafts (reorders).
    pub fn mark_pending(&mut self) {
        self.status = SyncStatus::Pending;
    }

    pub fn confirm(&mut self) {
        self.status = SyncStatus::Committed;
    }

    /// Revert a staged change: restore `previous`, reopen the attempted
    /// value as a draft so the edit is not lost, and record the failure.
    pub fn fail(&mut self, previous: T, reason: impl Into<String>) {
        let attempted = std::mem::replace(&mut self.value, previous);
        self.draft = Some(attempted);
        self.status = SyncStatus::Failed(reason.into());
    }

    /// Record a failure without reverting the local value.
    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        self.status = SyncStatus::Failed(reason.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_cycle_commits() {
        let mut item = Tracked::committed("old".to_string());
        item.begin_edit();
        *item.draft_mut().unwrap() = "new".to_string();

        let previous = item.stage().unwrap();
        assert_eq!(previous, "old");
        assert_eq!(item.value(), "new");
        assert_eq!(item.status(), &SyncStatus::Pending);
        assert!(!item.is_editing());

        item.confirm();
        assert_eq!(item.status(), &SyncStatus::Committed);
    }

    #[test]
    fn failed_save_reverts_and_keeps_draft() {
        let mut item = Tracked::committed(1);
        item.begin_edit();
        *item.draft_mut().unwrap() = 2;
        let previous = item.stage().unwrap();

        item.fail(previous, "boom");
        assert_eq!(*item.value(), 1);
        assert_eq!(item.draft(), Some(&2));
        assert_eq!(item.status(), &SyncStatus::Failed("boom".into()));
    }

    #[test]
    fn cancel_discards_draft() {
        let mut item = Tracked::committed(1);
        item.begin_edit();
        *item.draft_mut().unwrap() = 5;
        item.cancel();
        assert!(!item.is_editing());
        assert_eq!(*item.value(), 1);
        assert!(item.stage().is_none());
    }

    #[test]
    fn begin_edit_keeps_open_draft() {
        let mut item = Tracked::committed(1);
        item.begin_edit();
        *item.draft_mut().unwrap() = 7;
        item.begin_edit();
        assert_eq!(item.draft(), Some(&7));
    }

    #[test]
    fn status_serializes_with_reason() {
        let json = serde_json::to_value(SyncStatus::Failed("timeout".into())).unwrap();
        assert_eq!(json["state"], "failed");
        assert_eq!(json["reason"], "timeout");
        let json = serde_json::to_value(SyncStatus::Committed).unwrap();
        assert_eq!(json["state"], "committed");
    }
}
