//! Timestamp-based row id generation.
//!
//! Rows are created with an id chosen by the writer rather than the store:
//! the current UTC time in milliseconds. Two inserts landing in the same
//! millisecond would collide, so the generator bumps past the last id it
//! handed out.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::types::DbId;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Return a fresh id: the current epoch milliseconds, or one past the
/// previously issued id if the clock has not advanced.
pub fn next_id() -> DbId {
    next_id_at(chrono::Utc::now().timestamp_millis())
}

fn next_id_at(now_millis: i64) -> DbId {
    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now_millis.max(last + 1);
        match LAST_ID.compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing() {
        let a = next_id();
        let b = next_id();
        let c = next_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn stale_clock_still_advances() {
        let first = next_id_at(1_000);
        let second = next_id_at(1_000);
        assert!(second > first);
    }

    #[test]
    fn id_tracks_wall_clock() {
        let before = chrono::Utc::now().timestamp_millis();
        let id = next_id();
        assert!(id >= before);
    }
}
