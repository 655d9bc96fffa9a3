//! Device-local "already liked" bookkeeping.
//!
//! The browser keeps one key per trip holding the JSON list of feedback ids
//! this device has liked. It is a soft anti-abuse heuristic, not a security
//! boundary: a visitor on another device can like again, and the server
//! never sees this state.

use std::collections::BTreeSet;
use std::collections::HashMap;

use uuid::Uuid;

/// The persistent key-value store backing the liked set (browser local
/// storage, a settings file, anything with get/set string semantics).
pub trait LikeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used by tests and as a session-scoped fallback.
#[derive(Debug, Default)]
pub struct MemoryLikeStore {
    entries: HashMap<String, String>,
}

impl LikeStore for MemoryLikeStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// The liked-feedback ids of one trip on this device.
///
/// Loaded once when the feedback view mounts; every successful like
/// overwrites the stored list as a whole (the storage layer never appends).
#[derive(Debug)]
pub struct LikedFeedback {
    trip_id: Uuid,
    ids: BTreeSet<Uuid>,
}

impl LikedFeedback {
    fn storage_key(trip_id: Uuid) -> String {
        format!("liked_feedbacks_{trip_id}")
    }

    /// Reads the stored list for `trip_id`. Unreadable or missing state
    /// degrades to an empty set; it is only bookkeeping.
    pub fn load(store: &impl LikeStore, trip_id: Uuid) -> Self {
        let ids = store
            .get(&Self::storage_key(trip_id))
            .and_then(|raw| serde_json::from_str::<Vec<Uuid>>(&raw).ok())
            .unwrap_or_default()
            .into_iter()
            .collect();
        Self { trip_id, ids }
    }

    pub fn contains(&self, feedback_id: Uuid) -> bool {
        self.ids.contains(&feedback_id)
    }

    /// Records a like. Returns `false` without touching the store when this
    /// device already liked the feedback — the caller shows the
    /// informational notice and must not send the increment.
    pub fn record(&mut self, store: &mut impl LikeStore, feedback_id: Uuid) -> bool {
        if !self.ids.insert(feedback_id) {
            return false;
        }
        let serialized = serde_json::to_string(&self.ids.iter().collect::<Vec<_>>())
            .expect("uuid list serializes");
        store.set(&Self::storage_key(self.trip_id), &serialized);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_like_from_the_same_device_is_a_no_op() {
        let mut store = MemoryLikeStore::default();
        let trip_id = Uuid::new_v4();
        let feedback_id = Uuid::new_v4();

        let mut liked = LikedFeedback::load(&store, trip_id);
        assert!(liked.record(&mut store, feedback_id));
        assert!(!liked.record(&mut store, feedback_id));

        // reload from storage: still a set with a single entry
        let reloaded = LikedFeedback::load(&store, trip_id);
        assert!(reloaded.contains(feedback_id));
        let raw = store.get(&format!("liked_feedbacks_{trip_id}")).unwrap();
        let stored: Vec<Uuid> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn liked_sets_are_scoped_per_trip() {
        let mut store = MemoryLikeStore::default();
        let feedback_id = Uuid::new_v4();

        let trip_a = Uuid::new_v4();
        let mut liked_a = LikedFeedback::load(&store, trip_a);
        liked_a.record(&mut store, feedback_id);

        let liked_b = LikedFeedback::load(&store, Uuid::new_v4());
        assert!(!liked_b.contains(feedback_id));
    }

    #[test]
    fn corrupted_storage_degrades_to_an_empty_set() {
        let mut store = MemoryLikeStore::default();
        let trip_id = Uuid::new_v4();
        store.set(&format!("liked_feedbacks_{trip_id}"), "not json");

        let liked = LikedFeedback::load(&store, trip_id);
        assert!(!liked.contains(Uuid::new_v4()));
    }
}
