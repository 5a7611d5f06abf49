use log::warn;

/// localStorage key holding the JSON-encoded array of favorited video ids.
pub const FAVORITES_KEY: &str = "video_favorites";

/// Minimal persistence seam for the favorites record so the backing store
/// (browser `localStorage`, an in-memory map in tests) can be swapped
/// without touching call sites.
///
/// Contract: a single logical writer. The browser store is shared by every
/// tab on the same origin and writes are whole-value, so two tabs mutating
/// favorites at once race last-write-wins; implementations are not expected
/// to mitigate that.
pub trait KeyValueStore {
    /// Returns the stored value, `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn clear(&self, key: &str) -> Result<(), String>;
}

/// Outcome of reading the favorites record. `Degraded` means the backing
/// store was unreadable or held something other than a JSON string array,
/// and the store fell back to an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesRead {
    Ok(Vec<String>),
    Degraded(Vec<String>),
}

impl FavoritesRead {
    pub fn ids(&self) -> &[String] {
        match self {
            FavoritesRead::Ok(ids) | FavoritesRead::Degraded(ids) => ids,
        }
    }

    pub fn into_ids(self) -> Vec<String> {
        match self {
            FavoritesRead::Ok(ids) | FavoritesRead::Degraded(ids) => ids,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, FavoritesRead::Degraded(_))
    }
}

/// Outcome of a favorites mutation. `Failed` means the write was dropped
/// and the caller's in-memory view is now ahead of storage; the change will
/// not survive a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Persisted,
    Failed,
}

impl WriteOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, WriteOutcome::Persisted)
    }
}

/// Durable membership tracking for favorited video ids, independent of any
/// remote account. Reads fail closed to an empty list and writes fail
/// silently (logged, never raised), so no operation here can take a page
/// down with it.
pub struct FavoritesStore<S> {
    store: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the full favorites sequence. Missing record means an empty,
    /// healthy list; an unreadable store or a corrupt record degrades to
    /// empty and logs the condition.
    pub fn get_all(&self) -> FavoritesRead {
        match self.store.get(FAVORITES_KEY) {
            Ok(None) => FavoritesRead::Ok(Vec::new()),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => FavoritesRead::Ok(ids),
                Err(e) => {
                    warn!("favorites record is not a JSON string array, treating as empty: {e}");
                    FavoritesRead::Degraded(Vec::new())
                }
            },
            Err(e) => {
                warn!("failed to read favorites record, treating as empty: {e}");
                FavoritesRead::Degraded(Vec::new())
            }
        }
    }

    /// Idempotently marks a video as favorite. The whole sequence is
    /// written back; already-present ids are left untouched.
    pub fn add(&self, id: &str) -> WriteOutcome {
        let mut ids = self.get_all().into_ids();
        if ids.iter().any(|stored| stored == id) {
            return WriteOutcome::Persisted;
        }
        ids.push(id.to_string());
        self.write_back(&ids)
    }

    /// Idempotently unmarks a video. Filtering an absent id still rewrites
    /// the record, which also heals a previously corrupt value.
    pub fn remove(&self, id: &str) -> WriteOutcome {
        let ids: Vec<String> = self
            .get_all()
            .into_ids()
            .into_iter()
            .filter(|stored| stored != id)
            .collect();
        self.write_back(&ids)
    }

    /// Membership test with the same fail-closed read as [`get_all`].
    ///
    /// [`get_all`]: FavoritesStore::get_all
    pub fn contains(&self, id: &str) -> bool {
        self.get_all().ids().iter().any(|stored| stored == id)
    }

    fn write_back(&self, ids: &[String]) -> WriteOutcome {
        let encoded = match serde_json::to_string(ids) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("failed to encode favorites record: {e}");
                return WriteOutcome::Failed;
            }
        };
        match self.store.set(FAVORITES_KEY, &encoded) {
            Ok(()) => WriteOutcome::Persisted,
            Err(e) => {
                warn!("failed to persist favorites, in-memory state is ahead of storage: {e}");
                WriteOutcome::Failed
            }
        }
    }
}

/// `KeyValueStore` over a plain map, for native hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing the favorites encoding. Lets tests
    /// plant corrupt records.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set(key, value)
    }

    fn clear(&self, key: &str) -> Result<(), String> {
        (**self).clear(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose writes (and optionally reads) always fail, standing in
    /// for a full or blocked localStorage.
    struct BrokenStore {
        fail_reads: bool,
    }

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, String> {
            if self.fail_reads {
                Err("access denied".to_string())
            } else {
                Ok(None)
            }
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("quota exceeded".to_string())
        }

        fn clear(&self, _key: &str) -> Result<(), String> {
            Err("access denied".to_string())
        }
    }

    fn sorted(mut ids: Vec<String>) -> Vec<String> {
        ids.sort();
        ids
    }

    #[test]
    fn missing_record_reads_as_empty_and_healthy() {
        let backing = MemoryStore::new();
        let store = FavoritesStore::new(&backing);
        let read = store.get_all();
        assert!(!read.is_degraded());
        assert!(read.ids().is_empty());
    }

    #[test]
    fn add_then_query_then_remove() {
        let backing = MemoryStore::new();
        let store = FavoritesStore::new(&backing);

        assert!(store.add("x").is_persisted());
        assert_eq!(store.get_all().ids(), ["x".to_string()]);
        assert!(store.contains("x"));

        assert!(store.remove("x").is_persisted());
        assert!(store.get_all().ids().is_empty());
        assert!(!store.contains("x"));
    }

    #[test]
    fn add_is_idempotent() {
        let backing = MemoryStore::new();
        let store = FavoritesStore::new(&backing);

        store.add("a");
        store.add("a");
        assert_eq!(store.get_all().ids(), ["a".to_string()]);
    }

    #[test]
    fn remove_is_idempotent() {
        let backing = MemoryStore::new();
        let store = FavoritesStore::new(&backing);

        store.add("a");
        store.remove("b");
        store.remove("b");
        assert_eq!(store.get_all().ids(), ["a".to_string()]);
    }

    #[test]
    fn add_then_remove_restores_previous_membership() {
        let backing = MemoryStore::new();
        let store = FavoritesStore::new(&backing);

        store.add("a");
        store.add("b");
        let before = sorted(store.get_all().into_ids());

        store.add("c");
        store.remove("c");
        assert_eq!(sorted(store.get_all().into_ids()), before);
    }

    #[test]
    fn membership_survives_a_fresh_store_over_the_same_backing() {
        let backing = MemoryStore::new();

        {
            let store = FavoritesStore::new(&backing);
            store.add("a");
            store.add("b");
            store.add("c");
        }

        let reloaded = FavoritesStore::new(&backing);
        assert_eq!(
            sorted(reloaded.get_all().into_ids()),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn non_json_record_fails_closed() {
        let backing = MemoryStore::new();
        backing.seed(FAVORITES_KEY, "definitely not json");

        let store = FavoritesStore::new(&backing);
        let read = store.get_all();
        assert!(read.is_degraded());
        assert!(read.ids().is_empty());
        assert!(!store.contains("a"));
    }

    #[test]
    fn non_array_json_record_fails_closed() {
        let backing = MemoryStore::new();
        backing.seed(FAVORITES_KEY, r#"{"a":1}"#);

        let store = FavoritesStore::new(&backing);
        assert!(store.get_all().is_degraded());
    }

    #[test]
    fn array_of_non_strings_fails_closed() {
        let backing = MemoryStore::new();
        backing.seed(FAVORITES_KEY, "[1,2,3]");

        let store = FavoritesStore::new(&backing);
        assert!(store.get_all().is_degraded());
        assert!(store.get_all().ids().is_empty());
    }

    #[test]
    fn add_over_a_corrupt_record_replaces_it() {
        let backing = MemoryStore::new();
        backing.seed(FAVORITES_KEY, "garbage");

        let store = FavoritesStore::new(&backing);
        assert!(store.add("x").is_persisted());

        let read = store.get_all();
        assert!(!read.is_degraded());
        assert_eq!(read.ids(), ["x".to_string()]);
    }

    #[test]
    fn unreadable_store_degrades_instead_of_raising() {
        let store = FavoritesStore::new(BrokenStore { fail_reads: true });
        let read = store.get_all();
        assert!(read.is_degraded());
        assert!(read.ids().is_empty());
        assert!(!store.contains("x"));
    }

    #[test]
    fn unwritable_store_reports_dropped_writes() {
        let store = FavoritesStore::new(BrokenStore { fail_reads: false });
        assert_eq!(store.add("x"), WriteOutcome::Failed);
        assert_eq!(store.remove("x"), WriteOutcome::Failed);
    }

    #[test]
    fn clear_removes_the_record() {
        let backing = MemoryStore::new();
        let store = FavoritesStore::new(&backing);

        store.add("a");
        backing.clear(FAVORITES_KEY).unwrap();
        assert!(store.get_all().ids().is_empty());
    }
}
