//! The hunt store: every open hunt, kept in sync with a backend.

pub mod backend;

pub use backend::{HuntBackend, JsonFileBackend, MemoryBackend};

use tracing::{debug, info, warn};

use crate::config::HuntConfig;
use crate::error::{HuntError, HuntResult};
use crate::hunt::{Hunt, HuntMap, HuntSummary};

/// Owns the mapping of monster names to hunts.
///
/// The mapping is loaded once when the store is opened and written back in
/// full after every mutation. Unreadable or corrupt stored data is treated as
/// an empty mapping so the game always starts.
#[derive(Debug)]
pub struct HuntStore {
    backend: Box<dyn HuntBackend>,
    hunts: HuntMap,
}

impl HuntStore {
    /// Open a store over `backend`, loading whatever it holds.
    pub fn open(backend: impl HuntBackend + 'static) -> Self {
        let backend: Box<dyn HuntBackend> = Box::new(backend);
        let hunts = load_or_empty(backend.as_ref());
        Self { backend, hunts }
    }

    /// Open the JSON file named by the config.
    pub fn from_config(config: &HuntConfig) -> Self {
        Self::open(JsonFileBackend::new(&config.store_path))
    }

    /// An empty store that never touches disk.
    pub fn in_memory() -> Self {
        Self::open(MemoryBackend::new())
    }

    /// Re-read the backend, replacing the in-memory mapping.
    pub fn load(&mut self) -> &HuntMap {
        self.hunts = load_or_empty(self.backend.as_ref());
        &self.hunts
    }

    /// Write the whole mapping to the backend.
    pub fn save(&mut self) -> HuntResult<()> {
        self.backend.save(&self.hunts)
    }

    /// All open hunts.
    pub fn hunts(&self) -> &HuntMap {
        &self.hunts
    }

    /// Look up a hunt by name.
    pub fn get(&self, name: &str) -> Option<&Hunt> {
        self.hunts.get(name)
    }

    /// Whether a hunt with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.hunts.contains_key(name)
    }

    /// Number of open hunts.
    pub fn len(&self) -> usize {
        self.hunts.len()
    }

    /// Whether there are no open hunts.
    pub fn is_empty(&self) -> bool {
        self.hunts.is_empty()
    }

    /// Summaries of all open hunts in creation order.
    pub fn list_hunts(&self) -> Vec<HuntSummary> {
        self.hunts
            .iter()
            .map(|(name, hunt)| HuntSummary::new(name, hunt))
            .collect()
    }

    /// Start a hunt with no marks and persist it.
    ///
    /// An existing hunt with the same name is replaced and keeps its place
    /// in the listing.
    pub fn create_hunt(&mut self, name: &str, total_marks: u32) -> HuntResult<Hunt> {
        if name.trim().is_empty() {
            return Err(HuntError::EmptyName);
        }
        if total_marks == 0 {
            return Err(HuntError::InvalidTotalMarks(total_marks));
        }

        let hunt = Hunt::new(total_marks);
        let mut next = self.hunts.clone();
        if let Some(previous) = next.insert(name.to_string(), hunt) {
            info!(
                name,
                marks_collected = previous.marks_collected(),
                total_marks = previous.total_marks(),
                "replaced existing hunt"
            );
        }
        self.commit(next)?;
        debug!(name, total_marks, "hunt created");
        Ok(hunt)
    }

    /// Delete a hunt and persist the change.
    pub fn remove_hunt(&mut self, name: &str) -> HuntResult<Hunt> {
        let mut next = self.hunts.clone();
        let hunt = next
            .shift_remove(name)
            .ok_or_else(|| HuntError::HuntNotFound(name.to_string()))?;
        self.commit(next)?;
        debug!(name, "hunt removed");
        Ok(hunt)
    }

    pub(crate) fn add_marks(&mut self, name: &str, marks: u32) -> HuntResult<Hunt> {
        let mut next = self.hunts.clone();
        let hunt = next
            .get_mut(name)
            .ok_or_else(|| HuntError::HuntNotFound(name.to_string()))?;
        hunt.add_marks(marks);
        let updated = *hunt;
        self.commit(next)?;
        Ok(updated)
    }

    /// Persist `next`, and only then make it the in-memory mapping.
    fn commit(&mut self, next: HuntMap) -> HuntResult<()> {
        self.backend.save(&next)?;
        self.hunts = next;
        Ok(())
    }
}

fn load_or_empty(backend: &dyn HuntBackend) -> HuntMap {
    match backend.load() {
        Ok(hunts) => hunts,
        Err(e) => {
            warn!(
                location = %backend.location(),
                error = %e,
                "unreadable hunt data, starting empty"
            );
            HuntMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn create_and_list() {
        let mut store = HuntStore::in_memory();
        store.create_hunt("Dragon", 3).unwrap();
        store.create_hunt("Wolf", 1).unwrap();
        let names: Vec<_> = store.list_hunts().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["Dragon", "Wolf"]);
    }

    #[test]
    fn create_persists() {
        let backend = MemoryBackend::new();
        let mut store = HuntStore::open(backend.clone());
        store.create_hunt("Dragon", 3).unwrap();
        assert_eq!(backend.save_count(), 1);
        assert_eq!(backend.saved().get("Dragon").map(Hunt::total_marks), Some(3));
    }

    #[test]
    fn create_rejects_zero_marks() {
        let mut store = HuntStore::in_memory();
        assert!(matches!(
            store.create_hunt("Dragon", 0),
            Err(HuntError::InvalidTotalMarks(0))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn create_rejects_blank_name() {
        let mut store = HuntStore::in_memory();
        assert!(matches!(store.create_hunt("  ", 3), Err(HuntError::EmptyName)));
    }

    #[test]
    fn duplicate_name_overwrites_in_place() {
        let mut store = HuntStore::in_memory();
        store.create_hunt("Dragon", 3).unwrap();
        store.create_hunt("Wolf", 2).unwrap();
        store.add_marks("Dragon", 2).unwrap();
        store.create_hunt("Dragon", 5).unwrap();

        let list = store.list_hunts();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Dragon");
        assert_eq!(list[0].marks_collected, 0);
        assert_eq!(list[0].total_marks, 5);
    }

    #[test]
    fn remove_persists_and_keeps_order() {
        let backend = MemoryBackend::new();
        let mut store = HuntStore::open(backend.clone());
        store.create_hunt("A", 1).unwrap();
        store.create_hunt("B", 1).unwrap();
        store.create_hunt("C", 1).unwrap();
        store.remove_hunt("B").unwrap();

        let names: Vec<_> = backend.saved().keys().cloned().collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn remove_unknown_is_not_found() {
        let mut store = HuntStore::in_memory();
        assert!(matches!(
            store.remove_hunt("Ghost"),
            Err(HuntError::HuntNotFound(name)) if name == "Ghost"
        ));
    }

    #[test]
    fn add_marks_unknown_is_not_found() {
        let mut store = HuntStore::in_memory();
        assert!(matches!(
            store.add_marks("Ghost", 1),
            Err(HuntError::HuntNotFound(_))
        ));
    }

    #[derive(Debug)]
    struct ReadOnlyBackend(HuntMap);

    impl HuntBackend for ReadOnlyBackend {
        fn load(&self) -> HuntResult<HuntMap> {
            Ok(self.0.clone())
        }

        fn save(&mut self, _hunts: &HuntMap) -> HuntResult<()> {
            Err(HuntError::Io {
                path: "read-only".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        fn location(&self) -> String {
            "read-only".to_string()
        }
    }

    fn seeded() -> HuntMap {
        let mut seed = HuntStore::in_memory();
        seed.create_hunt("Dragon", 3).unwrap();
        seed.create_hunt("Wolf", 2).unwrap();
        seed.hunts().clone()
    }

    #[test]
    fn opens_prepopulated_backend() {
        let store = HuntStore::open(MemoryBackend::with_hunts(seeded()));
        let names: Vec<_> = store.list_hunts().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["Dragon", "Wolf"]);
    }

    #[test]
    fn failed_save_leaves_memory_untouched() {
        let mut store = HuntStore::open(ReadOnlyBackend(seeded()));

        assert!(matches!(store.create_hunt("Imp", 1), Err(HuntError::Io { .. })));
        assert!(!store.contains("Imp"));

        assert!(matches!(store.create_hunt("Dragon", 9), Err(HuntError::Io { .. })));
        assert_eq!(store.get("Dragon").map(Hunt::total_marks), Some(3));

        assert!(matches!(store.add_marks("Wolf", 1), Err(HuntError::Io { .. })));
        assert_eq!(store.get("Wolf").map(Hunt::marks_collected), Some(0));

        assert!(matches!(store.remove_hunt("Wolf"), Err(HuntError::Io { .. })));
        assert!(store.contains("Wolf"));
        assert_eq!(store.hunts(), &seeded());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monster_hunts.json");
        fs::write(&path, "{\"Dragon\": {\"marks_collected\": \"lots\"}").unwrap();

        let store = HuntStore::from_config(&HuntConfig::default().with_store_path(&path));
        assert!(store.is_empty());
        assert!(store.list_hunts().is_empty());
    }

    #[test]
    fn unreadable_path_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file.
        let store = HuntStore::open(JsonFileBackend::new(dir.path()));
        assert!(store.is_empty());
    }

    #[test]
    fn reopen_sees_saved_hunts() {
        let dir = tempfile::tempdir().unwrap();
        let config = HuntConfig::default().with_store_path(dir.path().join("hunts.json"));

        let mut store = HuntStore::from_config(&config);
        store.create_hunt("Dragon", 3).unwrap();
        store.add_marks("Dragon", 2).unwrap();
        store.create_hunt("Wolf", 1).unwrap();

        let reopened = HuntStore::from_config(&config);
        assert_eq!(reopened.list_hunts(), store.list_hunts());
        assert_eq!(reopened.get("Dragon").map(Hunt::marks_collected), Some(2));
    }

    #[test]
    fn save_of_load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hunts.json");
        let config = HuntConfig::default().with_store_path(&path);

        let mut store = HuntStore::from_config(&config);
        store.create_hunt("Wyvern", 4).unwrap();
        store.create_hunt("Basilisk", 2).unwrap();
        store.add_marks("Basilisk", 1).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let loaded = store.load().clone();
        store.save().unwrap();
        let after = fs::read_to_string(&path).unwrap();

        assert_eq!(before, after);
        assert_eq!(store.load(), &loaded);
    }
}
