//! Persistence backends for the hunt mapping.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use crate::error::{HuntError, HuntResult};
use crate::hunt::HuntMap;

/// Durable storage for the whole hunt mapping.
///
/// Backends read and write the mapping as a unit. A missing store is not an
/// error and loads as an empty mapping.
pub trait HuntBackend: std::fmt::Debug {
    /// Read every stored hunt.
    fn load(&self) -> HuntResult<HuntMap>;

    /// Replace the stored mapping with `hunts`.
    fn save(&mut self, hunts: &HuntMap) -> HuntResult<()>;

    /// Where the mapping lives, for log messages.
    fn location(&self) -> String;
}

/// Stores hunts as a pretty-printed JSON object keyed by monster name.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Use the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(path: &Path, source: io::Error) -> HuntError {
        HuntError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl HuntBackend for JsonFileBackend {
    fn load(&self) -> HuntResult<HuntMap> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no hunt file yet");
                return Ok(HuntMap::new());
            }
            Err(e) => return Err(Self::io_error(&self.path, e)),
        };
        let hunts: HuntMap = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), count = hunts.len(), "hunts loaded");
        Ok(hunts)
    }

    /// Write to a sibling temp file, then rename over the target.
    fn save(&mut self, hunts: &HuntMap) -> HuntResult<()> {
        let mut buf = serde_json::to_string_pretty(hunts)?;
        buf.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Self::io_error(parent, e))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, buf).map_err(|e| Self::io_error(&tmp_path, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| Self::io_error(&self.path, e))?;

        debug!(path = %self.path.display(), count = hunts.len(), "hunts saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    hunts: HuntMap,
    saves: usize,
}

/// Keeps the mapping in memory.
///
/// Clones share the same storage, so a test can hand one clone to a store and
/// inspect what was saved through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryBackend {
    /// An empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-populated with `hunts`.
    pub fn with_hunts(hunts: HuntMap) -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().hunts = hunts;
        backend
    }

    /// The most recently saved mapping.
    pub fn saved(&self) -> HuntMap {
        self.state.borrow().hunts.clone()
    }

    /// How many times the mapping has been saved.
    pub fn save_count(&self) -> usize {
        self.state.borrow().saves
    }
}

impl HuntBackend for MemoryBackend {
    fn load(&self) -> HuntResult<HuntMap> {
        Ok(self.state.borrow().hunts.clone())
    }

    fn save(&mut self, hunts: &HuntMap) -> HuntResult<()> {
        let mut state = self.state.borrow_mut();
        state.hunts = hunts.clone();
        state.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
