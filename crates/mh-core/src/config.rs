//! Configuration for a hunt session.

use std::path::PathBuf;

/// File the hunt mapping is stored in when no other path is given.
pub const DEFAULT_STORE_FILE: &str = "monster_hunts.json";

/// Configuration for opening a store and seeding the dice.
#[derive(Debug, Clone)]
pub struct HuntConfig {
    /// Path of the JSON document holding all open hunts.
    pub store_path: PathBuf,
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            seed: None,
        }
    }
}

impl HuntConfig {
    /// Set the store path.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = HuntConfig::default();
        assert_eq!(cfg.store_path, PathBuf::from("monster_hunts.json"));
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = HuntConfig::default()
            .with_store_path("/tmp/hunts.json")
            .with_seed(7);
        assert_eq!(cfg.store_path, PathBuf::from("/tmp/hunts.json"));
        assert_eq!(cfg.seed, Some(7));
    }
}
