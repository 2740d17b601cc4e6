pub mod abandon;
pub mod list;
pub mod new;
pub mod play;
pub mod roll;
pub mod table;

use mh_core::{HuntConfig, HuntStore};

/// Open the hunt store named by the config.
fn open_store(config: &HuntConfig) -> HuntStore {
    HuntStore::from_config(config)
}
