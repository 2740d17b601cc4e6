//! Hunt tracking engine for Monster Hunt.
//!
//! A hunt is a pursuit of one monster measured in marks. Each turn rolls a d6
//! against a fixed outcome table, awards marks, and may threaten a setback
//! that a second d4 roll confirms or escapes. Progress is persisted through a
//! pluggable [`HuntBackend`], and a hunt is removed from its [`HuntStore`] as
//! soon as it collects its target number of marks.

pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod hunt;
pub mod outcome;
pub mod resolver;
pub mod store;

pub use config::HuntConfig;
pub use dice::{DieSource, RandomDice, ScriptedDice};
pub use engine::{HuntEngine, TurnReport, TurnResult};
pub use error::{HuntError, HuntResult};
pub use hunt::{Hunt, HuntMap, HuntState, HuntSummary};
pub use outcome::{RollOutcome, SetbackSeverity};
pub use resolver::{OutcomeResolver, SetbackCheck};
pub use store::{HuntBackend, HuntStore, JsonFileBackend, MemoryBackend};
