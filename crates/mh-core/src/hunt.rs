//! Hunt progress records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All open hunts keyed by monster name, in creation order.
pub type HuntMap = IndexMap<String, Hunt>;

/// Progress toward defeating one monster.
///
/// The name lives in the [`HuntMap`] key. `total_marks` is fixed at creation;
/// `marks_collected` only grows, and may overshoot the target on the final
/// turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunt {
    marks_collected: u32,
    total_marks: u32,
}

/// Where a hunt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntState {
    /// Fewer marks collected than the target.
    Active,
    /// Target reached or exceeded. Terminal.
    Complete,
}

impl Hunt {
    /// A fresh hunt with no marks collected.
    pub(crate) fn new(total_marks: u32) -> Self {
        Self {
            marks_collected: 0,
            total_marks,
        }
    }

    /// Marks collected so far.
    pub fn marks_collected(&self) -> u32 {
        self.marks_collected
    }

    /// Marks needed to complete the hunt.
    pub fn total_marks(&self) -> u32 {
        self.total_marks
    }

    /// Marks still missing, or 0 once complete.
    pub fn remaining(&self) -> u32 {
        self.total_marks.saturating_sub(self.marks_collected)
    }

    /// Whether the target has been reached.
    pub fn is_complete(&self) -> bool {
        self.marks_collected >= self.total_marks
    }

    /// Current state of the hunt.
    pub fn state(&self) -> HuntState {
        if self.is_complete() {
            HuntState::Complete
        } else {
            HuntState::Active
        }
    }

    pub(crate) fn add_marks(&mut self, marks: u32) {
        self.marks_collected = self.marks_collected.saturating_add(marks);
    }
}

/// A named snapshot of a hunt, as shown in hunt listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuntSummary {
    /// Monster name.
    pub name: String,
    /// Marks collected so far.
    pub marks_collected: u32,
    /// Marks needed to complete the hunt.
    pub total_marks: u32,
}

impl HuntSummary {
    /// Build a summary from a map entry.
    pub fn new(name: &str, hunt: &Hunt) -> Self {
        Self {
            name: name.to_string(),
            marks_collected: hunt.marks_collected,
            total_marks: hunt.total_marks,
        }
    }
}

impl std::fmt::Display for HuntSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}/{} marks",
            self.name, self.marks_collected, self.total_marks
        )
    }
}
