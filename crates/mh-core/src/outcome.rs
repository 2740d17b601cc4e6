//! The hunt outcome table.
//!
//! Each turn rolls a d6 and looks the value up in a fixed table of six
//! outcomes. An outcome may award marks, threaten a setback, or grant a boon.
//! A threatened setback is confirmed by a d4: 1-2 escapes it, 3-4 means it
//! happens. Severity does not change those odds.

use serde::{Deserialize, Serialize};

/// Faces on the outcome die.
pub const OUTCOME_DIE_SIDES: u32 = 6;

/// Faces on the setback confirmation die.
pub const SETBACK_DIE_SIDES: u32 = 4;

/// How bad a threatened setback is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetbackSeverity {
    /// A minor setback.
    Minor,
    /// A major setback.
    Major,
}

impl std::fmt::Display for SetbackSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minor => write!(f, "Minor"),
            Self::Major => write!(f, "Major"),
        }
    }
}

/// The result of one roll on the outcome table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// 1: no marks, major setback threatened.
    MajorSetback,
    /// 2: one mark, minor setback threatened.
    MarkMinorSetback,
    /// 3: one mark.
    Mark,
    /// 4: two marks.
    DoubleMarks,
    /// 5: no marks, minor setback threatened.
    MinorSetback,
    /// 6: two marks and a boon.
    DoubleMarksBoon,
}

impl RollOutcome {
    /// Look up the outcome for a d6 value.
    pub fn from_die(die: u32) -> Option<Self> {
        match die {
            1 => Some(Self::MajorSetback),
            2 => Some(Self::MarkMinorSetback),
            3 => Some(Self::Mark),
            4 => Some(Self::DoubleMarks),
            5 => Some(Self::MinorSetback),
            6 => Some(Self::DoubleMarksBoon),
            _ => None,
        }
    }

    /// The d6 value that produces this outcome.
    pub fn die(self) -> u32 {
        match self {
            Self::MajorSetback => 1,
            Self::MarkMinorSetback => 2,
            Self::Mark => 3,
            Self::DoubleMarks => 4,
            Self::MinorSetback => 5,
            Self::DoubleMarksBoon => 6,
        }
    }

    /// All outcomes in die order.
    pub fn all() -> &'static [Self] {
        &[
            Self::MajorSetback,
            Self::MarkMinorSetback,
            Self::Mark,
            Self::DoubleMarks,
            Self::MinorSetback,
            Self::DoubleMarksBoon,
        ]
    }

    /// Marks this outcome adds to the hunt.
    pub fn marks_awarded(self) -> u32 {
        match self {
            Self::MajorSetback | Self::MinorSetback => 0,
            Self::MarkMinorSetback | Self::Mark => 1,
            Self::DoubleMarks | Self::DoubleMarksBoon => 2,
        }
    }

    /// The setback this outcome threatens, if any.
    pub fn setback(self) -> Option<SetbackSeverity> {
        match self {
            Self::MajorSetback => Some(SetbackSeverity::Major),
            Self::MarkMinorSetback | Self::MinorSetback => Some(SetbackSeverity::Minor),
            Self::Mark | Self::DoubleMarks | Self::DoubleMarksBoon => None,
        }
    }

    /// Whether this outcome grants a boon.
    pub fn has_boon(self) -> bool {
        matches!(self, Self::DoubleMarksBoon)
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MajorSetback => write!(f, "Major setback"),
            Self::MarkMinorSetback => write!(f, "Mark, minor setback"),
            Self::Mark => write!(f, "Mark"),
            Self::DoubleMarks => write!(f, "Double marks"),
            Self::MinorSetback => write!(f, "Minor setback"),
            Self::DoubleMarksBoon => write!(f, "Double marks, boon"),
        }
    }
}

/// Whether a d4 confirmation draw makes a threatened setback happen.
///
/// 1 and 2 escape, 3 and 4 confirm.
pub fn setback_occurs(draw: u32) -> bool {
    draw >= 3
}
