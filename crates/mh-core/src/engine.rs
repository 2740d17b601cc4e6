//! Turn orchestration for hunts.
//!
//! A turn is one roll on the outcome table applied to one hunt:
//!
//! 1. Marks are added and persisted immediately.
//! 2. A threatened setback is confirmed or escaped with a d4. Setbacks are
//!    narrative only and never change the hunt.
//! 3. A boon is reported, also without mechanical effect.
//!
//! Once a hunt has collected at least its target number of marks it is
//! complete and [`HuntEngine::complete_hunt`] removes it from the store. A
//! later hunt with the same name starts again from zero.

use tracing::{debug, info};

use crate::config::HuntConfig;
use crate::dice::{DieSource, RandomDice};
use crate::error::{HuntError, HuntResult};
use crate::hunt::Hunt;
use crate::outcome::RollOutcome;
use crate::resolver::{OutcomeResolver, SetbackCheck};
use crate::store::HuntStore;

/// What a single turn changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    /// Marks added to the hunt.
    pub marks_gained: u32,
    /// The setback confirmation, when the outcome threatened one.
    pub setback: Option<SetbackCheck>,
    /// Whether a boon was granted.
    pub boon_granted: bool,
    /// The hunt after the turn.
    pub hunt: Hunt,
}

impl TurnResult {
    /// Whether a threatened setback actually happened.
    pub fn setback_occurred(&self) -> bool {
        self.setback.is_some_and(|check| check.occurs)
    }
}

/// A full turn: the roll, its effects, and whether it finished the hunt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Monster name.
    pub name: String,
    /// The d6 value rolled.
    pub die: u32,
    /// The outcome looked up from the die.
    pub outcome: RollOutcome,
    /// Effects of the outcome.
    pub result: TurnResult,
    /// Whether the hunt was completed and removed.
    pub completed: bool,
}

/// Plays turns against hunts held in a [`HuntStore`].
#[derive(Debug, Clone)]
pub struct HuntEngine<D = RandomDice> {
    resolver: OutcomeResolver<D>,
}

impl HuntEngine<RandomDice> {
    /// An engine with dice seeded from the config.
    pub fn from_config(config: &HuntConfig) -> Self {
        Self::new(RandomDice::from_config(config))
    }
}

impl<D: DieSource> HuntEngine<D> {
    /// An engine rolling `dice`.
    pub fn new(dice: D) -> Self {
        Self {
            resolver: OutcomeResolver::new(dice),
        }
    }

    /// Access the outcome resolver.
    pub fn resolver_mut(&mut self) -> &mut OutcomeResolver<D> {
        &mut self.resolver
    }

    /// Start a new hunt in `store`.
    pub fn create_hunt(
        &self,
        store: &mut HuntStore,
        name: &str,
        total_marks: u32,
    ) -> HuntResult<Hunt> {
        store.create_hunt(name, total_marks)
    }

    /// Roll on the outcome table.
    pub fn roll_outcome(&mut self) -> HuntResult<(u32, RollOutcome)> {
        self.resolver.roll_outcome()
    }

    /// Apply `outcome` to the named hunt.
    ///
    /// Marks are saved before the setback is resolved, so progress survives
    /// a failure later in the turn.
    pub fn apply_turn(
        &mut self,
        store: &mut HuntStore,
        name: &str,
        outcome: RollOutcome,
    ) -> HuntResult<TurnResult> {
        let mut hunt = *store
            .get(name)
            .ok_or_else(|| HuntError::HuntNotFound(name.to_string()))?;

        let marks_gained = outcome.marks_awarded();
        if marks_gained > 0 {
            hunt = store.add_marks(name, marks_gained)?;
        }

        let setback = match outcome.setback() {
            Some(severity) => Some(self.resolver.resolve_setback(severity)?),
            None => None,
        };

        let result = TurnResult {
            marks_gained,
            setback,
            boon_granted: outcome.has_boon(),
            hunt,
        };
        debug!(
            name,
            %outcome,
            marks_gained,
            setback_occurred = result.setback_occurred(),
            marks_collected = hunt.marks_collected(),
            total_marks = hunt.total_marks(),
            "turn applied"
        );
        Ok(result)
    }

    /// Whether the named hunt has collected all its marks.
    pub fn is_complete(&self, store: &HuntStore, name: &str) -> HuntResult<bool> {
        store
            .get(name)
            .map(Hunt::is_complete)
            .ok_or_else(|| HuntError::HuntNotFound(name.to_string()))
    }

    /// Remove a finished hunt from the store.
    pub fn complete_hunt(&self, store: &mut HuntStore, name: &str) -> HuntResult<Hunt> {
        let hunt = store.remove_hunt(name)?;
        info!(name, marks_collected = hunt.marks_collected(), "hunt complete");
        Ok(hunt)
    }

    /// Roll, apply the outcome, and complete the hunt if it is done.
    pub fn play_turn(&mut self, store: &mut HuntStore, name: &str) -> HuntResult<TurnReport> {
        if !store.contains(name) {
            return Err(HuntError::HuntNotFound(name.to_string()));
        }

        let (die, outcome) = self.roll_outcome()?;
        let result = self.apply_turn(store, name, outcome)?;

        let completed = result.hunt.is_complete();
        if completed {
            self.complete_hunt(store, name)?;
        }

        Ok(TurnReport {
            name: name.to_string(),
            die,
            outcome,
            result,
            completed,
        })
    }
}
