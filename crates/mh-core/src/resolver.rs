//! Rolling on the outcome table and confirming setbacks.

use tracing::debug;

use crate::dice::DieSource;
use crate::error::{HuntError, HuntResult};
use crate::outcome::{
    OUTCOME_DIE_SIDES, RollOutcome, SETBACK_DIE_SIDES, SetbackSeverity, setback_occurs,
};

/// The outcome of a setback confirmation roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetbackCheck {
    /// Severity of the threatened setback.
    pub severity: SetbackSeverity,
    /// The d4 confirmation roll.
    pub roll: u32,
    /// Whether the setback happens.
    pub occurs: bool,
}

/// Turns die rolls into outcomes.
#[derive(Debug, Clone)]
pub struct OutcomeResolver<D> {
    dice: D,
}

impl<D: DieSource> OutcomeResolver<D> {
    /// Create a resolver that draws from `dice`.
    pub fn new(dice: D) -> Self {
        Self { dice }
    }

    /// Roll a d6 and look up its outcome.
    pub fn roll_outcome(&mut self) -> HuntResult<(u32, RollOutcome)> {
        let die = self.dice.roll(OUTCOME_DIE_SIDES)?;
        let outcome = RollOutcome::from_die(die).ok_or(HuntError::InvalidDie {
            sides: OUTCOME_DIE_SIDES,
            value: die,
        })?;
        debug!(die, %outcome, "rolled outcome");
        Ok((die, outcome))
    }

    /// Roll a d4 to see whether a threatened setback happens.
    pub fn resolve_setback(&mut self, severity: SetbackSeverity) -> HuntResult<SetbackCheck> {
        let roll = self.dice.roll(SETBACK_DIE_SIDES)?;
        let occurs = setback_occurs(roll);
        debug!(%severity, roll, occurs, "resolved setback");
        Ok(SetbackCheck {
            severity,
            roll,
            occurs,
        })
    }

    /// Access the die source.
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{RandomDice, ScriptedDice};

    #[test]
    fn stubbed_die_maps_to_table() {
        for die in 1..=6 {
            let mut resolver = OutcomeResolver::new(ScriptedDice::new([die]));
            let (rolled, outcome) = resolver.roll_outcome().unwrap();
            assert_eq!(rolled, die);
            assert_eq!(outcome, RollOutcome::from_die(die).unwrap());
        }
    }

    #[test]
    fn setback_escaped_on_low_draws() {
        for severity in [SetbackSeverity::Minor, SetbackSeverity::Major] {
            for draw in [1, 2] {
                let mut resolver = OutcomeResolver::new(ScriptedDice::new([draw]));
                let check = resolver.resolve_setback(severity).unwrap();
                assert!(!check.occurs, "{severity} draw {draw}");
                assert_eq!(check.roll, draw);
            }
        }
    }

    #[test]
    fn setback_occurs_on_high_draws() {
        for severity in [SetbackSeverity::Minor, SetbackSeverity::Major] {
            for draw in [3, 4] {
                let mut resolver = OutcomeResolver::new(ScriptedDice::new([draw]));
                let check = resolver.resolve_setback(severity).unwrap();
                assert!(check.occurs, "{severity} draw {draw}");
                assert_eq!(check.severity, severity);
            }
        }
    }

    #[test]
    fn bad_scripted_value_is_an_error() {
        let mut resolver = OutcomeResolver::new(ScriptedDice::new([0]));
        assert!(matches!(
            resolver.roll_outcome(),
            Err(HuntError::InvalidDie { sides: 6, value: 0 })
        ));
    }

    #[test]
    fn random_rolls_always_resolve() {
        let mut resolver = OutcomeResolver::new(RandomDice::from_seed(0));
        for _ in 0..300 {
            let (die, outcome) = resolver.roll_outcome().unwrap();
            assert_eq!(outcome.die(), die);
        }
    }
}
