//! Sources of die rolls.
//!
//! The engine never touches an RNG directly; it asks a [`DieSource`] for a
//! value. [`RandomDice`] is the real thing, [`ScriptedDice`] replays a fixed
//! sequence so turns can be reproduced exactly.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::HuntConfig;
use crate::error::{HuntError, HuntResult};

/// Something that can roll an n-sided die.
pub trait DieSource {
    /// Roll a die with `sides` faces, returning a value in `1..=sides`.
    fn roll(&mut self, sides: u32) -> HuntResult<u32>;
}

/// Dice backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Dice with a fixed seed, for reproducible sessions.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Dice seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Dice seeded from the config, or from the OS when no seed is set.
    pub fn from_config(config: &HuntConfig) -> Self {
        match config.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_os(),
        }
    }
}

impl DieSource for RandomDice {
    fn roll(&mut self, sides: u32) -> HuntResult<u32> {
        Ok(self.rng.random_range(1..=sides.max(1)))
    }
}

/// Dice that return a predetermined sequence of values.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    values: VecDeque<u32>,
}

impl ScriptedDice {
    /// Queue the given values, returned in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Append more values to the end of the queue.
    pub fn push(&mut self, value: u32) {
        self.values.push_back(value);
    }

    /// Values not yet rolled.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl DieSource for ScriptedDice {
    fn roll(&mut self, sides: u32) -> HuntResult<u32> {
        let value = self.values.pop_front().ok_or(HuntError::DiceExhausted)?;
        if !(1..=sides).contains(&value) {
            return Err(HuntError::InvalidDie { sides, value });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_dice_in_range() {
        let mut dice = RandomDice::from_seed(42);
        for _ in 0..500 {
            let v = dice.roll(6).unwrap();
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn random_dice_deterministic() {
        let mut a = RandomDice::from_seed(9);
        let mut b = RandomDice::from_seed(9);
        for _ in 0..20 {
            assert_eq!(a.roll(6).unwrap(), b.roll(6).unwrap());
        }
    }

    #[test]
    fn random_dice_cover_all_faces() {
        let mut dice = RandomDice::from_seed(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[(dice.roll(4).unwrap() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn scripted_dice_in_order() {
        let mut dice = ScriptedDice::new([4, 3]);
        assert_eq!(dice.roll(6).unwrap(), 4);
        assert_eq!(dice.roll(4).unwrap(), 3);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn scripted_dice_exhausted() {
        let mut dice = ScriptedDice::default();
        assert!(matches!(dice.roll(6), Err(HuntError::DiceExhausted)));
    }

    #[test]
    fn scripted_dice_reject_impossible_face() {
        let mut dice = ScriptedDice::new([5]);
        assert!(matches!(
            dice.roll(4),
            Err(HuntError::InvalidDie { sides: 4, value: 5 })
        ));
    }
}
