//! The interactive hunt session.
//!
//! A session loads the store, lets the player continue an open hunt or start
//! a new one, plays a single turn, and reports the result. Invalid input is
//! re-prompted; end of input ends the session quietly.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;

use mh_core::{DieSource, HuntEngine, HuntStore};

use crate::animation::DiceAnimation;
use crate::render;

/// Drives one play-through over arbitrary input and output streams.
pub struct HuntSession<'a, R, W, D> {
    store: &'a mut HuntStore,
    engine: &'a mut HuntEngine<D>,
    input: R,
    output: W,
    animation: DiceAnimation,
    face_rng: StdRng,
}

impl<'a, R: BufRead, W: Write, D: DieSource> HuntSession<'a, R, W, D> {
    /// Create a session with the default animation.
    pub fn new(
        store: &'a mut HuntStore,
        engine: &'a mut HuntEngine<D>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            engine,
            input,
            output,
            animation: DiceAnimation::default(),
            face_rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the dice animation.
    pub fn with_animation(mut self, animation: DiceAnimation) -> Self {
        self.animation = animation;
        self
    }

    /// Play the session to the end.
    pub fn run(&mut self) -> Result<(), String> {
        self.say("=== D&D Monster Hunting ===")?;

        let name = if self.store.is_empty() {
            self.say("\nNo open hunts found. Starting a new hunt...")?;
            self.create_new_hunt()?
        } else {
            self.choose_hunt()?
        };
        let Some(name) = name else {
            return Ok(());
        };

        let hunt = self
            .store
            .get(&name)
            .copied()
            .ok_or_else(|| format!("hunt '{name}' disappeared"))?;
        self.say(&render::hunt_details(&name, &hunt))?;

        if self
            .prompt("\nPress Enter when you're ready to roll...")?
            .is_none()
        {
            return Ok(());
        }

        self.animation
            .play(&mut self.output, &mut self.face_rng)
            .map_err(|e| e.to_string())?;

        let report = self
            .engine
            .play_turn(self.store, &name)
            .map_err(|e| e.to_string())?;
        self.say(&render::turn_report(&report))?;

        self.say("\nThanks for playing!")
    }

    fn choose_hunt(&mut self) -> Result<Option<String>, String> {
        self.say("\nWould you like to:\n1. Continue an open hunt\n2. Start a new hunt")?;
        loop {
            let Some(choice) = self.prompt("\nEnter your choice (1 or 2): ")? else {
                return Ok(None);
            };
            match choice.as_str() {
                "1" => {
                    self.say(&render::open_hunts(&self.store.list_hunts()))?;
                    return self.select_hunt();
                }
                "2" => return self.create_new_hunt(),
                _ => self.say("Please enter 1 or 2.")?,
            }
        }
    }

    fn select_hunt(&mut self) -> Result<Option<String>, String> {
        let names: Vec<String> = self.store.hunts().keys().cloned().collect();
        if let [only] = names.as_slice() {
            self.say(&format!("\nLoading hunt: {only}"))?;
            return Ok(Some(only.clone()));
        }

        loop {
            let Some(input) = self.prompt("\nSelect hunt number: ")? else {
                return Ok(None);
            };
            match input.parse::<usize>() {
                Ok(n) if (1..=names.len()).contains(&n) => {
                    return Ok(Some(names[n - 1].clone()));
                }
                Ok(_) => self.say("Invalid selection. Please try again.")?,
                Err(_) => self.say("Please enter a valid number.")?,
            }
        }
    }

    fn create_new_hunt(&mut self) -> Result<Option<String>, String> {
        let name = loop {
            let Some(name) = self.prompt("\nEnter the monster name: ")? else {
                return Ok(None);
            };
            if name.is_empty() {
                self.say("Please enter a monster name.")?;
                continue;
            }
            if let Some(existing) = self.store.get(&name) {
                let question = format!(
                    "A hunt for {name} already exists ({}/{} marks). Start over? (y/n) ",
                    existing.marks_collected(),
                    existing.total_marks()
                );
                let Some(answer) = self.prompt(&question)? else {
                    return Ok(None);
                };
                if !answer.eq_ignore_ascii_case("y") && !answer.eq_ignore_ascii_case("yes") {
                    continue;
                }
            }
            break name;
        };

        let total_marks = loop {
            let Some(input) = self.prompt("How many marks is this hunt worth? ")? else {
                return Ok(None);
            };
            match input.parse::<i64>() {
                Ok(n) if n > 0 => match u32::try_from(n) {
                    Ok(n) => break n,
                    Err(_) => self.say("That is too many marks for one hunt.")?,
                },
                Ok(_) => self.say("Please enter a positive number.")?,
                Err(_) => self.say("Please enter a valid number.")?,
            }
        };

        self.engine
            .create_hunt(self.store, &name, total_marks)
            .map_err(|e| e.to_string())?;
        Ok(Some(name))
    }

    fn say(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.output, "{text}").map_err(|e| e.to_string())
    }

    /// Show `text` without a newline and read one trimmed line.
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, String> {
        write!(self.output, "{text}").map_err(|e| e.to_string())?;
        self.output.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(e) => Err(e.to_string()),
        }
    }
}
