//! The dice rolling animation shown before a roll is revealed.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use rand::Rng;

/// Unicode die faces, one through six.
pub const DICE_FACES: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];

const LABEL: &str = "🎲 Rolling the dice...";

/// A short spin of random die faces drawn on one terminal line.
#[derive(Debug, Clone)]
pub struct DiceAnimation {
    /// Number of faces shown before settling.
    pub frames: u32,
    /// Time each face stays on screen.
    pub frame_delay: Duration,
    /// Pause after the last frame.
    pub settle: Duration,
}

impl Default for DiceAnimation {
    fn default() -> Self {
        Self {
            frames: 15,
            frame_delay: Duration::from_millis(100),
            settle: Duration::from_millis(500),
        }
    }
}

impl DiceAnimation {
    /// Print the label only, with no frames or pauses.
    pub fn disabled() -> Self {
        Self {
            frames: 0,
            frame_delay: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }

    /// Whether any frames are drawn.
    pub fn is_enabled(&self) -> bool {
        self.frames > 0 && !self.frame_delay.is_zero()
    }

    /// Draw the animation to `out`.
    pub fn play<W: Write, R: Rng>(&self, out: &mut W, rng: &mut R) -> io::Result<()> {
        if !self.is_enabled() {
            writeln!(out, "\n{LABEL}")?;
            return Ok(());
        }

        write!(out, "\n{LABEL}")?;
        out.flush()?;
        for _ in 0..self.frames {
            let face = DICE_FACES[rng.random_range(0..DICE_FACES.len())];
            write!(out, "\r{LABEL} {face}")?;
            out.flush()?;
            thread::sleep(self.frame_delay);
        }
        writeln!(out)?;
        thread::sleep(self.settle);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn default_timing() {
        let anim = DiceAnimation::default();
        assert_eq!(anim.frames, 15);
        assert_eq!(anim.frame_delay, Duration::from_millis(100));
        assert!(anim.is_enabled());
    }

    #[test]
    fn disabled_prints_label_once() {
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        DiceAnimation::disabled().play(&mut out, &mut rng).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n🎲 Rolling the dice...\n");
    }

    #[test]
    fn frames_redraw_the_same_line() {
        let anim = DiceAnimation {
            frames: 4,
            frame_delay: Duration::from_millis(1),
            settle: Duration::ZERO,
        };
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        anim.play(&mut out, &mut rng).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('\r').count(), 4);
        assert_eq!(text.matches('\n').count(), 2);
        assert!(DICE_FACES.iter().any(|f| text.contains(f)));
    }
}
