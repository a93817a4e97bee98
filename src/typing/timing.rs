//! Keystroke timing and jitter sources

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::{DELETING_BASE_MS, HOLD_MS, JITTER_MAX_MS, TYPING_BASE_MS};

/// Base delays of the typewriter, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub typing_ms: u64,
    pub deleting_ms: u64,
    pub jitter_ms: u64,
    pub hold_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            typing_ms: TYPING_BASE_MS,
            deleting_ms: DELETING_BASE_MS,
            jitter_ms: JITTER_MAX_MS,
            hold_ms: HOLD_MS,
        }
    }
}

impl Timing {
    pub fn typing(&self) -> Duration {
        Duration::from_millis(self.typing_ms)
    }

    pub fn deleting(&self) -> Duration {
        Duration::from_millis(self.deleting_ms)
    }

    pub fn jitter_max(&self) -> Duration {
        Duration::from_millis(self.jitter_ms)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

/// Source of the random extra delay added to each keystroke
pub trait Jitter {
    /// A duration in `[0, max]`
    fn jitter(&mut self, max: Duration) -> Duration;
}

impl<J: Jitter + ?Sized> Jitter for Box<J> {
    fn jitter(&mut self, max: Duration) -> Duration {
        (**self).jitter(max)
    }
}

/// Uniform jitter with millisecond resolution
#[derive(Debug)]
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    pub fn new() -> Self {
        RandomJitter {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible jitter sequence
    pub fn seeded(seed: u64) -> Self {
        RandomJitter {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Jitter for RandomJitter {
    fn jitter(&mut self, max: Duration) -> Duration {
        let max_ms = max.as_millis() as u64;
        Duration::from_millis(self.rng.random_range(0..=max_ms))
    }
}

/// Always zero
#[derive(Clone, Copy, Debug, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn jitter(&mut self, _max: Duration) -> Duration {
        Duration::ZERO
    }
}

/// Constant jitter, clamped to the allowed maximum
#[derive(Clone, Copy, Debug)]
pub struct FixedJitter(pub Duration);

impl Jitter for FixedJitter {
    fn jitter(&mut self, max: Duration) -> Duration {
        self.0.min(max)
    }
}
