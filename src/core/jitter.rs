//! Zufallsquellen für die Jitter-Werte der Start- und Ruhepose.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::ops::RangeInclusive;

/// Gleichverteilte Ganzzahl-Ziehung über einen inklusiven Bereich.
pub trait JitterSource {
    /// Zieht einen Wert aus `range` (beide Grenzen eingeschlossen).
    fn draw(&mut self, range: RangeInclusive<i32>) -> i32;
}

/// Standard-Quelle auf Basis von `rand::rngs::StdRng`.
#[derive(Debug, Clone)]
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    /// Erstellt eine Quelle mit Seed aus dem Betriebssystem.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Erstellt eine reproduzierbare Quelle mit festem Seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for RandomJitter {
    fn draw(&mut self, range: RangeInclusive<i32>) -> i32 {
        if range.is_empty() {
            return *range.start();
        }
        self.rng.random_range(range)
    }
}

/// Deterministische Quelle, die vorgegebene Werte der Reihe nach liefert.
///
/// Werte außerhalb des angefragten Bereichs werden in den Bereich geklemmt.
/// Ist die Folge erschöpft, liefert die Quelle die Bereichsmitte.
#[derive(Debug, Clone, Default)]
pub struct ScriptedJitter {
    values: VecDeque<i32>,
}

impl ScriptedJitter {
    /// Erstellt eine Quelle aus einer Wertefolge.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Anzahl noch nicht gezogener Werte.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl JitterSource for ScriptedJitter {
    fn draw(&mut self, range: RangeInclusive<i32>) -> i32 {
        let (lo, hi) = (*range.start(), *range.end());
        match self.values.pop_front() {
            Some(value) if lo <= hi => value.clamp(lo, hi),
            Some(_) => lo,
            None => lo + (hi - lo) / 2,
        }
    }
}
