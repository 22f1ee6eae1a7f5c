//! Seeded random sources.
//!
//! Every agent draws from its own `AgentRng`, seeded from the run seed and
//! the agent's id, so one agent's wandering never shifts another agent's
//! draws and appending agents leaves the earlier ones' sequences unchanged.
//! World generation draws from a single `SimRng` seeded with the run seed.

use std::f64::consts::TAU;

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Cell, Direction};

/// Spreads consecutive agent ids across the seed space (golden-ratio bits).
const SEED_SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// One agent's random source.  Policies only ever see the acting agent's.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        let seed = run_seed ^ u64::from(agent.0).wrapping_mul(SEED_SPREAD);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p`, clamped to `[0, 1]`.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    #[inline]
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.0)
    }

    /// Uniform over the four moves.
    #[inline]
    pub fn direction(&mut self) -> Direction {
        Direction::ALL[self.0.gen_range(0..Direction::ALL.len())]
    }

    /// Uniform over a `width × height` grid.  Both dimensions must be positive.
    #[inline]
    pub fn cell_in(&mut self, width: i32, height: i32) -> Cell {
        Cell::new(self.0.gen_range(0..width), self.0.gen_range(0..height))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Random source for scenario generation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Normal sample (Box-Muller).
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.0.r#gen::<f64>().max(f64::MIN_POSITIVE);
        let u2 = self.0.r#gen::<f64>();
        mean + std_dev * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }

    #[inline]
    pub fn cell_in(&mut self, width: i32, height: i32) -> Cell {
        Cell::new(self.0.gen_range(0..width), self.0.gen_range(0..height))
    }
}
