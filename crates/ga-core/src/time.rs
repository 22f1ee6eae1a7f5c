//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one global
//! step in which every active agent acts once, in creation order.  There is no
//! wall-clock mapping; the demo binary's `--speed-ms` only paces rendering.

use std::fmt;

use crate::{GaError, GaResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Advance by one tick in place.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Default bound on each agent's inbound message queue.
pub const DEFAULT_MAILBOX_CAPACITY: usize = 64;

/// Top-level simulation configuration.
///
/// The demo binary builds this from CLI flags and can overlay a JSON file
/// (with the `serde` feature).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Step budget: the run stops after this many ticks at the latest.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Call `on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Maximum pending messages per agent; the oldest are dropped beyond it.
    pub mailbox_capacity: usize,

    /// End the run as soon as the last resource is collected.
    pub stop_when_depleted: bool,
}

impl SimConfig {
    /// The tick at which the step budget runs out (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// `true` if `tick` falls on a snapshot boundary.
    #[inline]
    pub fn is_snapshot_tick(&self, tick: Tick) -> bool {
        self.output_interval_ticks > 0 && tick.0.is_multiple_of(self.output_interval_ticks)
    }

    /// Reject settings no run can use.  A zero step budget is allowed and
    /// stops before the first tick.
    pub fn validate(&self) -> GaResult<()> {
        if self.mailbox_capacity == 0 {
            return Err(GaError::Config("mailbox_capacity must be positive".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks: 100,
            seed: 42,
            output_interval_ticks: 1,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            stop_when_depleted: true,
        }
    }
}
