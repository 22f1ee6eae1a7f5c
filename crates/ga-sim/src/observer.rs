//! Simulation observer trait for progress reporting and data collection.

use ga_agent::AgentStore;
use ga_core::Tick;
use ga_world::GridWorld;

use crate::{StopReason, TickSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         println!("{tick}: {} collected, {} left", summary.collected, summary.resources_remaining);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called after `on_tick_end` every `config.output_interval_ticks` ticks.
    ///
    /// Read-only access to the world and the agents lets renderers and output
    /// writers record a snapshot without the sim knowing any output format.
    fn on_snapshot(&mut self, _tick: Tick, _world: &GridWorld, _agents: &AgentStore) {}

    /// Called once when `run` stops.  `final_tick` is the first tick that was
    /// not processed.
    fn on_sim_end(&mut self, _final_tick: Tick, _reason: StopReason) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
