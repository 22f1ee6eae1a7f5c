//! `ga-sim` — tick loop orchestrator for the grid_agents workspace.
//!
//! # Tick loop
//!
//! ```text
//! until a stop condition holds:
//!   ① Drain     — empty every mailbox.  Messages sent later in this tick stay
//!                 queued and are read next tick.
//!   ② Turns     — for each agent in ascending AgentId order:
//!                   skip if incapacitated
//!                   pay the policy's energy cost; incapacitate at threshold
//!                   skip if still busy working a collected resource
//!                   DecisionPolicy::decide → Vec<Intent>
//!                   apply intents in order:
//!                     Move(d)      → step if passable, else count as blocked
//!                     Collect      → take the resource under the agent
//!                     Yield        → nothing
//!                     Broadcast{…} → push into every other mailbox
//!   ③ Report    — on_tick_end, and on_snapshot at the output interval.
//! ```
//!
//! Turns are sequential, so an agent sees the world as left by every agent
//! before it in the same tick.
//!
//! # Stop conditions
//!
//! Checked before each tick, in this order: all resources collected (when
//! `stop_when_depleted`), every agent incapacitated, step budget exhausted.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ga_behavior::GoalBasedPolicy;
//! use ga_core::{Cell, SimConfig};
//! use ga_sim::{NoopObserver, SimBuilder};
//! use ga_world::BfsPlanner;
//!
//! let mut sim = SimBuilder::new(config, world, BfsPlanner)
//!     .agent(Cell::new(0, 0), GoalBasedPolicy::default())
//!     .build()?;
//! let reason = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, StopReason, TickSummary};
