//! `ga-core` — foundational types for the `grid_agents` simulation workspace.
//!
//! This crate is a dependency of every other `ga-*` crate.  It has no `ga-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`cell`]        | `Cell`, `Direction`, Manhattan distance               |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `GaError`, `GaResult` (config validation)             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Direction};
pub use error::{GaError, GaResult};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::{DEFAULT_MAILBOX_CAPACITY, SimConfig, Tick};
