//! `ga-agent` — per-agent state for the `grid_agents` workspace.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`state`]   | `AgentState`, `AgentStatus`, `AgentCounters`, `PolicyKind`    |
//! | [`memory`]  | `SpatialMemory`, `Region`, `RegionStats`, `MemorySummary`     |
//! | [`mailbox`] | `Message`, `MessageKind`, bounded `Mailbox`, `Mailboxes`      |
//! | [`store`]   | `AgentStore` (states + mailboxes), `AgentRngs`                |
//! | [`builder`] | `AgentStoreBuilder`                                           |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                                |
//!
//! # Ownership
//!
//! Each agent's plan and memory live in its own `AgentState`.  Mailboxes and
//! RNGs are kept in parallel collections so the simulation loop can hold
//! `&mut` to one agent's state while appending to its peers' mailboxes.

pub mod builder;
pub mod error;
pub mod mailbox;
pub mod memory;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use mailbox::{Mailbox, Mailboxes, Message, MessageKind};
pub use memory::{DEFAULT_REGION_SIZE, MemorySummary, Region, RegionStats, SpatialMemory};
pub use state::{AgentCounters, AgentState, AgentStatus, CompetitiveStrategy, INITIAL_ENERGY, PolicyKind};
pub use store::{AgentRngs, AgentStore};
