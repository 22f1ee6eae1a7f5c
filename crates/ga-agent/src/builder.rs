//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use ga_agent::{AgentStoreBuilder, PolicyKind};
//! use ga_core::Cell;
//!
//! let (store, rngs) = AgentStoreBuilder::new(/*seed=*/ 42)
//!     .agent(PolicyKind::GoalBased, Cell::new(0, 0))
//!     .agent(PolicyKind::GoalBased, Cell::new(5, 5))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count(), 2);
//! assert_eq!(rngs.len(), 2);
//! ```

use ga_core::{AgentId, Cell, DEFAULT_MAILBOX_CAPACITY};

use crate::{AgentResult, AgentRngs, AgentState, AgentStore, Mailboxes, PolicyKind};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Agents receive ids in the order they are added; that is also the order in
/// which they act each tick.
pub struct AgentStoreBuilder {
    seed:             u64,
    mailbox_capacity: usize,
    agents:           Vec<(PolicyKind, Cell)>,
}

impl AgentStoreBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            agents: Vec::new(),
        }
    }

    pub fn mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity;
        self
    }

    /// Append an agent and return its id.
    pub fn add(&mut self, policy: PolicyKind, start: Cell) -> AgentId {
        let id = AgentId(self.agents.len() as u32);
        self.agents.push((policy, start));
        id
    }

    /// Chainable form of [`add`](Self::add).
    pub fn agent(mut self, policy: PolicyKind, start: Cell) -> Self {
        self.add(policy, start);
        self
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Construct the store and the per-agent RNGs.
    ///
    /// Start cells are validated against the world later, by the simulation
    /// builder.
    pub fn build(self) -> AgentResult<(AgentStore, AgentRngs)> {
        let count = self.agents.len();
        let mailboxes = Mailboxes::new(count, self.mailbox_capacity)?;
        let states = self
            .agents
            .into_iter()
            .enumerate()
            .map(|(i, (policy, start))| AgentState::new(AgentId(i as u32), policy, start))
            .collect();

        Ok((AgentStore::new(states, mailboxes), AgentRngs::new(count, self.seed)))
    }
}
