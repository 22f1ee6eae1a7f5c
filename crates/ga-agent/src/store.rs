//! Agent storage: `AgentStore` (states + mailboxes) and `AgentRngs`.
//!
//! # Why separate RNGs?
//!
//! During an agent's turn the loop needs `&mut` to that agent's state, `&mut`
//! to its RNG, and `&mut` to the peers' mailboxes at once.  Keeping RNGs in
//! their own struct, and states and mailboxes in distinct fields, lets the
//! borrow checker see those accesses as disjoint.

use ga_core::{AgentId, AgentRng};

use crate::{AgentState, Mailboxes};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, indexed by `AgentId`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// All agent states plus their mailboxes.  `AgentId` is the index into both.
pub struct AgentStore {
    pub states:    Vec<AgentState>,
    pub mailboxes: Mailboxes,
}

impl AgentStore {
    #[inline]
    pub fn count(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending order (the acting order).
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.states.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&AgentState> {
        self.states.get(agent.index())
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut AgentState> {
        self.states.get_mut(agent.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentState> + '_ {
        self.states.iter()
    }

    pub fn active_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_active()).count()
    }

    /// `true` if the roster is non-empty and nobody can act any more.
    pub fn all_incapacitated(&self) -> bool {
        !self.states.is_empty() && self.states.iter().all(|s| !s.is_active())
    }

    pub fn total_collected(&self) -> u64 {
        self.states
            .iter()
            .map(|s| u64::from(s.counters.resources_collected))
            .sum()
    }

    pub(crate) fn new(states: Vec<AgentState>, mailboxes: Mailboxes) -> Self {
        Self { states, mailboxes }
    }
}
