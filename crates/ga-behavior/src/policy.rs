//! The `DecisionPolicy` trait, the main extension point for agent behavior.

use ga_agent::{AgentState, PolicyKind};
use ga_core::{AgentRng, Cell};

use crate::{DecisionContext, Intent};

/// A policy's verdict on which resource to go after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDecision {
    /// Head for this cell.
    Pursue(Cell),
    /// Nothing worth pursuing; fall back to wandering.
    Explore,
    /// Something is visible but the policy declines to compete for it.
    Yield,
}

/// Per-tick energy bookkeeping applied by the simulation loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyRules {
    /// Deducted at the start of each turn the agent takes.
    pub cost_per_tick:       f32,
    /// Added on every successful collection.
    pub gain_per_collection: f32,
    /// Agents at or below this energy become incapacitated.  `None` means
    /// energy is tracked but never fatal.
    pub death_threshold:     Option<f32>,
}

impl EnergyRules {
    /// Energy never changes.
    pub const NONE: EnergyRules = EnergyRules {
        cost_per_tick:       0.0,
        gain_per_collection: 0.0,
        death_threshold:     None,
    };
}

impl Default for EnergyRules {
    fn default() -> Self {
        Self::NONE
    }
}

/// Pluggable agent decision-making.
///
/// Per-agent mutable data (goal, plan, memory, epsilon) lives in the
/// [`AgentState`] passed to [`decide`](Self::decide), never in the policy, so a
/// single policy value can drive any number of agents.
pub trait DecisionPolicy: Send + Sync + 'static {
    fn kind(&self) -> PolicyKind;

    /// Manhattan radius within which the agent perceives resources.
    fn perception_radius(&self) -> u32;

    fn energy_rules(&self) -> EnergyRules {
        EnergyRules::NONE
    }

    /// Prepare a freshly created agent (attach memory, seed epsilon, …).
    fn init(&self, _agent: &mut AgentState) {}

    /// Choose among `candidates`.  Implementations must return a cell from
    /// `candidates` when they return [`TargetDecision::Pursue`].
    fn decide_target(
        &self,
        agent:      &AgentState,
        candidates: &[Cell],
        ctx:        &DecisionContext<'_>,
        rng:        &mut AgentRng,
    ) -> TargetDecision;

    /// Run one perceive → decide → act cycle for `agent`.
    fn decide(
        &self,
        agent: &mut AgentState,
        ctx:   &DecisionContext<'_>,
        rng:   &mut AgentRng,
    ) -> Vec<Intent>;
}

/// First cell in `cells` with the smallest Manhattan distance from `from`.
pub fn nearest(from: Cell, cells: &[Cell]) -> Option<Cell> {
    let mut best: Option<(Cell, u32)> = None;
    for &c in cells {
        let d = from.manhattan(c);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((c, d));
        }
    }
    best.map(|(c, _)| c)
}
