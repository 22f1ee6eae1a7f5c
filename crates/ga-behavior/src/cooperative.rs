//! Agents that coordinate through reservation messages.

use ga_agent::{AgentState, MessageKind, PolicyKind};
use ga_core::{AgentRng, Cell};

use crate::policy::nearest;
use crate::pursuit::acquire_and_act;
use crate::{BehaviorResult, DecisionContext, DecisionPolicy, Intent, TargetDecision};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooperativeConfig {
    pub perception_radius: u32,
    /// Also broadcast every other visible resource as `ResourceSighted`.
    pub share_sightings:   bool,
}

impl Default for CooperativeConfig {
    fn default() -> Self {
        Self { perception_radius: 8, share_sightings: true }
    }
}

/// Re-chooses its target every tick from what it sees plus what peers have
/// reported, skipping anything a peer has reserved, and then announces its
/// own choice.
///
/// Messages sent this tick are read next tick, so two agents that pick the
/// same target in the same tick both keep it for one tick and then both see
/// each other's reservation and move on.
#[derive(Debug, Clone, Default)]
pub struct CooperativePolicy {
    config: CooperativeConfig,
}

impl CooperativePolicy {
    pub fn new(config: CooperativeConfig) -> BehaviorResult<Self> {
        Ok(Self { config })
    }

    pub fn config(&self) -> &CooperativeConfig {
        &self.config
    }

    /// Visible resources plus peer sightings outside our own view, minus
    /// reserved cells.
    fn candidates(&self, agent: &AgentState, visible: &[Cell], ctx: &DecisionContext<'_>) -> Vec<Cell> {
        let reserved = ctx.payloads(MessageKind::TargetReserved);
        let mut candidates = visible.to_vec();
        if self.config.share_sightings {
            for cell in ctx.payloads(MessageKind::ResourceSighted) {
                // Inside our radius we can see for ourselves whether it is still there.
                let out_of_view = agent.position.manhattan(cell) > self.config.perception_radius;
                if out_of_view && ctx.world.is_valid(cell) && !candidates.contains(&cell) {
                    candidates.push(cell);
                }
            }
        }
        candidates.retain(|c| !reserved.contains(c));
        candidates
    }
}

impl DecisionPolicy for CooperativePolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Cooperative
    }

    fn perception_radius(&self) -> u32 {
        self.config.perception_radius
    }

    fn decide_target(
        &self,
        agent:      &AgentState,
        candidates: &[Cell],
        _ctx:       &DecisionContext<'_>,
        _rng:       &mut AgentRng,
    ) -> TargetDecision {
        nearest(agent.position, candidates).map_or(TargetDecision::Explore, TargetDecision::Pursue)
    }

    fn decide(
        &self,
        agent: &mut AgentState,
        ctx:   &DecisionContext<'_>,
        rng:   &mut AgentRng,
    ) -> Vec<Intent> {
        let visible = ctx
            .world
            .resources_within_radius(agent.position, self.config.perception_radius);
        let candidates = self.candidates(agent, &visible, ctx);
        let actions = acquire_and_act(self, agent, candidates, ctx, rng);

        let mut intents = Vec::with_capacity(actions.len() + visible.len() + 1);
        if let Some(goal) = agent.goal {
            intents.push(Intent::Broadcast { kind: MessageKind::TargetReserved, payload: goal });
        }
        if self.config.share_sightings {
            intents.extend(
                visible
                    .iter()
                    .filter(|&&c| Some(c) != agent.goal)
                    .map(|&c| Intent::Broadcast { kind: MessageKind::ResourceSighted, payload: c }),
            );
        }
        intents.extend(actions);
        intents
    }
}
