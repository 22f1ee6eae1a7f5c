//! Memory-less stimulus → response agents.

use ga_agent::{AgentState, PolicyKind};
use ga_core::{AgentRng, Cell, Direction};
use ga_world::{GridWorld, ResourceClass, ResourceKind};

use crate::pursuit::greedy_step;
use crate::{BehaviorResult, DecisionContext, DecisionPolicy, Intent, TargetDecision};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactiveConfig {
    /// The only resources this agent consumes.
    pub target:           ResourceClass,
    /// Prefer in-bounds neighbours the agent has not stood on yet.
    pub prefer_unvisited: bool,
    /// When non-zero, head for the most valuable matching resource within
    /// this Manhattan radius instead of wandering.
    pub seek_radius:      u32,
}

impl Default for ReactiveConfig {
    fn default() -> Self {
        Self { target: ResourceClass::Dirt, prefer_unvisited: false, seek_radius: 0 }
    }
}

/// If the current cell holds a matching resource, consume it; otherwise move.
///
/// With the default config the move is a uniformly random direction, and a
/// move off the grid simply fails for that tick.
#[derive(Debug, Clone, Default)]
pub struct ReactivePolicy {
    config: ReactiveConfig,
}

impl ReactivePolicy {
    pub fn new(config: ReactiveConfig) -> BehaviorResult<Self> {
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReactiveConfig {
        &self.config
    }

    fn matches(&self, kind: ResourceKind) -> bool {
        kind.class() == self.config.target
    }

    fn wander_direction(&self, agent: &AgentState, world: &GridWorld, rng: &mut AgentRng) -> Direction {
        if !self.config.prefer_unvisited {
            return rng.direction();
        }
        let in_bounds: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&d| world.is_valid(agent.position.step(d)))
            .collect();
        let fresh: Vec<Direction> = in_bounds
            .iter()
            .copied()
            .filter(|&d| !agent.has_visited(agent.position.step(d)))
            .collect();
        let pool = if fresh.is_empty() { &in_bounds } else { &fresh };
        match rng.choose(pool) {
            Some(&d) => d,
            None => rng.direction(),
        }
    }
}

impl DecisionPolicy for ReactivePolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Reactive
    }

    fn perception_radius(&self) -> u32 {
        self.config.seek_radius
    }

    /// Highest value first, then nearest, then first in `candidates`.
    fn decide_target(
        &self,
        agent:      &AgentState,
        candidates: &[Cell],
        ctx:        &DecisionContext<'_>,
        _rng:       &mut AgentRng,
    ) -> TargetDecision {
        let mut best: Option<(Cell, u32, u32)> = None;
        for &c in candidates {
            let Some(kind) = ctx.world.resource_at(c) else { continue };
            if !self.matches(kind) {
                continue;
            }
            let (value, dist) = (kind.value(), agent.position.manhattan(c));
            let better = best.is_none_or(|(_, bv, bd)| value > bv || (value == bv && dist < bd));
            if better {
                best = Some((c, value, dist));
            }
        }
        best.map_or(TargetDecision::Explore, |(c, _, _)| TargetDecision::Pursue(c))
    }

    fn decide(
        &self,
        agent: &mut AgentState,
        ctx:   &DecisionContext<'_>,
        rng:   &mut AgentRng,
    ) -> Vec<Intent> {
        if ctx.world.resource_at(agent.position).is_some_and(|k| self.matches(k)) {
            return vec![Intent::Collect];
        }

        if self.config.seek_radius > 0 {
            let visible = ctx.world.resources_within_radius(agent.position, self.config.seek_radius);
            if let TargetDecision::Pursue(target) = self.decide_target(agent, &visible, ctx, rng) {
                if let Some(dir) = greedy_step(agent.position, target, rng) {
                    return vec![Intent::Move(dir)];
                }
            }
        }

        vec![Intent::Move(self.wander_direction(agent, ctx.world, rng))]
    }
}
