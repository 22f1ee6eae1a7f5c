//! Breadth-first planning forager.

use ga_agent::{AgentState, PolicyKind};
use ga_core::{AgentRng, Cell};
use tracing::debug;

use crate::policy::nearest;
use crate::pursuit::{Phase, acquire_and_act, advance, ensure_plan, phase, wander};
use crate::{BehaviorError, BehaviorResult, DecisionContext, DecisionPolicy, EnergyRules, Intent, TargetDecision};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalBasedConfig {
    pub perception_radius: u32,
    pub energy:            EnergyRules,
}

impl Default for GoalBasedConfig {
    fn default() -> Self {
        Self {
            perception_radius: 6,
            energy: EnergyRules {
                cost_per_tick:       1.0,
                gain_per_collection: 20.0,
                death_threshold:     None,
            },
        }
    }
}

/// Picks the nearest visible resource, plans a shortest path to it, and
/// follows the plan one move per tick.
///
/// The goal is kept across ticks.  It is dropped when collected, when the
/// agent can see that the resource is gone, or when no path exists.
#[derive(Debug, Clone, Default)]
pub struct GoalBasedPolicy {
    config: GoalBasedConfig,
}

impl GoalBasedPolicy {
    pub fn new(config: GoalBasedConfig) -> BehaviorResult<Self> {
        if config.energy.cost_per_tick < 0.0 {
            return Err(BehaviorError::Config("energy cost must not be negative".into()));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &GoalBasedConfig {
        &self.config
    }
}

impl DecisionPolicy for GoalBasedPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::GoalBased
    }

    fn perception_radius(&self) -> u32 {
        self.config.perception_radius
    }

    fn energy_rules(&self) -> EnergyRules {
        self.config.energy
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
        if let Some(goal) = agent.goal {
            let in_view = agent.position.manhattan(goal) <= self.config.perception_radius;
            if in_view && !ctx.world.has_resource(goal) {
                debug!(agent = %agent.id, %goal, "goal lost");
                agent.clear_goal();
            }
        }

        match phase(agent) {
            Phase::Reached(_) => vec![Intent::Collect],
            Phase::Executing(_) => advance(agent, ctx),
            Phase::Planning(_) => {
                if ensure_plan(agent, ctx) {
                    advance(agent, ctx)
                } else {
                    wander(agent, ctx, rng)
                }
            }
            Phase::NoGoal => {
                let visible = ctx
                    .world
                    .resources_within_radius(agent.position, self.config.perception_radius);
                acquire_and_act(self, agent, visible, ctx, rng)
            }
        }
    }
}
