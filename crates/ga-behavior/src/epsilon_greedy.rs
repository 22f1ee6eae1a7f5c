//! Learning forager: explore with probability epsilon, otherwise head for the
//! densest region remembered so far.

use ga_agent::{AgentState, PolicyKind, SpatialMemory};
use ga_core::{AgentRng, Cell};

use crate::error::probability;
use crate::pursuit::greedy_step;
use crate::{BehaviorError, BehaviorResult, DecisionContext, DecisionPolicy, Intent, TargetDecision};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpsilonGreedyConfig {
    /// Initial exploration probability.
    pub epsilon:     f64,
    /// Multiplied into epsilon after every decision.
    pub decay:       f64,
    /// Epsilon never decays below this.
    pub min_epsilon: f64,
    /// Side length of a memory region, in cells.
    pub region_size: u32,
}

impl Default for EpsilonGreedyConfig {
    fn default() -> Self {
        Self { epsilon: 0.3, decay: 0.995, min_epsilon: 0.1, region_size: 3 }
    }
}

/// Each tick the agent:
///
/// 1. records the visit (and whether a resource was here) in its
///    [`SpatialMemory`];
/// 2. collects if standing on a resource;
/// 3. on reaching its target (or having none), draws a new one: a uniformly
///    random cell with probability epsilon, else a random cell of the
///    best-known region;
/// 4. takes one greedy single-axis step toward the target;
/// 5. decays epsilon.
///
/// The greedy step ignores obstacles; a blocked move just fails.
#[derive(Debug, Clone)]
pub struct EpsilonGreedyPolicy {
    config:   EpsilonGreedyConfig,
    template: SpatialMemory,
}

impl EpsilonGreedyPolicy {
    pub fn new(config: EpsilonGreedyConfig) -> BehaviorResult<Self> {
        probability("epsilon", config.epsilon)?;
        probability("decay", config.decay)?;
        probability("min_epsilon", config.min_epsilon)?;
        if config.min_epsilon > config.epsilon {
            return Err(BehaviorError::Config(format!(
                "min_epsilon {} exceeds epsilon {}",
                config.min_epsilon, config.epsilon
            )));
        }
        let template = SpatialMemory::new(config.region_size)?;
        Ok(Self { config, template })
    }

    pub fn config(&self) -> &EpsilonGreedyConfig {
        &self.config
    }

    fn decayed(&self, epsilon: f64) -> f64 {
        (epsilon * self.config.decay).max(self.config.min_epsilon)
    }
}

impl Default for EpsilonGreedyPolicy {
    fn default() -> Self {
        Self {
            config:   EpsilonGreedyConfig::default(),
            template: SpatialMemory::default(),
        }
    }
}

impl DecisionPolicy for EpsilonGreedyPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::EpsilonGreedy
    }

    /// Only the agent's own cell is sensed.
    fn perception_radius(&self) -> u32 {
        0
    }

    fn init(&self, agent: &mut AgentState) {
        agent.memory = Some(self.template.clone());
        agent.epsilon = Some(self.config.epsilon);
    }

    /// Ignores `candidates`: targets come from memory, not perception.
    fn decide_target(
        &self,
        agent:       &AgentState,
        _candidates: &[Cell],
        ctx:         &DecisionContext<'_>,
        rng:         &mut AgentRng,
    ) -> TargetDecision {
        let (w, h) = (ctx.world.width(), ctx.world.height());
        let epsilon = agent.epsilon.unwrap_or(self.config.epsilon);
        let explore = rng.gen_bool(epsilon);

        if !explore {
            let best = agent
                .memory
                .as_ref()
                .and_then(|m| m.best_region().map(|r| m.region_bounds(r)));
            if let Some((min, max)) = best {
                let x = rng.gen_range(min.x..=max.x).clamp(0, w - 1);
                let y = rng.gen_range(min.y..=max.y).clamp(0, h - 1);
                return TargetDecision::Pursue(Cell::new(x, y));
            }
        }
        TargetDecision::Pursue(rng.cell_in(w, h))
    }

    fn decide(
        &self,
        agent: &mut AgentState,
        ctx:   &DecisionContext<'_>,
        rng:   &mut AgentRng,
    ) -> Vec<Intent> {
        let pos = agent.position;
        let found = ctx.world.has_resource(pos);
        if let Some(memory) = agent.memory.as_mut() {
            memory.register_visit(pos, found);
        }

        let mut intents = Vec::with_capacity(2);
        if found {
            intents.push(Intent::Collect);
            agent.clear_goal();
        }

        if agent.goal.is_none_or(|g| g == pos) {
            match self.decide_target(agent, &[], ctx, rng) {
                TargetDecision::Pursue(target) => agent.set_goal(target),
                TargetDecision::Explore | TargetDecision::Yield => agent.clear_goal(),
            }
        }
        if let Some(dir) = agent.goal.and_then(|g| greedy_step(pos, g, rng)) {
            intents.push(Intent::Move(dir));
        }

        let epsilon = agent.epsilon.unwrap_or(self.config.epsilon);
        agent.epsilon = Some(self.decayed(epsilon));
        intents
    }
}
