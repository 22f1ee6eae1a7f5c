//! Agents that race each other for resources while burning energy.

use ga_agent::{AgentState, CompetitiveStrategy, INITIAL_ENERGY, PolicyKind};
use ga_core::{AgentRng, Cell};

use crate::policy::nearest;
use crate::pursuit::acquire_and_act;
use crate::{BehaviorError, BehaviorResult, DecisionContext, DecisionPolicy, EnergyRules, Intent, TargetDecision};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompetitiveConfig {
    pub strategy:           CompetitiveStrategy,
    pub perception_radius:  u32,
    pub energy:             EnergyRules,
    /// Conservative: a resource is contested when an active rival is
    /// strictly closer to it than this.
    pub contested_distance: u32,
    /// Balanced: added to a resource's distance for each active rival that is
    /// strictly closer to it.
    pub penalty_weight:     u32,
}

impl CompetitiveConfig {
    /// Defaults for `strategy`.
    pub fn for_strategy(strategy: CompetitiveStrategy) -> Self {
        let (perception_radius, cost_per_tick) = match strategy {
            CompetitiveStrategy::Aggressive => (8, 2.0),
            CompetitiveStrategy::Conservative => (4, 1.0),
            CompetitiveStrategy::Balanced => (6, 1.5),
        };
        Self {
            strategy,
            perception_radius,
            energy: EnergyRules {
                cost_per_tick,
                gain_per_collection: 30.0,
                death_threshold:     Some(0.0),
            },
            contested_distance: 3,
            penalty_weight: 3,
        }
    }
}

impl Default for CompetitiveConfig {
    fn default() -> Self {
        Self::for_strategy(CompetitiveStrategy::Balanced)
    }
}

/// Re-chooses the target every tick from the resources in view, according
/// to the configured [`CompetitiveStrategy`].
#[derive(Debug, Clone, Default)]
pub struct CompetitivePolicy {
    config: CompetitiveConfig,
}

impl CompetitivePolicy {
    pub fn new(config: CompetitiveConfig) -> BehaviorResult<Self> {
        let energy = config.energy;
        if energy.cost_per_tick < 0.0 || energy.gain_per_collection < 0.0 {
            return Err(BehaviorError::Config("energy cost and gain must not be negative".into()));
        }
        if energy.death_threshold.is_some_and(|t| t >= INITIAL_ENERGY) {
            return Err(BehaviorError::Config(format!(
                "death threshold must be below the initial energy {INITIAL_ENERGY}"
            )));
        }
        Ok(Self { config })
    }

    pub fn with_strategy(strategy: CompetitiveStrategy) -> Self {
        Self { config: CompetitiveConfig::for_strategy(strategy) }
    }

    pub fn config(&self) -> &CompetitiveConfig {
        &self.config
    }

    pub fn strategy(&self) -> CompetitiveStrategy {
        self.config.strategy
    }

    fn least_contested(&self, agent: &AgentState, candidates: &[Cell], ctx: &DecisionContext<'_>) -> Option<Cell> {
        let mut best: Option<(Cell, u32)> = None;
        for &c in candidates {
            let d = agent.position.manhattan(c);
            let rivals = ctx.active_peers_within(c, d) as u32;
            let score = d + self.config.penalty_weight * rivals;
            if best.is_none_or(|(_, s)| score < s) {
                best = Some((c, score));
            }
        }
        best.map(|(c, _)| c)
    }
}

impl DecisionPolicy for CompetitivePolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Competitive(self.config.strategy)
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
        ctx:        &DecisionContext<'_>,
        _rng:       &mut AgentRng,
    ) -> TargetDecision {
        if candidates.is_empty() {
            return TargetDecision::Explore;
        }
        let pick = match self.config.strategy {
            CompetitiveStrategy::Aggressive => nearest(agent.position, candidates),
            CompetitiveStrategy::Conservative => {
                let uncontested: Vec<Cell> = candidates
                    .iter()
                    .copied()
                    .filter(|&c| ctx.active_peers_within(c, self.config.contested_distance) == 0)
                    .collect();
                if uncontested.is_empty() {
                    return TargetDecision::Yield;
                }
                nearest(agent.position, &uncontested)
            }
            CompetitiveStrategy::Balanced => self.least_contested(agent, candidates, ctx),
        };
        pick.map_or(TargetDecision::Explore, TargetDecision::Pursue)
    }

    fn decide(
        &self,
        agent: &mut AgentState,
        ctx:   &DecisionContext<'_>,
        rng:   &mut AgentRng,
    ) -> Vec<Intent> {
        if ctx.world.has_resource(agent.position) {
            return vec![Intent::Collect];
        }
        let visible = ctx
            .world
            .resources_within_radius(agent.position, self.config.perception_radius);
        acquire_and_act(self, agent, visible, ctx, rng)
    }
}
