//! Fluent builder for constructing a [`Sim`].

use ga_agent::AgentStoreBuilder;
use ga_behavior::DecisionPolicy;
use ga_core::{AgentId, Cell, SimConfig, Tick};
use ga_world::{GridWorld, Planner};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — step budget, seed, snapshot interval, mailbox capacity
/// - [`GridWorld`] — from [`ga_world::GridWorldBuilder`]
/// - `P: Planner` — the path planner (e.g. [`ga_world::BfsPlanner`])
/// - at least one agent, added with [`agent`](Self::agent)
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, world, BfsPlanner)
///     .agent(Cell::new(0, 0), CooperativePolicy::default())
///     .agent(Cell::new(9, 9), CooperativePolicy::default())
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: Planner> {
    config:  SimConfig,
    world:   GridWorld,
    planner: P,
    agents:  Vec<(Cell, Box<dyn DecisionPolicy>)>,
}

impl<P: Planner> SimBuilder<P> {
    pub fn new(config: SimConfig, world: GridWorld, planner: P) -> Self {
        Self { config, world, planner, agents: Vec::new() }
    }

    /// Add an agent starting at `start`, driven by `policy`.  Ids are assigned
    /// in call order.
    pub fn agent(self, start: impl Into<Cell>, policy: impl DecisionPolicy) -> Self {
        self.boxed_agent(start, Box::new(policy))
    }

    /// [`agent`](Self::agent) for a policy chosen at runtime.
    pub fn boxed_agent(mut self, start: impl Into<Cell>, policy: Box<dyn DecisionPolicy>) -> Self {
        self.agents.push((start.into(), policy));
        self
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Validate inputs, create the agent store, let each policy initialise
    /// its agent, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;
        if self.agents.is_empty() {
            return Err(SimError::Config("at least one agent is required".into()));
        }

        let mut store = AgentStoreBuilder::new(self.config.seed)
            .mailbox_capacity(self.config.mailbox_capacity);
        let mut policies = Vec::with_capacity(self.agents.len());
        for (start, policy) in self.agents {
            let agent = AgentId(store.len() as u32);
            if !self.world.is_passable(start) {
                return Err(SimError::InvalidStart { agent, cell: start });
            }
            store.add(policy.kind(), start);
            policies.push(policy);
        }

        let (mut agents, rngs) = store.build()?;
        for (state, policy) in agents.states.iter_mut().zip(&policies) {
            policy.init(state);
        }

        Ok(Sim {
            config:  self.config,
            tick:    Tick::ZERO,
            world:   self.world,
            agents,
            rngs,
            policies,
            planner: self.planner,
        })
    }
}
