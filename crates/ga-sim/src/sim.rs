//! The `Sim` struct and its tick loop.

use std::fmt;

use ga_agent::{AgentRngs, AgentState, AgentStore, Mailboxes, Message};
use ga_behavior::{DecisionContext, DecisionPolicy, EnergyRules, Intent, PeerView};
use ga_core::{AgentId, SimConfig, Tick};
use ga_world::{GridWorld, Planner};
use tracing::{debug, info, trace};

use crate::{SimObserver, SimResult};

// ── Reporting types ───────────────────────────────────────────────────────────

/// Why [`Sim::run`] returned.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StopReason {
    ResourcesDepleted,
    AllIncapacitated,
    StepBudgetExhausted,
}

impl StopReason {
    pub fn as_str(self) -> &'static str {
        match self {
            StopReason::ResourcesDepleted => "resources depleted",
            StopReason::AllIncapacitated => "all agents incapacitated",
            StopReason::StepBudgetExhausted => "step budget exhausted",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate outcome of one tick, passed to
/// [`SimObserver::on_tick_end`][crate::SimObserver::on_tick_end].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickSummary {
    /// Agents whose policy was asked to decide this tick.
    pub acted:               usize,
    /// Resources collected this tick.
    pub collected:           usize,
    pub resources_remaining: usize,
    /// Agents still active at the end of the tick.
    pub active_agents:       usize,
}

/// What happened on one agent's turn.
enum Turn {
    Inactive,
    Incapacitated,
    Busy,
    Acted { collected: usize },
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  All fields are public for
/// inspection between ticks; mutating them mid-run is the caller's
/// responsibility.
pub struct Sim<P: Planner> {
    pub config: SimConfig,

    /// Next tick to be processed.
    pub tick: Tick,

    pub world: GridWorld,

    /// Agent states and mailboxes.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// One policy per agent, indexed by `AgentId`.
    pub policies: Vec<Box<dyn DecisionPolicy>>,

    pub planner: P,
}

impl<P: Planner> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until a stop condition holds and report which one.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StopReason> {
        let reason = loop {
            if let Some(reason) = self.stop_reason() {
                break reason;
            }
            self.step(observer)?;
        };
        info!(
            tick = self.tick.0,
            %reason,
            collected = self.agents.total_collected(),
            remaining = self.world.resource_count(),
            active = self.agents.active_count(),
            "simulation finished"
        );
        observer.on_sim_end(self.tick, reason);
        Ok(reason)
    }

    /// Run exactly `n` ticks from the current position, ignoring stop
    /// conditions.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// The condition that would end [`run`](Self::run) now, if any.
    pub fn stop_reason(&self) -> Option<StopReason> {
        if self.config.stop_when_depleted && self.world.is_depleted() {
            Some(StopReason::ResourcesDepleted)
        } else if self.agents.all_incapacitated() {
            Some(StopReason::AllIncapacitated)
        } else if self.tick >= self.config.end_tick() {
            Some(StopReason::StepBudgetExhausted)
        } else {
            None
        }
    }

    pub fn agent(&self, agent: AgentId) -> Option<&AgentState> {
        self.agents.get(agent)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now)?;
        observer.on_tick_end(now, &summary);
        if self.config.is_snapshot_tick(now) {
            observer.on_snapshot(now, &self.world, &self.agents);
        }
        self.tick.advance();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<TickSummary> {
        // ── Phase 1: drain every inbox ────────────────────────────────────
        //
        // Done for all agents before anyone acts, so a message broadcast
        // during this tick is read on the recipient's next turn no matter
        // where it sits in the acting order.
        let inboxes = (0..self.agents.count())
            .map(|i| self.agents.mailboxes.drain(AgentId(i as u32)))
            .collect::<Result<Vec<_>, _>>()?;

        // ── Phase 2: sequential turns in ascending AgentId order ──────────
        let mut summary = TickSummary::default();
        for (i, inbox) in inboxes.iter().enumerate() {
            match self.take_turn(AgentId(i as u32), now, inbox) {
                Turn::Acted { collected } => {
                    summary.acted += 1;
                    summary.collected += collected;
                }
                Turn::Inactive | Turn::Incapacitated | Turn::Busy => {}
            }
        }

        summary.resources_remaining = self.world.resource_count();
        summary.active_agents = self.agents.active_count();
        Ok(summary)
    }

    fn take_turn(&mut self, agent: AgentId, now: Tick, inbox: &[Message]) -> Turn {
        let policy = &self.policies[agent.index()];
        let rules = policy.energy_rules();

        // Explicit field borrows so the borrow checker sees disjoint access.
        let peers = peer_views(&self.agents.states, agent);
        let AgentStore { states, mailboxes } = &mut self.agents;
        let state = &mut states[agent.index()];

        if !state.is_active() {
            return Turn::Inactive;
        }

        state.energy -= rules.cost_per_tick;
        if let Some(threshold) = rules.death_threshold {
            if state.energy <= threshold {
                debug!(agent = %agent, energy = state.energy, tick = now.0, "agent incapacitated");
                state.incapacitate();
                return Turn::Incapacitated;
            }
        }

        if state.is_busy() {
            state.busy_ticks -= 1;
            return Turn::Busy;
        }

        let intents = {
            let ctx = DecisionContext::new(now, &self.world, &self.planner, &peers, inbox);
            policy.decide(state, &ctx, self.rngs.get_mut(agent))
        };
        state.counters.steps_taken += 1;

        let collected = apply_intents(state, &mut self.world, mailboxes, rules, intents);
        Turn::Acted { collected }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Every agent except `agent`, in id order.
fn peer_views(states: &[AgentState], agent: AgentId) -> Vec<PeerView> {
    states
        .iter()
        .filter(|s| s.id != agent)
        .map(|s| PeerView { id: s.id, position: s.position, active: s.is_active() })
        .collect()
}

/// Apply one agent's intents in order and return how many resources it
/// collected.
///
/// A rejected move (off the grid, into an obstacle) leaves the agent in place
/// and discards its remaining plan so the policy replans next turn.  Moves are
/// also ignored once a collection has made the agent busy.
fn apply_intents(
    state:     &mut AgentState,
    world:     &mut GridWorld,
    mailboxes: &mut Mailboxes,
    rules:     EnergyRules,
    intents:   Vec<Intent>,
) -> usize {
    let mut collected = 0;
    for intent in intents {
        match intent {
            Intent::Move(dir) => {
                if state.is_busy() {
                    continue;
                }
                let to = state.position.step(dir);
                if world.is_passable(to) {
                    trace!(agent = %state.id, from = %state.position, %to, "move");
                    state.move_to(to);
                } else {
                    trace!(agent = %state.id, at = %state.position, %dir, "move blocked");
                    state.counters.blocked_moves += 1;
                    state.plan.clear();
                }
            }

            Intent::Collect => {
                let at = state.position;
                if let Some(kind) = world.take_resource(at) {
                    state.record_collection(kind, rules.gain_per_collection);
                    collected += 1;
                    debug!(agent = %state.id, %at, %kind, "collected");
                }
                if state.goal == Some(at) {
                    state.clear_goal();
                }
            }

            Intent::Yield => {}

            Intent::Broadcast { kind, payload } => {
                mailboxes.broadcast(state.id, kind, payload);
            }
        }
    }
    collected
}
