//! Mutable per-agent state.

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashSet;

use ga_core::{AgentId, Cell};
use ga_world::{Path, ResourceKind};

use crate::SpatialMemory;

/// Starting energy for every agent.
pub const INITIAL_ENERGY: f32 = 100.0;

// ── PolicyKind ────────────────────────────────────────────────────────────────

/// How a competitive agent weighs contested resources.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompetitiveStrategy {
    /// Always the nearest resource.
    Aggressive,
    /// Skips resources a rival is close to; yields when all are contested.
    Conservative,
    /// Nearest after a penalty per rival that is closer.
    Balanced,
}

impl CompetitiveStrategy {
    pub const ALL: [CompetitiveStrategy; 3] = [
        CompetitiveStrategy::Aggressive,
        CompetitiveStrategy::Conservative,
        CompetitiveStrategy::Balanced,
    ];
}

/// Which decision policy drives an agent.  Stored on the state for reporting.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolicyKind {
    Reactive,
    GoalBased,
    EpsilonGreedy,
    Cooperative,
    Competitive(CompetitiveStrategy),
}

impl PolicyKind {
    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::Reactive => "reactive",
            PolicyKind::GoalBased => "goal-based",
            PolicyKind::EpsilonGreedy => "epsilon-greedy",
            PolicyKind::Cooperative => "cooperative",
            PolicyKind::Competitive(CompetitiveStrategy::Aggressive) => "aggressive",
            PolicyKind::Competitive(CompetitiveStrategy::Conservative) => "conservative",
            PolicyKind::Competitive(CompetitiveStrategy::Balanced) => "balanced",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Status and counters ───────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentStatus {
    #[default]
    Active,
    /// Out of energy.  Terminal: the agent never acts again but stays in the
    /// roster for reporting.
    Incapacitated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentCounters {
    pub resources_collected: u32,
    pub points:              u32,
    /// Decision cycles the agent has taken.
    pub steps_taken:         u64,
    pub moves_made:          u64,
    /// Moves rejected because the target cell was off the grid or an obstacle.
    pub blocked_moves:       u64,
    pub collected_by_kind:   BTreeMap<ResourceKind, u32>,
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// Everything one agent owns.
///
/// `goal` and `plan` form the goal-pursuit state machine:
///
/// | `goal`   | `plan`    | Phase                                      |
/// |----------|-----------|--------------------------------------------|
/// | `None`   | empty     | no goal                                    |
/// | `Some`   | empty     | planning needed (or standing on the goal)  |
/// | `Some`   | non-empty | executing plan                             |
#[derive(Clone, Debug)]
pub struct AgentState {
    pub id:         AgentId,
    pub policy:     PolicyKind,
    pub position:   Cell,
    pub energy:     f32,
    pub status:     AgentStatus,
    pub goal:       Option<Cell>,
    pub plan:       Path,
    /// Present only for policies that learn where resources cluster.
    pub memory:     Option<SpatialMemory>,
    /// Exploration probability for epsilon-greedy agents.
    pub epsilon:    Option<f64>,
    /// Remaining ticks of work on a resource already collected.
    pub busy_ticks: u32,
    pub visited:    FxHashSet<Cell>,
    pub counters:   AgentCounters,
}

impl AgentState {
    pub fn new(id: AgentId, policy: PolicyKind, position: Cell) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(position);
        Self {
            id,
            policy,
            position,
            energy: INITIAL_ENERGY,
            status: AgentStatus::Active,
            goal: None,
            plan: Path::new(),
            memory: None,
            epsilon: None,
            busy_ticks: 0,
            visited,
            counters: AgentCounters::default(),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy_ticks > 0
    }

    pub fn incapacitate(&mut self) {
        self.status = AgentStatus::Incapacitated;
        self.clear_goal();
        self.busy_ticks = 0;
    }

    /// Drop the goal and whatever remains of the plan.
    pub fn clear_goal(&mut self) {
        self.goal = None;
        self.plan.clear();
    }

    /// Adopt `goal`.  The plan is discarded when the goal changes.
    pub fn set_goal(&mut self, goal: Cell) {
        if self.goal != Some(goal) {
            self.plan.clear();
        }
        self.goal = Some(goal);
    }

    /// Relocate to `cell` (already checked passable by the caller).
    pub fn move_to(&mut self, cell: Cell) {
        self.position = cell;
        self.visited.insert(cell);
        self.counters.moves_made += 1;
    }

    pub fn has_visited(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Credit a collected resource and start its work countdown.
    pub fn record_collection(&mut self, kind: ResourceKind, energy_gain: f32) {
        self.counters.resources_collected += 1;
        self.counters.points += kind.value();
        *self.counters.collected_by_kind.entry(kind).or_default() += 1;
        self.energy += energy_gain;
        self.busy_ticks = kind.work_ticks().saturating_sub(1);
    }
}
