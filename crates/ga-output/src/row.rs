//! Plain data row types written by output backends.

use ga_agent::AgentState;
use ga_core::Tick;
use ga_sim::TickSummary;

/// One agent's counters and position at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick:                u64,
    pub agent_id:            u32,
    pub policy:              &'static str,
    pub x:                   i32,
    pub y:                   i32,
    pub energy:              f32,
    pub resources_collected: u32,
    pub points:              u32,
    pub steps_taken:         u64,
    pub active:              bool,
    /// 0 for agents without spatial memory.
    pub regions_explored:    u32,
    /// Pooled discoveries / visits over the agent's memory; 0 without memory.
    pub average_density:     f64,
}

impl AgentSnapshotRow {
    pub fn from_state(tick: Tick, state: &AgentState) -> Self {
        let memory = state.memory.as_ref().map(|m| m.summary()).unwrap_or_default();
        Self {
            tick:                tick.0,
            agent_id:            state.id.0,
            policy:              state.policy.label(),
            x:                   state.position.x,
            y:                   state.position.y,
            energy:              state.energy,
            resources_collected: state.counters.resources_collected,
            points:              state.counters.points,
            steps_taken:         state.counters.steps_taken,
            active:              state.is_active(),
            regions_explored:    memory.regions_explored as u32,
            average_density:     memory.average_density,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:                u64,
    pub acted_agents:        u64,
    pub collected:           u64,
    pub resources_remaining: u64,
    pub active_agents:       u64,
}

impl TickSummaryRow {
    pub fn new(tick: Tick, summary: &TickSummary) -> Self {
        Self {
            tick:                tick.0,
            acted_agents:        summary.acted as u64,
            collected:           summary.collected as u64,
            resources_remaining: summary.resources_remaining as u64,
            active_agents:       summary.active_agents as u64,
        }
    }
}
