//! Goal pursuit shared by the planning policies.
//!
//! ```text
//!   NO_GOAL ──pick target──▶ PLANNING ──path found──▶ EXECUTING_PLAN
//!      ▲                        │                          │
//!      └────── unreachable ─────┘                          ▼
//!      └──────────────── collect / goal lost ───── GOAL_REACHED
//! ```
//!
//! The phase is derived from the agent's `goal` and `plan` fields, so there is
//! no separate state to keep in sync.

use ga_agent::AgentState;
use ga_core::{AgentRng, Cell, Direction};
use tracing::debug;

use crate::{DecisionContext, DecisionPolicy, Intent, TargetDecision};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoGoal,
    Planning(Cell),
    Executing(Cell),
    Reached(Cell),
}

pub fn phase(agent: &AgentState) -> Phase {
    match agent.goal {
        None => Phase::NoGoal,
        Some(goal) if goal == agent.position => Phase::Reached(goal),
        Some(goal) if agent.plan.is_empty() => Phase::Planning(goal),
        Some(goal) => Phase::Executing(goal),
    }
}

/// Make sure a plan to the current goal exists.
///
/// Returns `false` and drops the goal if the planner finds no route.
pub fn ensure_plan(agent: &mut AgentState, ctx: &DecisionContext<'_>) -> bool {
    let Some(goal) = agent.goal else {
        return false;
    };
    if goal == agent.position || !agent.plan.is_empty() {
        return true;
    }
    agent.plan = ctx.planner.plan(ctx.world, agent.position, Some(goal));
    if agent.plan.is_empty() {
        debug!(agent = %agent.id, from = %agent.position, %goal, "goal unreachable");
        agent.clear_goal();
        return false;
    }
    true
}

/// Ask `policy` for a target among `candidates` and take the first step
/// toward it.
///
/// Targets the planner cannot reach are dropped from `candidates` and the
/// policy is asked again, so an agent only falls back to wandering when
/// nothing it would pick is reachable.
pub fn acquire_and_act<P: DecisionPolicy + ?Sized>(
    policy:         &P,
    agent:          &mut AgentState,
    mut candidates: Vec<Cell>,
    ctx:            &DecisionContext<'_>,
    rng:            &mut AgentRng,
) -> Vec<Intent> {
    loop {
        match policy.decide_target(agent, &candidates, ctx, rng) {
            TargetDecision::Pursue(target) => {
                agent.set_goal(target);
                if ensure_plan(agent, ctx) {
                    return advance(agent, ctx);
                }
                let before = candidates.len();
                candidates.retain(|&c| c != target);
                if candidates.len() == before {
                    return wander(agent, ctx, rng);
                }
            }
            TargetDecision::Explore => {
                agent.clear_goal();
                return wander(agent, ctx, rng);
            }
            TargetDecision::Yield => {
                agent.clear_goal();
                return vec![Intent::Yield];
            }
        }
    }
}

/// One tick of progress on an already planned goal.
pub fn advance(agent: &mut AgentState, ctx: &DecisionContext<'_>) -> Vec<Intent> {
    if agent.goal == Some(agent.position) {
        return vec![Intent::Collect];
    }
    match agent.plan.pop_front() {
        Some(dir) => step(ctx, agent.position, dir),
        None => Vec::new(),
    }
}

/// A random step, collecting if it lands on a resource.
pub fn wander(agent: &AgentState, ctx: &DecisionContext<'_>, rng: &mut AgentRng) -> Vec<Intent> {
    step(ctx, agent.position, rng.direction())
}

/// `Move(dir)`, followed by `Collect` when the destination holds a resource.
pub fn step(ctx: &DecisionContext<'_>, from: Cell, dir: Direction) -> Vec<Intent> {
    let to = from.step(dir);
    let mut intents = vec![Intent::Move(dir)];
    if ctx.world.is_passable(to) && ctx.world.has_resource(to) {
        intents.push(Intent::Collect);
    }
    intents
}

/// Single-axis step toward `to`.  When both axes differ the axis is chosen
/// with a fair coin.  `None` if already there.
pub fn greedy_step(from: Cell, to: Cell, rng: &mut AgentRng) -> Option<Direction> {
    let horizontal = match (to.x - from.x).signum() {
        1 => Some(Direction::Right),
        -1 => Some(Direction::Left),
        _ => None,
    };
    let vertical = match (to.y - from.y).signum() {
        1 => Some(Direction::Down),
        -1 => Some(Direction::Up),
        _ => None,
    };
    match (horizontal, vertical) {
        (Some(h), Some(v)) => Some(if rng.gen_bool(0.5) { h } else { v }),
        (h, v) => h.or(v),
    }
}
