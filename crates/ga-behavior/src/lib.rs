//! `ga-behavior` — how agents decide what to do each tick.
//!
//! # Crate layout
//!
//! | Module             | Contents                                                  |
//! |--------------------|-----------------------------------------------------------|
//! | [`intent`]         | `Intent` enum (`Move`, `Collect`, `Yield`, `Broadcast`)   |
//! | [`context`]        | `DecisionContext<'a>`, `PeerView`                         |
//! | [`policy`]         | `DecisionPolicy` trait, `TargetDecision`, `EnergyRules`   |
//! | [`pursuit`]        | Goal-pursuit state machine shared by planning policies    |
//! | [`reactive`]       | `ReactivePolicy`                                          |
//! | [`goal_based`]     | `GoalBasedPolicy` (BFS planning)                          |
//! | [`epsilon_greedy`] | `EpsilonGreedyPolicy` (spatial memory)                    |
//! | [`cooperative`]    | `CooperativePolicy` (target reservation messages)         |
//! | [`competitive`]    | `CompetitivePolicy` (energy, contested-target scoring)    |
//! | [`error`]          | `BehaviorError`, `BehaviorResult<T>`                      |
//!
//! # Turn model
//!
//! The simulation loop calls [`DecisionPolicy::decide`] for one agent at a
//! time, in creation order.  The policy gets `&mut` to that agent's own state
//! (goal, plan, memory, epsilon) and a read-only [`DecisionContext`] holding
//! the world, the planner, peer positions, and the messages drained for this
//! agent at the start of the tick.  It answers with a list of [`Intent`]s,
//! which the loop applies in order before the next agent's turn.

pub mod competitive;
pub mod context;
pub mod cooperative;
pub mod epsilon_greedy;
pub mod error;
pub mod goal_based;
pub mod intent;
pub mod policy;
pub mod pursuit;
pub mod reactive;


pub use competitive::{CompetitiveConfig, CompetitivePolicy};
pub use context::{DecisionContext, PeerView};
pub use cooperative::{CooperativeConfig, CooperativePolicy};
pub use epsilon_greedy::{EpsilonGreedyConfig, EpsilonGreedyPolicy};
pub use error::{BehaviorError, BehaviorResult};
pub use goal_based::{GoalBasedConfig, GoalBasedPolicy};
pub use intent::Intent;
pub use policy::{DecisionPolicy, EnergyRules, TargetDecision};
pub use reactive::{ReactiveConfig, ReactivePolicy};

pub use ga_agent::CompetitiveStrategy;
