use ga_core::{AgentId, Cell};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {agent} cannot start on {cell}: off the grid or blocked")]
    InvalidStart { agent: AgentId, cell: Cell },

    #[error(transparent)]
    Core(#[from] ga_core::GaError),

    #[error(transparent)]
    World(#[from] ga_world::WorldError),

    #[error(transparent)]
    Agent(#[from] ga_agent::AgentError),

    #[error(transparent)]
    Behavior(#[from] ga_behavior::BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
