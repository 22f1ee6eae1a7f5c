use thiserror::Error;

use ga_core::AgentId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("memory region size must be positive")]
    ZeroRegionSize,

    #[error("mailbox capacity must be positive")]
    ZeroMailboxCapacity,

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
}

pub type AgentResult<T> = Result<T, AgentError>;
