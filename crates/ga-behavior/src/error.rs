use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error("{name} must lie in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },

    #[error(transparent)]
    Agent(#[from] ga_agent::AgentError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;

/// Check that `value` is a probability.
pub(crate) fn probability(name: &'static str, value: f64) -> BehaviorResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BehaviorError::Probability { name, value })
    }
}
