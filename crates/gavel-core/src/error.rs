use thiserror::Error;

/// Errors surfaced by the fuzzy-inference engine.
///
/// With the fixed rule table the agent installs these are programming errors,
/// but they are reported rather than panicking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FuzzyError {
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    #[error("variable '{variable}' has no term '{term}'")]
    UnknownTerm { variable: String, term: String },
}

/// Errors surfaced by the bidding agent.
#[derive(Debug, Error)]
pub enum AgentError {
    /// A non-positive quantity would make the target unit price undefined.
    #[error("invalid quantity {0}: must be positive")]
    InvalidQuantity(i64),

    #[error(transparent)]
    Engine(#[from] FuzzyError),
}

/// Errors surfaced by the interactive session loop.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Agent(#[from] AgentError),
}
