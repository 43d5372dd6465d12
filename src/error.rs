/// Errors raised by the simulation engine.
///
/// Both kinds are raised at the point of violation and never recovered
/// internally; callers decide whether to propagate or drop the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed construction arguments: bad odds, non-positive amounts,
    /// out-of-range bin numbers, unknown player classes, bad limits.
    InvalidObject(String),
    /// A bet that violates the table limits or the running-total constraint.
    InvalidBet(String),
}

impl Error {
    pub fn object(msg: impl Into<String>) -> Self {
        Self::InvalidObject(msg.into())
    }
    pub fn bet(msg: impl Into<String>) -> Self {
        Self::InvalidBet(msg.into())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidObject(s) => write!(f, "invalid object: {}", s),
            Self::InvalidBet(s) => write!(f, "invalid bet: {}", s),
        }
    }
}

impl std::error::Error for Error {}
