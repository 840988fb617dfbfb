use thiserror::Error;

/// Errors produced when parsing wire names into domain enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown scenario '{0}', expected one of: conservative, normal, optimistic")]
    UnknownScenario(String),

    #[error("Unknown region '{0}'")]
    UnknownRegion(String),

    #[error("Unknown segment '{0}'")]
    UnknownSegment(String),
}
