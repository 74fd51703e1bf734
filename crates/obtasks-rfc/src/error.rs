use thiserror::Error;

/// Duration and recurrence grammar errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RfcError {
    #[error("duration parsing error: {0}")]
    DurationFormat(String),

    #[error("RRULE parsing error: {0}")]
    RuleParse(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
