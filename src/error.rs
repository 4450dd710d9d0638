use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeasonError {
    #[error("invalid month number: {0}")]
    InvalidMonth(u32),

    #[error("no target to apply the season label to")]
    AbsentTarget,

    #[error("unsupported location convention: {0}")]
    UnsupportedConvention(String),
}
