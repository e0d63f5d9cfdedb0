use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompressError {
    /// `compress` was called before any strategy was selected
    #[error("Compression strategy not set")]
    StrategyNotSet,

    #[error("unknown compression strategy: {0}")]
    UnknownVariant(String),
}
