use crate::{CompressError, CompressionVariant};
use tracing::info;

/// Applies the currently selected compression strategy to a file name
#[derive(Debug, Clone, Default)]
pub struct ImageCompressor {
    strategy: Option<CompressionVariant>,
}

impl ImageCompressor {
    /// Create a compressor with no strategy selected
    pub fn new() -> Self {
        Self { strategy: None }
    }

    pub fn with_strategy(strategy: CompressionVariant) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    pub fn set_strategy(&mut self, strategy: CompressionVariant) {
        self.strategy = Some(strategy);
    }

    pub fn strategy(&self) -> Option<CompressionVariant> {
        self.strategy
    }

    /// Run the selected strategy against `file_name`.
    ///
    /// Nothing is read or written; the strategy only reports what it would
    /// do. The report is logged and returned.
    pub fn compress(&self, file_name: &str) -> Result<String, CompressError> {
        let strategy = self.strategy.ok_or(CompressError::StrategyNotSet)?;
        let message = format!(
            "Compressing {} using {} compression.",
            file_name,
            strategy.label()
        );
        info!(file_name, strategy = strategy.label(), "{}", message);
        Ok(message)
    }
}
