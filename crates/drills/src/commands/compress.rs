use drills_compress::{CompressionVariant, ImageCompressor};
use tracing::debug;

use crate::config::Config;

pub fn run(
    file: &str,
    strategy: Option<CompressionVariant>,
    auto: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let mut compressor = ImageCompressor::new();
    let resolved = resolve_strategy(file, strategy, auto, config);
    debug!(file, ?resolved, "strategy resolved");
    if let Some(variant) = resolved {
        compressor.set_strategy(variant);
    }

    println!("{}", compressor.compress(file)?);
    Ok(())
}

/// Explicit flag first, then the file extension (with --auto), then the
/// configured default.
fn resolve_strategy(
    file: &str,
    strategy: Option<CompressionVariant>,
    auto: bool,
    config: &Config,
) -> Option<CompressionVariant> {
    strategy
        .or_else(|| {
            if auto {
                CompressionVariant::from_file_name(file)
            } else {
                None
            }
        })
        .or(config.default_strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_strategy_wins() {
        let config = Config {
            default_strategy: Some(CompressionVariant::Gif),
            ..Config::new()
        };
        let resolved = resolve_strategy("a.png", Some(CompressionVariant::Jpeg), true, &config);
        assert_eq!(resolved, Some(CompressionVariant::Jpeg));
    }

    #[test]
    fn test_auto_uses_extension() {
        let config = Config {
            default_strategy: Some(CompressionVariant::Gif),
            ..Config::new()
        };
        assert_eq!(
            resolve_strategy("a.png", None, true, &config),
            Some(CompressionVariant::Png)
        );
        // Unknown extension falls through to the default
        assert_eq!(
            resolve_strategy("a.tiff", None, true, &config),
            Some(CompressionVariant::Gif)
        );
    }

    #[test]
    fn test_extension_ignored_without_auto() {
        let config = Config::new();
        assert_eq!(resolve_strategy("a.png", None, false, &config), None);
    }

    #[test]
    fn test_run_without_strategy_fails() {
        let err = run("test.gif", None, false, &Config::new()).unwrap_err();
        assert_eq!(err.to_string(), "Compression strategy not set");
    }

    #[test]
    fn test_run_with_strategy() {
        assert!(run("test.gif", Some(CompressionVariant::Gif), false, &Config::new()).is_ok());
    }
}
