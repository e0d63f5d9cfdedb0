//! Compression variant definitions

use crate::CompressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Closed set of compression strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompressionVariant {
    #[serde(rename = "JPEG")]
    Jpeg,
    #[serde(rename = "PNG")]
    Png,
    #[serde(rename = "GIF")]
    Gif,
}

impl CompressionVariant {
    pub const ALL: [CompressionVariant; 3] = [
        CompressionVariant::Jpeg,
        CompressionVariant::Png,
        CompressionVariant::Gif,
    ];

    /// Human-readable label used in compression output
    pub fn label(&self) -> &'static str {
        match self {
            CompressionVariant::Jpeg => "JPEG",
            CompressionVariant::Png => "PNG",
            CompressionVariant::Gif => "GIF",
        }
    }

    /// Infer the variant from a file extension, if it is one we know
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name).extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl fmt::Display for CompressionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CompressionVariant {
    type Err = CompressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(CompressionVariant::Jpeg),
            "png" => Ok(CompressionVariant::Png),
            "gif" => Ok(CompressionVariant::Gif),
            _ => Err(CompressError::UnknownVariant(s.to_string())),
        }
    }
}
