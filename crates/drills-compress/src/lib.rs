//! Image compression strategies (message-only, no real encoding)

mod compressor;
mod error;
mod types;

pub use compressor::ImageCompressor;
pub use error::CompressError;
pub use types::CompressionVariant;
