//! # Codec Configuration
//!
//! Immutable settings for the payload codec. Built once and handed to
//! [`PayloadCodec::new`](super::PayloadCodec::new); there is no global
//! codec state.

use super::security::MAX_DECOMPRESSED_SIZE;

/// Maximum DEFLATE level.
pub const BEST_COMPRESSION_LEVEL: u32 = 9;

/// Format written by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    /// Raw DEFLATE blob (current format).
    Compressed,
    /// Plain attribute map (pre-compression format, for migration tooling).
    Legacy,
}

/// Configuration for payload encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// DEFLATE level, 0-9 (default: 9, maximum compression).
    pub compression_level: u32,
    /// Largest accepted inflated payload in bytes (default: 16 MB).
    pub max_decompressed_size: usize,
    /// Format produced by `encode` (default: compressed).
    pub write_format: PayloadFormat,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            compression_level: BEST_COMPRESSION_LEVEL,
            max_decompressed_size: MAX_DECOMPRESSED_SIZE,
            write_format: PayloadFormat::Compressed,
        }
    }
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the DEFLATE level. Values above 9 are clamped.
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(BEST_COMPRESSION_LEVEL);
        self
    }

    /// Set the inflated size limit.
    pub fn with_max_decompressed_size(mut self, size: usize) -> Self {
        self.max_decompressed_size = size;
        self
    }

    /// Set the format written by `encode`.
    pub fn with_write_format(mut self, format: PayloadFormat) -> Self {
        self.write_format = format;
        self
    }

    /// Config that writes the legacy uncompressed format.
    pub fn legacy() -> Self {
        Self::default().with_write_format(PayloadFormat::Legacy)
    }
}
