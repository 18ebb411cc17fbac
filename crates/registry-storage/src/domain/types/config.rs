//! # Storage Configuration
//!
//! Settings for the record repository. Built once at startup and passed
//! in; nothing here is process-global. The table itself is bound by the
//! `TableStore` client.
//!
//! ## Environment
//!
//! - `REGISTRY_COMPRESSION_LEVEL`: DEFLATE level 0-9 (default: 9)
//! - `REGISTRY_MAX_PAYLOAD_BYTES`: largest inflated payload (default: 16 MB)

use crate::domain::codec::CodecConfig;
use std::env;

/// Configuration for the record repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Payload codec settings.
    pub codec: CodecConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            codec: CodecConfig::default(),
        }
    }
}

impl StorageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the process environment.
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read overrides through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("REGISTRY_COMPRESSION_LEVEL").and_then(|v| v.parse().ok()) {
            config = config.with_compression_level(level);
        }
        if let Some(limit) = lookup("REGISTRY_MAX_PAYLOAD_BYTES").and_then(|v| v.parse().ok()) {
            config = config.with_max_payload_bytes(limit);
        }

        config
    }

    /// Replace the codec configuration.
    pub fn with_codec_config(mut self, codec: CodecConfig) -> Self {
        self.codec = codec;
        self
    }

    /// Set the DEFLATE level (clamped to 9).
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.codec = self.codec.with_compression_level(level);
        self
    }

    /// Set the largest accepted inflated payload.
    pub fn with_max_payload_bytes(mut self, limit: usize) -> Self {
        self.codec = self.codec.with_max_decompressed_size(limit);
        self
    }
}
