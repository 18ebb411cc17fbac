//! # Payload Codec Module
//!
//! Raw DEFLATE payload blobs with a legacy uncompressed fallback.

mod config;
mod payload_codec;
pub mod security;


// Re-export public types
pub use config::{CodecConfig, PayloadFormat, BEST_COMPRESSION_LEVEL};
pub use payload_codec::PayloadCodec;
