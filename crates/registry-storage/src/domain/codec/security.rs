//! # Codec Security
//!
//! Limits applied when inflating stored payloads.
//!
//! ## Security Invariants
//!
//! - Decompression bomb prevention (max output size)

/// Default maximum inflated payload size (16 MB).
pub const MAX_DECOMPRESSED_SIZE: usize = 16 * 1024 * 1024;

/// Validate that an inflated payload stays within `limit`.
///
/// The inflater reads at most `limit + 1` bytes, so an oversized payload
/// shows up as one byte too many.
pub fn validate_decompressed_size(decompressed_size: usize, limit: usize) -> Result<(), usize> {
    if decompressed_size > limit {
        return Err(limit);
    }
    Ok(())
}
