//! # Payload Codec
//!
//! Moves the entity payload in and out of the reserved `data` attribute.
//!
//! ## Algorithm
//!
//! 1. **Write Path**: payload → canonical JSON → UTF-8 → raw DEFLATE (no header)
//! 2. **Read Path (compressed)**: blob → inflate → UTF-8 → JSON
//! 3. **Read Path (legacy)**: plain map → JSON, no inflation
//!
//! The read path is selected from the stored attribute's kind, not from a
//! version flag, so tables holding both formats decode transparently.

use super::config::{CodecConfig, PayloadFormat};
use super::security::validate_decompressed_size;
use crate::domain::errors::{DecodeError, EncodeError};
use crate::domain::item::{AttributeValue, StoredPayloadKind};
use crate::domain::keys::DATA_ATTRIBUTE;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::io::{Read, Write};

/// Compresses and restores record payloads.
#[derive(Debug, Clone, Default)]
pub struct PayloadCodec {
    config: CodecConfig,
}

impl PayloadCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a payload into the value stored under the `data` attribute.
    ///
    /// The payload goes through `serde_json::Value` first so object keys are
    /// written in sorted order: equal payloads always produce equal bytes.
    pub fn encode<T: Serialize>(&self, payload: &T) -> Result<AttributeValue, EncodeError> {
        let value = serde_json::to_value(payload)?;
        match self.config.write_format {
            PayloadFormat::Compressed => {
                let json = serde_json::to_vec(&value)?;
                Ok(AttributeValue::B(self.compress(&json)?))
            }
            PayloadFormat::Legacy => match value {
                Value::Object(map) => Ok(AttributeValue::M(map)),
                _ => Err(EncodeError::NotAnObject),
            },
        }
    }

    /// Decode a stored `data` attribute into a typed payload.
    pub fn decode<T: DeserializeOwned>(&self, stored: &AttributeValue) -> Result<T, DecodeError> {
        let value = self.decode_value(stored)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Decode a stored `data` attribute into untyped JSON.
    pub fn decode_value(&self, stored: &AttributeValue) -> Result<Value, DecodeError> {
        let unexpected = || DecodeError::UnexpectedAttributeKind {
            attribute: DATA_ATTRIBUTE,
            expected: "binary or map",
            found: stored.kind_name(),
        };

        let kind = StoredPayloadKind::of(stored).ok_or_else(unexpected)?;
        match (kind, stored) {
            (StoredPayloadKind::Compressed, AttributeValue::B(blob)) => {
                let inflated = self.inflate(blob)?;
                let text = String::from_utf8(inflated)?;
                Ok(serde_json::from_str(&text)?)
            }
            (StoredPayloadKind::Legacy, AttributeValue::M(map)) => Ok(Value::Object(map.clone())),
            _ => Err(unexpected()),
        }
    }

    /// Raw DEFLATE at the configured level.
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let mut encoder = DeflateEncoder::new(
            Vec::with_capacity(data.len() / 2),
            Compression::new(self.config.compression_level),
        );
        encoder
            .write_all(data)
            .map_err(EncodeError::Compression)?;
        encoder.finish().map_err(EncodeError::Compression)
    }

    /// Inflate a raw DEFLATE blob, bounded by `max_decompressed_size`.
    pub fn inflate(&self, blob: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let limit = self.config.max_decompressed_size;
        let mut decoder = DeflateDecoder::new(blob).take(limit as u64 + 1);
        let mut output = Vec::new();
        decoder
            .read_to_end(&mut output)
            .map_err(DecodeError::Inflate)?;
        validate_decompressed_size(output.len(), limit)
            .map_err(|limit| DecodeError::PayloadTooLarge { limit })?;
        Ok(output)
    }
}
