//! # Item Encoding
//!
//! Turns a [`Dao`] into a flat storage item and back.
//!
//! ## Item Layout
//!
//! ```text
//! type    : S  discriminant
//! data    : B  raw DEFLATE of {header fields.., "payload": {..}}
//!           M  same object, legacy uncompressed form
//! version : S  opaque version
//! PK0..SK3: S  derived keys, recomputed on every encode
//! ```
//!
//! Decoding reads `type`, `data` and `version` only. Derived key attributes
//! are never read back, so a tampered or stale key on a stored item cannot
//! leak into a re-encoded one.

use super::dao::Dao;
use super::envelope::{Record, RecordHeader, RecordVersion, TicketDao};
use super::payloads::TypedFields;
use super::record_type::{RecordType, TicketKind};
use crate::domain::codec::PayloadCodec;
use crate::domain::errors::{DecodeError, StorageError};
use crate::domain::item::{AttributeValue, Item};
use crate::domain::keys::{DATA_ATTRIBUTE, TYPE_ATTRIBUTE, VERSION_ATTRIBUTE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct EnvelopeRef<'a, P> {
    #[serde(flatten)]
    header: &'a RecordHeader,
    payload: &'a P,
}

#[derive(Deserialize)]
struct Envelope<P> {
    #[serde(flatten)]
    header: RecordHeader,
    payload: P,
}

fn encode_record<P: Serialize + TypedFields>(
    codec: &PayloadCodec,
    record: &Record<P>,
) -> Result<AttributeValue, StorageError> {
    record.payload.check_attributes()?;
    let envelope = EnvelopeRef {
        header: &record.header,
        payload: &record.payload,
    };
    Ok(codec.encode(&envelope)?)
}

fn decode_record<P: DeserializeOwned>(
    codec: &PayloadCodec,
    data: &AttributeValue,
    version: Option<RecordVersion>,
) -> Result<Record<P>, DecodeError> {
    let envelope: Envelope<P> = codec.decode(data)?;
    Ok(Record::restore(
        envelope.header,
        envelope.payload,
        version.unwrap_or_else(RecordVersion::generate),
    ))
}

fn decode_ticket(
    codec: &PayloadCodec,
    data: &AttributeValue,
    version: Option<RecordVersion>,
    kind: TicketKind,
) -> Result<Dao, DecodeError> {
    Ok(Dao::Ticket(TicketDao {
        kind,
        record: decode_record(codec, data, version)?,
    }))
}

fn string_attribute<'a>(item: &'a Item, attribute: &'static str) -> Result<&'a str, DecodeError> {
    let value = item
        .get(attribute)
        .ok_or(DecodeError::MissingAttribute { attribute })?;
    value
        .as_string()
        .ok_or(DecodeError::UnexpectedAttributeKind {
            attribute,
            expected: "string",
            found: value.kind_name(),
        })
}

impl Dao {
    /// Encode into a storable item: discriminant, payload, version and
    /// every derived key pair.
    ///
    /// Keys are derived first, so a record missing a key attribute fails
    /// without touching the codec.
    pub fn to_item(&self, codec: &PayloadCodec) -> Result<Item, StorageError> {
        let keys = self.index_keys()?;
        let data = match self {
            Dao::Resource(r) => encode_record(codec, r)?,
            Dao::Ticket(t) => encode_record(codec, &t.record)?,
            Dao::Message(m) => encode_record(codec, m)?,
            Dao::File(f) => encode_record(codec, f)?,
            Dao::PublicationChannel(c) => encode_record(codec, c)?,
            Dao::LogEntry(l) => encode_record(codec, l)?,
        };

        let mut item = Item::new();
        item.insert(
            TYPE_ATTRIBUTE.to_string(),
            AttributeValue::S(self.record_type().discriminant().to_string()),
        );
        item.insert(DATA_ATTRIBUTE.to_string(), data);
        item.insert(
            VERSION_ATTRIBUTE.to_string(),
            AttributeValue::S(self.version().as_str().to_string()),
        );
        keys.write_into(&mut item);
        Ok(item)
    }

    /// Decode a stored item, dispatching on its `type` attribute.
    ///
    /// Items written before versions existed get a fresh version.
    pub fn from_item(item: &Item, codec: &PayloadCodec) -> Result<Dao, DecodeError> {
        let discriminant = string_attribute(item, TYPE_ATTRIBUTE)?;
        let record_type = RecordType::from_discriminant(discriminant).ok_or_else(|| {
            DecodeError::UnknownRecordType {
                discriminant: discriminant.to_string(),
            }
        })?;
        let data = item.get(DATA_ATTRIBUTE).ok_or(DecodeError::MissingAttribute {
            attribute: DATA_ATTRIBUTE,
        })?;
        let version = match item.get(VERSION_ATTRIBUTE) {
            Some(_) => Some(RecordVersion::from_stored(string_attribute(
                item,
                VERSION_ATTRIBUTE,
            )?)),
            None => None,
        };

        match record_type {
            RecordType::Resource => Ok(Dao::Resource(decode_record(codec, data, version)?)),
            RecordType::DoiRequest => {
                decode_ticket(codec, data, version, TicketKind::DoiRequest)
            }
            RecordType::PublishingRequest => {
                decode_ticket(codec, data, version, TicketKind::PublishingRequest)
            }
            RecordType::GeneralSupportRequest => {
                decode_ticket(codec, data, version, TicketKind::GeneralSupportRequest)
            }
            RecordType::UnpublishRequest => {
                decode_ticket(codec, data, version, TicketKind::UnpublishRequest)
            }
            RecordType::FilesApprovalThesis => {
                decode_ticket(codec, data, version, TicketKind::FilesApprovalThesis)
            }
            RecordType::Message => Ok(Dao::Message(decode_record(codec, data, version)?)),
            RecordType::File => Ok(Dao::File(decode_record(codec, data, version)?)),
            RecordType::PublicationChannel => Ok(Dao::PublicationChannel(decode_record(
                codec, data, version,
            )?)),
            RecordType::LogEntry => Ok(Dao::LogEntry(decode_record(codec, data, version)?)),
        }
    }
}
