//! Versioned binary encoding of `SlashingRecord`.
//!
//! Layout: `[version: u8][bincode(record)]`.

use crate::domain::SlashingRecord;
use crate::ports::outbound::StoreError;

pub const RECORD_FORMAT_VERSION: u8 = 1;

pub fn encode_record(record: &SlashingRecord) -> Result<Vec<u8>, StoreError> {
    let body = bincode::serialize(record).map_err(|e| StoreError::Codec {
        message: e.to_string(),
    })?;
    let mut bytes = Vec::with_capacity(body.len() + 1);
    bytes.push(RECORD_FORMAT_VERSION);
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

pub fn decode_record(bytes: &[u8]) -> Result<SlashingRecord, StoreError> {
    let (version, body) = bytes.split_first().ok_or_else(|| StoreError::Codec {
        message: "empty record".to_string(),
    })?;
    if *version != RECORD_FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion { version: *version });
    }
    bincode::deserialize(body).map_err(|e| StoreError::Codec {
        message: e.to_string(),
    })
}
