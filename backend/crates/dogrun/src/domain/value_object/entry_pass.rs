//! Entry Pass
//!
//! Payload carried by the dog-park entry QR code: who is entering, with
//! which dogs, and when the pass was issued. Encoded as compact JSON:
//!
//! ```json
//! {"user_id":"…","dog_ids":["…"],"timestamp":"2026-10-16T09:30:00Z","type":"dogrun_entry"}
//! ```
//!
//! Key order and whitespace are not significant.

use chrono::{DateTime, Utc};
use kernel::id::{DogId, UserId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type tag every entry pass carries
pub const ENTRY_PASS_TYPE: &str = "dogrun_entry";

/// Any payload that is not a well-formed entry pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid entry pass payload")]
pub struct InvalidEntryPass;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPass {
    pub user_id: UserId,
    /// In the order the owner listed them
    pub dog_ids: Vec<DogId>,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    kind: String,
}

impl EntryPass {
    pub fn new(user_id: UserId, dog_ids: Vec<DogId>) -> Self {
        Self::issued_at(user_id, dog_ids, Utc::now())
    }

    pub fn issued_at(user_id: UserId, dog_ids: Vec<DogId>, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id,
            dog_ids,
            timestamp,
            kind: ENTRY_PASS_TYPE.to_string(),
        }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a scanned payload
    ///
    /// Unparsable text, a missing key and a foreign type tag are all
    /// reported the same way.
    pub fn decode(payload: &str) -> Result<Self, InvalidEntryPass> {
        let pass: EntryPass = serde_json::from_str(payload).map_err(|_| InvalidEntryPass)?;

        if pass.kind != ENTRY_PASS_TYPE {
            return Err(InvalidEntryPass);
        }

        Ok(pass)
    }
}
