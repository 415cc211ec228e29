//! Expiry-wrapped key-value stores for per-player and per-game round data

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifetime of a stored entry. The store itself never evicts; the timestamp
/// exists for the caller's own eviction policy.
pub const DATA_TTL_SECS: i64 = 86_400;

/// One stored payload with its expiry timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredValue {
    pub expires_at: i64,
    pub payload: Value,
}

/// Ephemeral/static per-round key-value store used for gamble-feature and
/// RTP bookkeeping.
///
/// `get` returns the payload regardless of expiry; the timestamp is
/// advisory for the persisting caller's own eviction policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameDataStore {
    entries: BTreeMap<String, StoredValue>,
}

impl GameDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.entries.insert(
            key.to_string(),
            StoredValue {
                expires_at: Utc::now().timestamp() + DATA_TTL_SECS,
                payload: value.into(),
            },
        );
    }

    /// Stored payload, or a zero value when the key is absent.
    pub fn get(&self, key: &str) -> Value {
        self.entries
            .get(key)
            .map(|stored| stored.payload.clone())
            .unwrap_or_else(|| Value::from(0))
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn entries(&self) -> &BTreeMap<String, StoredValue> {
        &self.entries
    }
}
