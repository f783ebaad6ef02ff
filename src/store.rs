//! The in-memory receipt store.
//!
//! Receipts are held for the lifetime of the process and are lost when it exits. Entries are
//! never updated or removed.

use crate::model::Receipt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::trace;
use uuid::Uuid;

/// The opaque identifier handed out for a stored receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for ReceiptId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0.hyphenated(), f)
    }
}

/// The string is not an identifier in the form this service issues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a receipt id")]
pub struct InvalidReceiptId(String);

impl FromStr for ReceiptId {
    type Err = InvalidReceiptId;

    /// Only the lowercase hyphenated form produced by `Display` is accepted. Other spellings of
    /// the same UUID, such as uppercase, braced or `urn:uuid:` forms, are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Uuid::parse_str(s).map(Self) {
            Ok(id) if id.to_string() == s => Ok(id),
            _ => Err(InvalidReceiptId(s.to_string())),
        }
    }
}

/// Maps identifiers to the receipts they were issued for.
///
/// A single lock guards the map. Each insert is one step that adds a fully-built receipt, so a
/// reader sees either the whole receipt or nothing. For the same reason a poisoned lock is still
/// consistent and is recovered rather than propagated.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Arc<Receipt>>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `receipt` under a freshly generated identifier and returns the identifier.
    pub fn put(&self, receipt: Receipt) -> ReceiptId {
        let receipt = Arc::new(receipt);
        let mut receipts = self.receipts.write().unwrap_or_else(PoisonError::into_inner);
        let id = loop {
            let id = ReceiptId::generate();
            if !receipts.contains_key(&id) {
                break id;
            }
        };
        receipts.insert(id, receipt);
        trace!("Stored receipt {id}, {} receipts held", receipts.len());
        id
    }

    /// Returns the receipt stored under `id`, or `None` if `id` was never issued by this store.
    pub fn get(&self, id: &ReceiptId) -> Option<Arc<Receipt>> {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Looks up a receipt by the exact string it was issued as. Any other string, including a
    /// different spelling of the same identifier, is treated like an identifier that was never
    /// issued.
    pub fn get_str(&self, id: &str) -> Option<Arc<Receipt>> {
        let id = ReceiptId::from_str(id).ok()?;
        self.get(&id)
    }

    /// The number of receipts held.
    pub fn len(&self) -> usize {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
