use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::form::QuoteFormData;
use crate::domain::quote::Quote;
use crate::errors::StorageError;

/// The wizard's first step. The store owns no upper bound; step-count
/// ownership belongs to the consuming UI.
pub const INITIAL_STEP: u32 = 1;

/// The persisted slice of store state. Hydration bookkeeping is deliberately
/// absent; it must never survive a restart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub quotes: Vec<Quote>,
    pub current_quote: QuoteFormData,
    pub current_step: u32,
    pub estimated_price: Decimal,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            quotes: Vec::new(),
            current_quote: QuoteFormData::default(),
            current_step: INITIAL_STEP,
            estimated_price: Decimal::ZERO,
        }
    }
}

/// Adapter seam between the store and whatever holds the durable record.
/// `load` runs once at hydration; `save` rewrites the whole record after
/// every mutation, last write wins.
pub trait SnapshotStore {
    fn load(&self) -> Result<Option<StoreSnapshot>, StorageError>;
    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError>;
}

/// Backend for tests and storage-degraded sessions. Clones share the same
/// cell, so a test can hand one clone to the store and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemorySnapshotStore {
    cell: Arc<Mutex<Option<StoreSnapshot>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persisted(&self) -> Option<StoreSnapshot> {
        self.cell.lock().expect("snapshot cell mutex poisoned").clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<StoreSnapshot>, StorageError> {
        Ok(self.persisted())
    }

    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError> {
        *self.cell.lock().expect("snapshot cell mutex poisoned") = Some(snapshot.clone());
        Ok(())
    }
}
