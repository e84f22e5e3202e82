pub mod hydration;
pub mod snapshot;

pub use hydration::QuoteStoreHandle;
pub use snapshot::{MemorySnapshotStore, SnapshotStore, StoreSnapshot, INITIAL_STEP};

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::catalog::PricingCatalog;
use crate::domain::form::{QuoteFormData, QuoteFormPatch};
use crate::domain::quote::{Quote, QuoteId, QuoteStatus};
use crate::pricing;

/// Single authoritative holder of the in-progress draft, the step cursor,
/// the cached estimate, and the persisted quote collection. Every mutation
/// rewrites the full snapshot through the storage adapter; lookups by id
/// that miss are no-ops signalled only through the return value.
pub struct QuoteStore<S> {
    catalog: PricingCatalog,
    storage: S,
    current_quote: QuoteFormData,
    current_step: u32,
    estimated_price: Decimal,
    quotes: Vec<Quote>,
}

impl<S: SnapshotStore> QuoteStore<S> {
    pub fn new(catalog: PricingCatalog, storage: S) -> Self {
        Self::from_snapshot(catalog, storage, StoreSnapshot::default())
    }

    pub fn from_snapshot(catalog: PricingCatalog, storage: S, snapshot: StoreSnapshot) -> Self {
        Self {
            catalog,
            storage,
            current_quote: snapshot.current_quote,
            current_step: snapshot.current_step,
            estimated_price: snapshot.estimated_price,
            quotes: snapshot.quotes,
        }
    }

    /// Restores the persisted snapshot, or starts clean when none exists.
    /// A failing backend degrades the session to in-memory operation.
    pub fn restore(catalog: PricingCatalog, storage: S) -> Self {
        let snapshot = match storage.load() {
            Ok(Some(snapshot)) => {
                debug!(
                    event_name = "store.snapshot_restored",
                    quotes = snapshot.quotes.len(),
                    current_step = snapshot.current_step,
                    "restored persisted snapshot"
                );
                snapshot
            }
            Ok(None) => StoreSnapshot::default(),
            Err(error) => {
                warn!(
                    event_name = "store.snapshot_restore_failed",
                    error = %error,
                    "starting with defaults; persistence degraded for this session"
                );
                StoreSnapshot::default()
            }
        };
        Self::from_snapshot(catalog, storage, snapshot)
    }

    pub fn current_quote(&self) -> &QuoteFormData {
        &self.current_quote
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn estimated_price(&self) -> Decimal {
        self.estimated_price
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn find_quote(&self, id: &QuoteId) -> Option<&Quote> {
        self.quotes.iter().find(|quote| &quote.id == id)
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            quotes: self.quotes.clone(),
            current_quote: self.current_quote.clone(),
            current_step: self.current_step,
            estimated_price: self.estimated_price,
        }
    }

    /// Shallow-merges one wizard step into the draft and recomputes the
    /// estimate. The step cursor follows the caller's value unchecked.
    pub fn update_quote_data(&mut self, step: u32, patch: QuoteFormPatch) {
        self.current_quote.apply(patch);
        self.current_step = step;
        self.estimated_price = pricing::estimate(&self.current_quote, &self.catalog);
        self.persist();
    }

    /// No bounds check; valid ranges are the wizard's responsibility.
    pub fn set_current_step(&mut self, step: u32) {
        self.current_step = step;
        self.persist();
    }

    /// Recomputes and caches the estimate from the current draft. Idempotent.
    pub fn calculate_price(&mut self) -> Decimal {
        self.estimated_price = pricing::estimate(&self.current_quote, &self.catalog);
        self.persist();
        self.estimated_price
    }

    /// Snapshots the draft into a new draft-status [`Quote`] and appends it.
    /// The in-progress draft is left untouched.
    pub fn save_quote(&mut self) -> QuoteId {
        let quote = Quote::new(self.current_quote.clone(), self.estimated_price);
        let id = quote.id.clone();
        debug!(
            event_name = "store.quote_saved",
            quote_id = %id,
            estimated_price = %quote.estimated_price,
            "draft snapshotted into the quote collection"
        );
        self.quotes.push(quote);
        self.persist();
        id
    }

    pub fn submit_quote(&mut self, id: &QuoteId) -> bool {
        let Some(quote) = self.quotes.iter_mut().find(|quote| &quote.id == id) else {
            return false;
        };
        let now = Utc::now();
        quote.status = QuoteStatus::Submitted;
        quote.submitted_at = Some(now);
        quote.updated_at = now;
        debug!(event_name = "store.quote_submitted", quote_id = %id, "quote submitted");
        self.persist();
        true
    }

    /// Resets the draft slots only; the quote collection is untouched.
    pub fn clear_current_quote(&mut self) {
        self.current_quote = QuoteFormData::default();
        self.current_step = INITIAL_STEP;
        self.estimated_price = Decimal::ZERO;
        self.persist();
    }

    /// Copies a saved quote back into the draft slots and rewinds the cursor
    /// so the wizard can re-walk it.
    pub fn load_quote(&mut self, id: &QuoteId) -> bool {
        let Some(quote) = self.quotes.iter().find(|quote| &quote.id == id) else {
            return false;
        };
        self.current_quote = quote.form_data.clone();
        self.estimated_price = quote.estimated_price;
        self.current_step = INITIAL_STEP;
        self.persist();
        true
    }

    pub fn delete_quote(&mut self, id: &QuoteId) -> bool {
        let before = self.quotes.len();
        self.quotes.retain(|quote| &quote.id != id);
        let removed = self.quotes.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Sets any target status; transitions are not validated here. The
    /// intended forward path lives in [`Quote::can_transition_to`] as an
    /// advisory only.
    pub fn update_quote_status(&mut self, id: &QuoteId, status: QuoteStatus) -> bool {
        let Some(quote) = self.quotes.iter_mut().find(|quote| &quote.id == id) else {
            return false;
        };
        let now = Utc::now();
        quote.status = status;
        quote.updated_at = now;
        if status == QuoteStatus::Quoted {
            quote.quoted_at = Some(now);
        }
        self.persist();
        true
    }

    fn persist(&self) {
        if let Err(error) = self.storage.save(&self.snapshot()) {
            warn!(
                event_name = "store.persist_failed",
                error = %error,
                "snapshot not persisted; session continues in memory"
            );
        }
    }
}
