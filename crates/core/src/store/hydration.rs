use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::PricingCatalog;
use crate::domain::form::{QuoteFormData, QuoteFormPatch};
use crate::domain::quote::{Quote, QuoteId, QuoteStatus};

use super::{QuoteStore, SnapshotStore, INITIAL_STEP};

enum Hydration<S> {
    Pending { catalog: PricingCatalog, storage: S },
    Ready(QuoteStore<S>),
}

/// Access gate over the quote store with an explicit two-state lifecycle.
///
/// Until [`hydrate`](Self::hydrate) has run, reads return fixed safe defaults
/// (empty draft, step 1, price 0, empty collection) and mutations are no-ops,
/// so a consumer rendered before the persisted snapshot is restored stays
/// stable and non-throwing regardless of call order. Afterwards every access
/// delegates to the live store unchanged.
pub struct QuoteStoreHandle<S> {
    // None only transiently inside hydrate().
    state: Option<Hydration<S>>,
    empty_draft: QuoteFormData,
}

impl<S: SnapshotStore> QuoteStoreHandle<S> {
    pub fn new(catalog: PricingCatalog, storage: S) -> Self {
        Self {
            state: Some(Hydration::Pending { catalog, storage }),
            empty_draft: QuoteFormData::default(),
        }
    }

    /// Restores the persisted snapshot and switches to pass-through access.
    /// Idempotent; a second call is a no-op.
    pub fn hydrate(&mut self) {
        match self.state.take() {
            Some(Hydration::Pending { catalog, storage }) => {
                let store = QuoteStore::restore(catalog, storage);
                debug!(event_name = "store.hydration_completed", "handle switched to pass-through");
                self.state = Some(Hydration::Ready(store));
            }
            other => self.state = other,
        }
    }

    pub fn is_hydrated(&self) -> bool {
        matches!(self.state, Some(Hydration::Ready(_)))
    }

    fn store(&self) -> Option<&QuoteStore<S>> {
        match &self.state {
            Some(Hydration::Ready(store)) => Some(store),
            _ => None,
        }
    }

    fn store_mut(&mut self) -> Option<&mut QuoteStore<S>> {
        match &mut self.state {
            Some(Hydration::Ready(store)) => Some(store),
            _ => None,
        }
    }

    pub fn current_quote(&self) -> &QuoteFormData {
        self.store().map_or(&self.empty_draft, QuoteStore::current_quote)
    }

    pub fn current_step(&self) -> u32 {
        self.store().map_or(INITIAL_STEP, QuoteStore::current_step)
    }

    pub fn estimated_price(&self) -> Decimal {
        self.store().map_or(Decimal::ZERO, QuoteStore::estimated_price)
    }

    pub fn quotes(&self) -> &[Quote] {
        self.store().map_or(&[], QuoteStore::quotes)
    }

    pub fn find_quote(&self, id: &QuoteId) -> Option<&Quote> {
        self.store().and_then(|store| store.find_quote(id))
    }

    pub fn update_quote_data(&mut self, step: u32, patch: QuoteFormPatch) {
        if let Some(store) = self.store_mut() {
            store.update_quote_data(step, patch);
        }
    }

    pub fn set_current_step(&mut self, step: u32) {
        if let Some(store) = self.store_mut() {
            store.set_current_step(step);
        }
    }

    pub fn calculate_price(&mut self) -> Decimal {
        self.store_mut().map_or(Decimal::ZERO, QuoteStore::calculate_price)
    }

    /// `None` until hydration has completed.
    pub fn save_quote(&mut self) -> Option<QuoteId> {
        self.store_mut().map(QuoteStore::save_quote)
    }

    pub fn submit_quote(&mut self, id: &QuoteId) -> bool {
        self.store_mut().is_some_and(|store| store.submit_quote(id))
    }

    pub fn clear_current_quote(&mut self) {
        if let Some(store) = self.store_mut() {
            store.clear_current_quote();
        }
    }

    pub fn load_quote(&mut self, id: &QuoteId) -> bool {
        self.store_mut().is_some_and(|store| store.load_quote(id))
    }

    pub fn delete_quote(&mut self, id: &QuoteId) -> bool {
        self.store_mut().is_some_and(|store| store.delete_quote(id))
    }

    pub fn update_quote_status(&mut self, id: &QuoteId, status: QuoteStatus) -> bool {
        self.store_mut().is_some_and(|store| store.update_quote_status(id, status))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::catalog::PricingCatalog;
    use crate::domain::form::{ProjectType, QuoteFormPatch};
    use crate::domain::quote::QuoteId;
    use crate::store::{MemorySnapshotStore, QuoteStore, INITIAL_STEP};

    use super::QuoteStoreHandle;

    fn handle() -> QuoteStoreHandle<MemorySnapshotStore> {
        QuoteStoreHandle::new(PricingCatalog::builtin(), MemorySnapshotStore::new())
    }

    fn website_patch() -> QuoteFormPatch {
        QuoteFormPatch {
            project_type: Some(ProjectType::Website),
            ..QuoteFormPatch::default()
        }
    }

    #[test]
    fn reads_before_hydration_return_safe_defaults() {
        let handle = handle();

        assert!(!handle.is_hydrated());
        assert_eq!(handle.current_step(), INITIAL_STEP);
        assert_eq!(handle.estimated_price(), Decimal::ZERO);
        assert!(handle.quotes().is_empty());
        assert!(handle.current_quote().project_type.is_none());
        assert!(handle.find_quote(&QuoteId::generate()).is_none());
    }

    #[test]
    fn mutations_before_hydration_are_no_ops() {
        let mut handle = handle();

        handle.update_quote_data(2, website_patch());
        handle.set_current_step(4);
        assert_eq!(handle.calculate_price(), Decimal::ZERO);
        assert_eq!(handle.save_quote(), None);
        assert!(!handle.submit_quote(&QuoteId::generate()));
        assert!(!handle.delete_quote(&QuoteId::generate()));

        assert_eq!(handle.current_step(), INITIAL_STEP);
        assert!(handle.current_quote().project_type.is_none());
    }

    #[test]
    fn hydration_switches_to_pass_through_access() {
        let mut handle = handle();
        handle.hydrate();
        assert!(handle.is_hydrated());

        handle.update_quote_data(2, website_patch());
        assert_eq!(handle.estimated_price(), Decimal::from(1000));
        assert_eq!(handle.current_step(), 2);

        let id = handle.save_quote().expect("hydrated handle should save");
        assert!(handle.submit_quote(&id));
        assert_eq!(handle.quotes().len(), 1);
    }

    #[test]
    fn hydration_restores_the_previous_session() {
        let cell = MemorySnapshotStore::new();
        {
            let mut store = QuoteStore::new(PricingCatalog::builtin(), cell.clone());
            store.update_quote_data(2, website_patch());
            store.save_quote();
        }

        let mut handle = QuoteStoreHandle::new(PricingCatalog::builtin(), cell);
        assert!(handle.quotes().is_empty(), "snapshot must not leak before hydrate");

        handle.hydrate();
        assert_eq!(handle.quotes().len(), 1);
        assert_eq!(handle.estimated_price(), Decimal::from(1000));
    }

    #[test]
    fn hydrate_is_idempotent() {
        let mut handle = handle();
        handle.hydrate();
        handle.update_quote_data(2, website_patch());

        handle.hydrate();
        assert_eq!(handle.current_step(), 2, "second hydrate must not reset live state");
    }
}
