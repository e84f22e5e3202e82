pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod pricing;
pub mod store;

pub use catalog::{CatalogError, FeatureEntry, IntegrationEntry, PricingCatalog};
pub use domain::form::{
    ContactInfo, DesignPreferences, DesignType, FeatureId, Industry, IntegrationId, ProjectType,
    QuoteFormData, QuoteFormPatch, Timeline, TimelinePriority, UnknownVariantError,
};
pub use domain::quote::{Quote, QuoteId, QuoteStatus, QuoteVersion};
pub use errors::StorageError;
pub use pricing::{breakdown, estimate, PriceBreakdown};
pub use store::{
    MemorySnapshotStore, QuoteStore, QuoteStoreHandle, SnapshotStore, StoreSnapshot, INITIAL_STEP,
};
