use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::form::{QuoteFormData, UnknownVariantError};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteId(pub Uuid);

impl QuoteId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for QuoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStatus {
    Draft,
    Submitted,
    InReview,
    Quoted,
    Approved,
    Rejected,
}

impl std::str::FromStr for QuoteStatus {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            "in-review" => Ok(Self::InReview),
            "quoted" => Ok(Self::Quoted),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(UnknownVariantError {
                kind: "quote status",
                value: other.to_string(),
                expected: "draft|submitted|in-review|quoted|approved|rejected",
            }),
        }
    }
}

/// One historical price/description snapshot. External review flows append
/// these; the store only carries and persists them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteVersion {
    pub version: u32,
    pub estimated_price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub form_data: QuoteFormData,
    pub status: QuoteStatus,
    pub estimated_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub quoted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub versions: Vec<QuoteVersion>,
}

impl Quote {
    /// Snapshots a draft into a fresh record. `created_at` and `updated_at`
    /// come from a single clock read so they compare equal.
    pub fn new(form_data: QuoteFormData, estimated_price: Decimal) -> Self {
        let now = Utc::now();
        Self {
            id: QuoteId::generate(),
            form_data,
            status: QuoteStatus::Draft,
            estimated_price,
            created_at: now,
            updated_at: now,
            submitted_at: None,
            quoted_at: None,
            versions: Vec::new(),
        }
    }

    /// Advisory description of the intended forward-only lifecycle. Nothing
    /// on the mutation path consults this; `QuoteStore::update_quote_status`
    /// deliberately accepts any target status.
    pub fn can_transition_to(&self, next: QuoteStatus) -> bool {
        matches!(
            (self.status, next),
            (QuoteStatus::Draft, QuoteStatus::Submitted)
                | (QuoteStatus::Submitted, QuoteStatus::InReview)
                | (QuoteStatus::InReview, QuoteStatus::Quoted)
                | (QuoteStatus::Quoted, QuoteStatus::Approved)
                | (QuoteStatus::Quoted, QuoteStatus::Rejected)
        )
    }
}
