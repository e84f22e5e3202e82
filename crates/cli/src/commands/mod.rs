pub mod config;
pub mod draft;
pub mod estimate;
pub mod quote;

use anyhow::{Context, Result};
use plalz_core::domain::quote::QuoteId;
use uuid::Uuid;

pub(crate) fn parse_quote_id(raw: &str) -> Result<QuoteId> {
    let uuid = Uuid::parse_str(raw.trim())
        .with_context(|| format!("`{raw}` is not a valid quote id"))?;
    Ok(QuoteId(uuid))
}

pub(crate) fn render_option<T: std::fmt::Debug>(value: Option<T>) -> String {
    value.map(|value| format!("{value:?}")).unwrap_or_else(|| "(unset)".to_string())
}
