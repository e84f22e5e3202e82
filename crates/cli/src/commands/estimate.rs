use anyhow::Result;
use plalz_core::catalog::PricingCatalog;
use plalz_core::domain::form::QuoteFormData;
use plalz_core::pricing;

use crate::FormArgs;

pub fn run(catalog: &PricingCatalog, form: FormArgs, json: bool) -> Result<String> {
    let mut draft = QuoteFormData::default();
    draft.apply(form.into_patch());

    let parts = pricing::breakdown(&draft, catalog);
    if json {
        return Ok(serde_json::to_string_pretty(&parts)?);
    }

    Ok([
        format!("base            {}", parts.base),
        format!("features        +{}", parts.features_total),
        format!("integrations    +{}", parts.integrations_total),
        format!("multiplier      x{}", parts.multiplier),
        format!("estimated       {}", parts.total),
    ]
    .join("\n"))
}
