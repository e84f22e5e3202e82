use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::catalog::PricingCatalog;
use crate::domain::form::QuoteFormData;

/// Intermediate terms of one price estimate, for callers that show how the
/// number was derived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base: Decimal,
    pub features_total: Decimal,
    pub integrations_total: Decimal,
    pub multiplier: Decimal,
    pub total: Decimal,
}

/// Deterministic estimate for a (possibly partial) draft. Unset fields
/// contribute nothing, unknown feature/integration ids are skipped, and the
/// result is rounded to the nearest whole unit, never below zero.
pub fn estimate(form: &QuoteFormData, catalog: &PricingCatalog) -> Decimal {
    breakdown(form, catalog).total
}

pub fn breakdown(form: &QuoteFormData, catalog: &PricingCatalog) -> PriceBreakdown {
    let base = catalog.base_price(form.project_type);
    let features_total: Decimal = form
        .selected_features
        .iter()
        .filter_map(|id| catalog.feature_impact(id))
        .sum();
    let integrations_total: Decimal = form
        .selected_integrations
        .iter()
        .filter_map(|id| catalog.integration_impact(id))
        .sum();
    let multiplier = catalog.industry_multiplier(form.industry)
        * catalog.priority_multiplier(form.timeline_priority())
        * catalog.design_multiplier(form.design_type());

    // The UI rounds half away from zero; Decimal's default midpoint strategy
    // is banker's rounding, which would disagree on exact .5 totals.
    let total = ((base + features_total + integrations_total) * multiplier)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO);

    PriceBreakdown { base, features_total, integrations_total, multiplier, total }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::catalog::PricingCatalog;
    use crate::domain::form::{
        DesignPreferences, DesignType, FeatureId, Industry, IntegrationId, ProjectType,
        QuoteFormData,
    };

    use super::{breakdown, estimate};

    fn form() -> QuoteFormData {
        QuoteFormData::default()
    }

    #[test]
    fn empty_form_prices_to_zero() {
        assert_eq!(estimate(&form(), &PricingCatalog::builtin()), Decimal::ZERO);
    }

    #[test]
    fn project_type_alone_prices_to_its_base() {
        let catalog = PricingCatalog::builtin();
        let draft = QuoteFormData { project_type: Some(ProjectType::Webapp), ..form() };
        assert_eq!(estimate(&draft, &catalog), Decimal::from(4000));
    }

    #[test]
    fn each_known_feature_adds_exactly_its_impact() {
        let catalog = PricingCatalog::builtin();
        let without = QuoteFormData { project_type: Some(ProjectType::Website), ..form() };
        let with = QuoteFormData {
            selected_features: vec![FeatureId("site-search".to_string())],
            ..without.clone()
        };

        let delta = estimate(&with, &catalog) - estimate(&without, &catalog);
        assert_eq!(delta, Decimal::from(500));
    }

    #[test]
    fn unknown_ids_are_silently_skipped() {
        let catalog = PricingCatalog::builtin();
        let draft = QuoteFormData {
            project_type: Some(ProjectType::Website),
            selected_features: vec![FeatureId("hoverboard-mode".to_string())],
            selected_integrations: vec![IntegrationId("fax-gateway".to_string())],
            ..form()
        };
        assert_eq!(estimate(&draft, &catalog), Decimal::from(1000));
    }

    #[test]
    fn custom_design_scales_by_exactly_one_point_five() {
        let catalog = PricingCatalog::builtin();
        let plain = QuoteFormData { project_type: Some(ProjectType::Ecommerce), ..form() };
        let custom = QuoteFormData {
            design_preferences: Some(DesignPreferences {
                design_type: Some(DesignType::Custom),
                notes: None,
            }),
            ..plain.clone()
        };

        assert_eq!(
            estimate(&custom, &catalog),
            estimate(&plain, &catalog) * Decimal::new(15, 1)
        );
    }

    #[test]
    fn website_with_newsletter_and_custom_design_prices_to_1800() {
        let catalog = PricingCatalog::builtin();
        let draft = QuoteFormData {
            project_type: Some(ProjectType::Website),
            industry: Some(Industry::Technology),
            selected_features: vec![FeatureId("newsletter".to_string())],
            design_preferences: Some(DesignPreferences {
                design_type: Some(DesignType::Custom),
                notes: None,
            }),
            ..form()
        };

        // (1000 + 200) * 1.0 * 1.5
        assert_eq!(estimate(&draft, &catalog), Decimal::from(1800));
    }

    #[test]
    fn midpoint_totals_round_away_from_zero() {
        let mut catalog = PricingCatalog::builtin();
        catalog.base_prices.insert(ProjectType::Landing, Decimal::from(1001));

        let draft = QuoteFormData {
            project_type: Some(ProjectType::Landing),
            design_preferences: Some(DesignPreferences {
                design_type: Some(DesignType::Custom),
                notes: None,
            }),
            ..form()
        };

        // 1001 * 1.5 = 1501.5
        assert_eq!(estimate(&draft, &catalog), Decimal::from(1502));
    }

    #[test]
    fn toml_catalog_prices_like_the_builtin_tables() {
        let loaded = PricingCatalog::from_toml_str(
            r#"
[base_prices]
website = 1000

[industry_multipliers]
technology = 1.0

[design_multipliers]
custom = 1.5

[[features]]
id = "newsletter"
label = "Newsletter signup"
price_impact = 200
"#,
        )
        .expect("catalog document should parse");

        let draft = QuoteFormData {
            project_type: Some(ProjectType::Website),
            industry: Some(Industry::Technology),
            selected_features: vec![
                FeatureId("newsletter".to_string()),
                FeatureId("hoverboard-mode".to_string()),
            ],
            design_preferences: Some(DesignPreferences {
                design_type: Some(DesignType::Custom),
                notes: None,
            }),
            ..form()
        };

        assert_eq!(estimate(&draft, &loaded), Decimal::from(1800));
        assert_eq!(estimate(&draft, &loaded), estimate(&draft, &PricingCatalog::builtin()));
    }

    #[test]
    fn breakdown_terms_recombine_into_the_total() {
        let catalog = PricingCatalog::builtin();
        let draft = QuoteFormData {
            project_type: Some(ProjectType::Website),
            industry: Some(Industry::Finance),
            selected_features: vec![
                FeatureId("cms".to_string()),
                FeatureId("blog".to_string()),
            ],
            selected_integrations: vec![IntegrationId("stripe".to_string())],
            ..form()
        };

        let parts = breakdown(&draft, &catalog);
        assert_eq!(parts.base, Decimal::from(1000));
        assert_eq!(parts.features_total, Decimal::from(1200));
        assert_eq!(parts.integrations_total, Decimal::from(600));
        assert_eq!(parts.multiplier, Decimal::new(13, 1));
        // (1000 + 1200 + 600) * 1.3
        assert_eq!(parts.total, Decimal::from(3640));
    }
}
