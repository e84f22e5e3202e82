use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::form::{
    DesignType, FeatureId, Industry, IntegrationId, ProjectType, TimelinePriority,
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureEntry {
    pub id: FeatureId,
    pub label: String,
    pub price_impact: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntegrationEntry {
    pub id: IntegrationId,
    pub label: String,
    pub price_impact: Decimal,
}

/// The pricing tables the calculator consumes by lookup. The catalog is
/// static configuration data: the calculator never validates its content,
/// and missing entries resolve to neutral contributions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingCatalog {
    pub base_prices: BTreeMap<ProjectType, Decimal>,
    pub industry_multipliers: BTreeMap<Industry, Decimal>,
    pub priority_multipliers: BTreeMap<TimelinePriority, Decimal>,
    pub design_multipliers: BTreeMap<DesignType, Decimal>,
    pub features: Vec<FeatureEntry>,
    pub integrations: Vec<IntegrationEntry>,
}

impl PricingCatalog {
    /// The agency's shipped dataset.
    pub fn builtin() -> Self {
        Self {
            base_prices: [
                (ProjectType::Landing, Decimal::from(500)),
                (ProjectType::Website, Decimal::from(1000)),
                (ProjectType::Redesign, Decimal::from(1500)),
                (ProjectType::Ecommerce, Decimal::from(2500)),
                (ProjectType::Webapp, Decimal::from(4000)),
                (ProjectType::Mobile, Decimal::from(6000)),
            ]
            .into_iter()
            .collect(),
            industry_multipliers: [
                (Industry::Technology, Decimal::ONE),
                (Industry::Healthcare, Decimal::new(12, 1)),
                (Industry::Finance, Decimal::new(13, 1)),
                (Industry::Education, Decimal::new(9, 1)),
                (Industry::Retail, Decimal::new(11, 1)),
                (Industry::Hospitality, Decimal::ONE),
                (Industry::RealEstate, Decimal::new(11, 1)),
                (Industry::Fitness, Decimal::new(9, 1)),
                (Industry::Creative, Decimal::ONE),
                (Industry::Nonprofit, Decimal::new(8, 1)),
            ]
            .into_iter()
            .collect(),
            priority_multipliers: [
                (TimelinePriority::Low, Decimal::new(9, 1)),
                (TimelinePriority::Medium, Decimal::ONE),
                (TimelinePriority::High, Decimal::new(12, 1)),
                (TimelinePriority::Urgent, Decimal::new(15, 1)),
            ]
            .into_iter()
            .collect(),
            design_multipliers: [
                (DesignType::Template, Decimal::new(8, 1)),
                (DesignType::Custom, Decimal::new(15, 1)),
                (DesignType::Hybrid, Decimal::new(12, 1)),
            ]
            .into_iter()
            .collect(),
            features: vec![
                feature("cms", "Content management", 800),
                feature("blog", "Blog", 400),
                feature("seo-optimization", "SEO optimization", 600),
                feature("analytics", "Analytics dashboard", 300),
                feature("booking-system", "Booking system", 900),
                feature("image-gallery", "Image gallery", 250),
                feature("multilingual", "Multilingual content", 700),
                feature("user-accounts", "User accounts", 1000),
                feature("live-chat", "Live chat", 350),
                feature("newsletter", "Newsletter signup", 200),
                feature("site-search", "Site search", 500),
                feature("payment-processing", "Payment processing", 1200),
            ],
            integrations: vec![
                integration("stripe", "Stripe", 600),
                integration("paypal", "PayPal", 500),
                integration("mailchimp", "Mailchimp", 300),
                integration("google-analytics", "Google Analytics", 150),
                integration("hubspot-crm", "HubSpot CRM", 800),
                integration("social-media", "Social media feeds", 250),
                integration("zapier", "Zapier", 400),
                integration("google-maps", "Google Maps", 200),
            ],
        }
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&raw)
            .map_err(|source| CatalogError::ParseFile { path: path.to_path_buf(), source })
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn base_price(&self, project_type: Option<ProjectType>) -> Decimal {
        project_type
            .and_then(|project_type| self.base_prices.get(&project_type).copied())
            .unwrap_or(Decimal::ZERO)
    }

    pub fn industry_multiplier(&self, industry: Option<Industry>) -> Decimal {
        industry
            .and_then(|industry| self.industry_multipliers.get(&industry).copied())
            .unwrap_or(Decimal::ONE)
    }

    pub fn priority_multiplier(&self, priority: Option<TimelinePriority>) -> Decimal {
        priority
            .and_then(|priority| self.priority_multipliers.get(&priority).copied())
            .unwrap_or(Decimal::ONE)
    }

    pub fn design_multiplier(&self, design_type: Option<DesignType>) -> Decimal {
        design_type
            .and_then(|design_type| self.design_multipliers.get(&design_type).copied())
            .unwrap_or(Decimal::ONE)
    }

    pub fn feature_impact(&self, id: &FeatureId) -> Option<Decimal> {
        self.features.iter().find(|entry| &entry.id == id).map(|entry| entry.price_impact)
    }

    pub fn integration_impact(&self, id: &IntegrationId) -> Option<Decimal> {
        self.integrations.iter().find(|entry| &entry.id == id).map(|entry| entry.price_impact)
    }
}

fn feature(id: &str, label: &str, price_impact: i64) -> FeatureEntry {
    FeatureEntry {
        id: FeatureId(id.to_string()),
        label: label.to_string(),
        price_impact: Decimal::from(price_impact),
    }
}

fn integration(id: &str, label: &str, price_impact: i64) -> IntegrationEntry {
    IntegrationEntry {
        id: IntegrationId(id.to_string()),
        label: label.to_string(),
        price_impact: Decimal::from(price_impact),
    }
}
