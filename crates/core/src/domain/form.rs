use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unrecognized {kind} `{value}` (expected {expected})")]
pub struct UnknownVariantError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Website,
    Ecommerce,
    Webapp,
    Mobile,
    Landing,
    Redesign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Education,
    Retail,
    Hospitality,
    RealEstate,
    Fitness,
    Creative,
    Nonprofit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesignType {
    Template,
    Custom,
    Hybrid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelinePriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntegrationId(pub String);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignPreferences {
    #[serde(default)]
    pub design_type: Option<DesignType>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub priority: Option<TimelinePriority>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

/// The draft under construction. Every field stays optional until the wizard
/// submits; pricing treats unset fields as neutral contributions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteFormData {
    pub project_type: Option<ProjectType>,
    pub industry: Option<Industry>,
    pub selected_features: Vec<FeatureId>,
    pub selected_integrations: Vec<IntegrationId>,
    pub design_preferences: Option<DesignPreferences>,
    pub timeline: Option<Timeline>,
    pub contact_info: Option<ContactInfo>,
    pub budget: Option<String>,
}

/// Shallow merge input for one wizard step. A `Some` field replaces the
/// draft's value wholesale; sub-objects are never deep-merged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteFormPatch {
    pub project_type: Option<ProjectType>,
    pub industry: Option<Industry>,
    pub selected_features: Option<Vec<FeatureId>>,
    pub selected_integrations: Option<Vec<IntegrationId>>,
    pub design_preferences: Option<DesignPreferences>,
    pub timeline: Option<Timeline>,
    pub contact_info: Option<ContactInfo>,
    pub budget: Option<String>,
}

impl QuoteFormData {
    pub fn apply(&mut self, patch: QuoteFormPatch) {
        if let Some(project_type) = patch.project_type {
            self.project_type = Some(project_type);
        }
        if let Some(industry) = patch.industry {
            self.industry = Some(industry);
        }
        if let Some(selected_features) = patch.selected_features {
            self.selected_features = selected_features;
        }
        if let Some(selected_integrations) = patch.selected_integrations {
            self.selected_integrations = selected_integrations;
        }
        if let Some(design_preferences) = patch.design_preferences {
            self.design_preferences = Some(design_preferences);
        }
        if let Some(timeline) = patch.timeline {
            self.timeline = Some(timeline);
        }
        if let Some(contact_info) = patch.contact_info {
            self.contact_info = Some(contact_info);
        }
        if let Some(budget) = patch.budget {
            self.budget = Some(budget);
        }
    }

    pub fn design_type(&self) -> Option<DesignType> {
        self.design_preferences.as_ref().and_then(|preferences| preferences.design_type)
    }

    pub fn timeline_priority(&self) -> Option<TimelinePriority> {
        self.timeline.as_ref().and_then(|timeline| timeline.priority)
    }
}

impl std::str::FromStr for ProjectType {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "website" => Ok(Self::Website),
            "ecommerce" => Ok(Self::Ecommerce),
            "webapp" => Ok(Self::Webapp),
            "mobile" => Ok(Self::Mobile),
            "landing" => Ok(Self::Landing),
            "redesign" => Ok(Self::Redesign),
            other => Err(UnknownVariantError {
                kind: "project type",
                value: other.to_string(),
                expected: "website|ecommerce|webapp|mobile|landing|redesign",
            }),
        }
    }
}

impl std::str::FromStr for Industry {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "technology" => Ok(Self::Technology),
            "healthcare" => Ok(Self::Healthcare),
            "finance" => Ok(Self::Finance),
            "education" => Ok(Self::Education),
            "retail" => Ok(Self::Retail),
            "hospitality" => Ok(Self::Hospitality),
            "real-estate" => Ok(Self::RealEstate),
            "fitness" => Ok(Self::Fitness),
            "creative" => Ok(Self::Creative),
            "nonprofit" => Ok(Self::Nonprofit),
            other => Err(UnknownVariantError {
                kind: "industry",
                value: other.to_string(),
                expected: "technology|healthcare|finance|education|retail|hospitality|real-estate|fitness|creative|nonprofit",
            }),
        }
    }
}

impl std::str::FromStr for DesignType {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(Self::Template),
            "custom" => Ok(Self::Custom),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(UnknownVariantError {
                kind: "design type",
                value: other.to_string(),
                expected: "template|custom|hybrid",
            }),
        }
    }
}

impl std::str::FromStr for TimelinePriority {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            other => Err(UnknownVariantError {
                kind: "timeline priority",
                value: other.to_string(),
                expected: "low|medium|high|urgent",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DesignPreferences, DesignType, FeatureId, Industry, ProjectType, QuoteFormData,
        QuoteFormPatch, Timeline, TimelinePriority,
    };

    #[test]
    fn patch_merges_shallowly_and_keeps_untouched_fields() {
        let mut form = QuoteFormData {
            project_type: Some(ProjectType::Website),
            industry: Some(Industry::Technology),
            ..QuoteFormData::default()
        };

        form.apply(QuoteFormPatch {
            selected_features: Some(vec![FeatureId("cms".to_string())]),
            ..QuoteFormPatch::default()
        });

        assert_eq!(form.project_type, Some(ProjectType::Website));
        assert_eq!(form.industry, Some(Industry::Technology));
        assert_eq!(form.selected_features, vec![FeatureId("cms".to_string())]);
    }

    #[test]
    fn patch_replaces_sub_objects_wholesale() {
        let mut form = QuoteFormData {
            timeline: Some(Timeline {
                priority: Some(TimelinePriority::Urgent),
                deadline: chrono::NaiveDate::from_ymd_opt(2026, 3, 1),
            }),
            ..QuoteFormData::default()
        };

        form.apply(QuoteFormPatch {
            timeline: Some(Timeline { priority: Some(TimelinePriority::Low), deadline: None }),
            ..QuoteFormPatch::default()
        });

        let timeline = form.timeline.expect("timeline should survive the merge");
        assert_eq!(timeline.priority, Some(TimelinePriority::Low));
        assert_eq!(timeline.deadline, None, "deadline is not deep-merged from the old sub-object");
    }

    #[test]
    fn design_type_accessor_reads_through_preferences() {
        let mut form = QuoteFormData::default();
        assert_eq!(form.design_type(), None);

        form.apply(QuoteFormPatch {
            design_preferences: Some(DesignPreferences {
                design_type: Some(DesignType::Custom),
                notes: None,
            }),
            ..QuoteFormPatch::default()
        });
        assert_eq!(form.design_type(), Some(DesignType::Custom));
    }

    #[test]
    fn enum_flags_parse_from_kebab_case() {
        assert_eq!("website".parse::<ProjectType>(), Ok(ProjectType::Website));
        assert_eq!("real-estate".parse::<Industry>(), Ok(Industry::RealEstate));
        assert_eq!("urgent".parse::<TimelinePriority>(), Ok(TimelinePriority::Urgent));

        let error = "storefront".parse::<ProjectType>().expect_err("unknown project type");
        assert!(error.to_string().contains("storefront"));
    }
}
