use serde::Serialize;

use super::domain::{
    AttributeDomain, AttributeField, CaseSummaryRow, County, CourtType, PendingCases,
    PriorConvictions, SupervisionStatus, TopCharge,
};
use super::report::{AnalysisResult, Category, Outcome, DISCLAIMER};
use super::scoring::RiskIndicators;

#[derive(Debug, Clone, Serialize)]
pub struct OutcomeBar {
    pub outcome: Outcome,
    pub label: &'static str,
    pub percentage: f64,
    pub display: String,
    pub rounded: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub category: Category,
    pub title: &'static str,
    pub bars: Vec<OutcomeBar>,
    pub summary: String,
}

/// Results screen payload: case summary, labeled bars per category, and the disclaimer.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub case_summary: Vec<CaseSummaryRow>,
    pub indicators: RiskIndicators,
    pub categories: Vec<CategoryView>,
    pub disclaimer: &'static str,
}

impl AnalysisResult {
    pub fn categories(&self) -> Vec<CategoryView> {
        Category::ordered()
            .into_iter()
            .map(|category| CategoryView {
                category,
                title: category.title(),
                bars: category
                    .outcomes()
                    .iter()
                    .map(|outcome| {
                        let percentage = self.percentage(*outcome);
                        OutcomeBar {
                            outcome: *outcome,
                            label: outcome.label(),
                            percentage: percentage.value(),
                            display: percentage.to_string(),
                            rounded: percentage.rounded(),
                        }
                    })
                    .collect(),
                summary: self.summary(category).to_string(),
            })
            .collect()
    }

    pub fn view(&self) -> AnalysisView {
        AnalysisView {
            case_summary: self.attributes.summary_rows(),
            indicators: self.indicators,
            categories: self.categories(),
            disclaimer: DISCLAIMER,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldCatalog {
    pub field: AttributeField,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub options: Vec<FieldOption>,
}

fn field_catalog<T: AttributeDomain>(describe: fn(T) -> &'static str) -> FieldCatalog {
    FieldCatalog {
        field: T::FIELD,
        label: T::FIELD.label(),
        placeholder: T::FIELD.placeholder(),
        options: T::all()
            .iter()
            .map(|option| FieldOption {
                value: option.label(),
                label: describe(*option),
            })
            .collect(),
    }
}

/// Option lists backing every case parameter widget, in form order.
pub fn form_catalog() -> Vec<FieldCatalog> {
    vec![
        field_catalog(County::label),
        field_catalog(CourtType::label),
        field_catalog(TopCharge::label),
        field_catalog(PendingCases::label),
        field_catalog(SupervisionStatus::label),
        field_catalog(PriorConvictions::description),
    ]
}
