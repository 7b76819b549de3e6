//! Case parameter domain and the deterministic analysis derived from it.
//!
//! `score` maps a fully populated [`CaseAttributes`] value to an [`AnalysisResult`]: seven
//! outcome categories, each percentage clamped into its own range, plus one summary sentence
//! per category. The views module turns a result into the labeled bars shown on the results
//! screen.

pub mod domain;
pub mod report;
mod scoring;
mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    AttributeDomain, AttributeField, CaseAttributes, CaseAttributesDraft, CaseSummaryRow,
    ChargeFamily, County, CourtType, DraftError, IncompleteAttributes, PendingCases,
    PriorConvictions, SupervisionStatus, TopCharge, UnknownLabel,
};
pub use report::{AnalysisResult, Category, Outcome, OutcomeRange, Percentage, DISCLAIMER};
pub use scoring::{score, RiskIndicators};
pub use views::{form_catalog, AnalysisView, CategoryView, FieldCatalog, FieldOption, OutcomeBar};
