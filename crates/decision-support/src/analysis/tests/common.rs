use crate::analysis::domain::{
    AttributeDomain, CaseAttributes, County, CourtType, PendingCases, PriorConvictions,
    SupervisionStatus, TopCharge,
};

pub(super) fn bronx_assault() -> CaseAttributes {
    CaseAttributes {
        county: County::Bronx,
        court_type: CourtType::Local,
        top_charge: TopCharge::Assault3rd,
        pending_cases: PendingCases::NoOpenCases,
        on_supervision: SupervisionStatus::No,
        prior_convictions: PriorConvictions::NoPriors,
    }
}

pub(super) fn kings_larceny() -> CaseAttributes {
    CaseAttributes {
        county: County::Kings,
        court_type: CourtType::Local,
        top_charge: TopCharge::PetitLarceny,
        pending_cases: PendingCases::NoOpenCases,
        on_supervision: SupervisionStatus::No,
        prior_convictions: PriorConvictions::NoPriors,
    }
}

/// Every combination of the six enumerated fields.
pub(super) fn all_attribute_combinations() -> Vec<CaseAttributes> {
    let mut combinations = Vec::new();
    for county in County::all() {
        for court_type in CourtType::all() {
            for top_charge in TopCharge::all() {
                for pending_cases in PendingCases::all() {
                    for on_supervision in SupervisionStatus::all() {
                        for prior_convictions in PriorConvictions::all() {
                            combinations.push(CaseAttributes {
                                county: *county,
                                court_type: *court_type,
                                top_charge: *top_charge,
                                pending_cases: *pending_cases,
                                on_supervision: *on_supervision,
                                prior_convictions: *prior_convictions,
                            });
                        }
                    }
                }
            }
        }
    }
    combinations
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
