use serde::Serialize;
use tracing::debug;

use super::domain::{CaseAttributes, CourtType, PendingCases, PriorConvictions, SupervisionStatus};
use super::report::{
    AnalysisResult, BailRanges, ConvictionChargeLevels, DisposedCaseOutcomes,
    IncarcerationDurations, Outcome, PretrialRearrest, ReleaseDecisions, SentenceSeverity,
};

/// Boolean signals that select the adjustment applied to each outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskIndicators {
    pub high_risk: bool,
    pub violent_charge: bool,
    pub superior_court: bool,
    pub has_prior_convictions: bool,
}

impl RiskIndicators {
    /// Any prior felony (`Prior VFO` or `Prior NVFO`), an open felony, or active supervision
    /// marks the case as high risk.
    pub fn from_attributes(attributes: &CaseAttributes) -> Self {
        let high_risk = attributes.prior_convictions.is_felony()
            || attributes.pending_cases == PendingCases::OpenFelony
            || attributes.on_supervision == SupervisionStatus::Yes;

        Self {
            high_risk,
            violent_charge: attributes.top_charge.is_violent(),
            superior_court: attributes.court_type == CourtType::Superior,
            has_prior_convictions: attributes.prior_convictions != PriorConvictions::NoPriors,
        }
    }

    /// Violent charges add 20; prior convictions add 15, a clean record subtracts 10.
    pub fn incarceration_adjustment(self) -> f64 {
        adjust(self.violent_charge, 20.0, 0.0) + adjust(self.has_prior_convictions, 15.0, -10.0)
    }
}

fn adjust(flag: bool, when_set: f64, otherwise: f64) -> f64 {
    if flag {
        when_set
    } else {
        otherwise
    }
}

/// Derive the full analysis for a case. Pure and total over valid attributes.
///
/// Every outcome reads as `base + adjust(indicator, when_set, otherwise)`, clamped to the
/// outcome's range. Rearrest, conviction, and incarceration adjustments are shared by
/// several outcomes and bound once.
pub fn score(attributes: &CaseAttributes) -> AnalysisResult {
    let indicators = RiskIndicators::from_attributes(attributes);
    let high_risk = indicators.high_risk;
    let superior = indicators.superior_court;
    let violent = indicators.violent_charge;

    let rearrest = adjust(high_risk, 15.0, -5.0);
    let conviction = adjust(violent, 10.0, -5.0);
    let incarceration = indicators.incarceration_adjustment();

    debug!(
        high_risk,
        violent_charge = violent,
        superior_court = superior,
        has_prior_convictions = indicators.has_prior_convictions,
        incarceration_adjustment = incarceration,
        "scoring case attributes"
    );

    let release_decisions = ReleaseDecisions::new(
        Outcome::ReleasedOnRecognizance.estimate(65.0 + adjust(high_risk, -25.0, 10.0)),
        Outcome::SupervisedRelease.estimate(25.0 + adjust(high_risk, 15.0, -5.0)),
        Outcome::DetainedPretrial.estimate(15.0 + adjust(high_risk, 20.0, -5.0)),
    );

    let bail_ranges = BailRanges::new(
        Outcome::NoBailSet.estimate(45.0 + adjust(superior, 20.0, -10.0)),
        Outcome::BailUnder5000.estimate(30.0 + adjust(superior, -15.0, 10.0)),
        Outcome::Bail5000To25000.estimate(35.0 + adjust(superior, 10.0, -10.0)),
        Outcome::BailOver25000.estimate(10.0 + adjust(superior, 15.0, -5.0)),
    );

    let pretrial_rearrest = PretrialRearrest::new(
        Outcome::NoRearrest.estimate(85.0 - rearrest),
        Outcome::Rearrested.estimate(15.0 + rearrest),
    );

    let disposed_case_outcomes = DisposedCaseOutcomes::new(
        Outcome::Dismissed.estimate(25.0 + adjust(violent, -10.0, 5.0)),
        Outcome::PleaBargain.estimate(60.0 + adjust(violent, -5.0, 5.0)),
        Outcome::TrialConviction.estimate(15.0 + adjust(violent, 10.0, -5.0)),
    );

    let conviction_charge_levels = ConvictionChargeLevels::new(
        Outcome::ConvictedAsCharged.estimate(75.0 + conviction),
        Outcome::ConvictedLesserCharge.estimate(30.0 - conviction / 2.0),
        Outcome::Acquitted.estimate(15.0 - conviction / 3.0),
    );

    let sentence_severity = SentenceSeverity::new(
        Outcome::ProbationOnly.estimate(40.0 - incarceration),
        Outcome::ShortTermIncarceration.estimate(35.0 + incarceration / 2.0),
        Outcome::LongTermIncarceration.estimate(10.0 + incarceration),
    );

    let incarceration_durations = IncarcerationDurations::new(
        Outcome::UnderSixMonths.estimate(50.0 - incarceration),
        Outcome::SixMonthsToTwoYears.estimate(30.0 + incarceration / 2.0),
        Outcome::OverTwoYears.estimate(8.0 + incarceration),
    );

    AnalysisResult {
        attributes: *attributes,
        indicators,
        release_decisions,
        bail_ranges,
        pretrial_rearrest,
        disposed_case_outcomes,
        conviction_charge_levels,
        sentence_severity,
        incarceration_durations,
    }
}
