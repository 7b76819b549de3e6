use super::common::*;
use crate::analysis::domain::{
    AttributeDomain, CourtType, PendingCases, PriorConvictions, SupervisionStatus, TopCharge,
};
use crate::analysis::report::Outcome;
use crate::analysis::scoring::{score, RiskIndicators};

#[test]
fn every_outcome_stays_within_its_range_for_all_inputs() {
    let combinations = all_attribute_combinations();
    assert_eq!(combinations.len(), 5 * 2 * 20 * 4 * 3 * 4);

    for attributes in combinations {
        let result = score(&attributes);
        for outcome in Outcome::all() {
            let percentage = result.percentage(outcome);
            assert!(
                outcome.range().contains(percentage),
                "{outcome:?} = {} outside {:?} for {attributes:?}",
                percentage.value(),
                outcome.range()
            );
        }
    }
}

#[test]
fn scoring_is_deterministic() {
    let attributes = bronx_assault();
    assert_eq!(score(&attributes), score(&attributes));
}

#[test]
fn bronx_assault_scenario_matches_expected_figures() {
    let result = score(&bronx_assault());

    assert_eq!(
        result.indicators,
        RiskIndicators {
            high_risk: false,
            violent_charge: true,
            superior_court: false,
            has_prior_convictions: false,
        }
    );

    let expectations = [
        (Outcome::ReleasedOnRecognizance, 75.0),
        (Outcome::SupervisedRelease, 20.0),
        (Outcome::DetainedPretrial, 10.0),
        (Outcome::NoBailSet, 35.0),
        (Outcome::BailUnder5000, 40.0),
        (Outcome::Bail5000To25000, 25.0),
        (Outcome::BailOver25000, 5.0),
        (Outcome::NoRearrest, 90.0),
        (Outcome::Rearrested, 10.0),
        (Outcome::Dismissed, 15.0),
        (Outcome::PleaBargain, 55.0),
        (Outcome::TrialConviction, 25.0),
        (Outcome::ConvictedAsCharged, 80.0),
        (Outcome::ConvictedLesserCharge, 25.0),
        (Outcome::Acquitted, 15.0 - 10.0 / 3.0),
        (Outcome::ProbationOnly, 30.0),
        (Outcome::ShortTermIncarceration, 40.0),
        (Outcome::LongTermIncarceration, 20.0),
        (Outcome::UnderSixMonths, 40.0),
        (Outcome::SixMonthsToTwoYears, 35.0),
        (Outcome::OverTwoYears, 18.0),
    ];
    for (outcome, expected) in expectations {
        assert_close(result.percentage(outcome).value(), expected);
    }
}

#[test]
fn violent_felony_history_lowers_release_and_raises_detention() {
    let baseline = bronx_assault();
    let mut with_vfo = baseline;
    with_vfo.prior_convictions = PriorConvictions::ViolentFelony;

    let before = score(&baseline);
    let after = score(&with_vfo);

    assert!(after.indicators.high_risk);
    assert!(
        after.percentage(Outcome::ReleasedOnRecognizance)
            < before.percentage(Outcome::ReleasedOnRecognizance)
    );
    assert!(
        after.percentage(Outcome::DetainedPretrial) > before.percentage(Outcome::DetainedPretrial)
    );
    assert_close(after.percentage(Outcome::ReleasedOnRecognizance).value(), 40.0);
    assert_close(after.percentage(Outcome::DetainedPretrial).value(), 35.0);
}

#[test]
fn each_high_risk_trigger_is_sufficient_on_its_own() {
    let baseline = kings_larceny();
    assert!(!RiskIndicators::from_attributes(&baseline).high_risk);

    let mut open_felony = baseline;
    open_felony.pending_cases = PendingCases::OpenFelony;
    let mut supervised = baseline;
    supervised.on_supervision = SupervisionStatus::Yes;
    let mut vfo = baseline;
    vfo.prior_convictions = PriorConvictions::ViolentFelony;
    let mut nvfo = baseline;
    nvfo.prior_convictions = PriorConvictions::NonViolentFelony;

    for attributes in [open_felony, supervised, vfo, nvfo] {
        let result = score(&attributes);
        assert!(result.indicators.high_risk, "{attributes:?}");
        assert_close(result.percentage(Outcome::SupervisedRelease).value(), 40.0);
        assert_close(result.percentage(Outcome::NoRearrest).value(), 70.0);
        assert_close(result.percentage(Outcome::Rearrested).value(), 30.0);
    }

    let mut misdemeanor = baseline;
    misdemeanor.pending_cases = PendingCases::OpenMisdemeanor;
    misdemeanor.on_supervision = SupervisionStatus::Unknown;
    misdemeanor.prior_convictions = PriorConvictions::Misdemeanor;
    assert!(!RiskIndicators::from_attributes(&misdemeanor).high_risk);
}

#[test]
fn non_violent_felony_history_counts_as_high_risk() {
    let mut attributes = kings_larceny();
    attributes.prior_convictions = PriorConvictions::NonViolentFelony;

    let result = score(&attributes);

    assert!(result.indicators.high_risk);
    assert!(result.indicators.has_prior_convictions);
    assert!(!result.indicators.violent_charge);
    assert_close(result.percentage(Outcome::ReleasedOnRecognizance).value(), 40.0);
    assert_close(result.percentage(Outcome::DetainedPretrial).value(), 35.0);
    assert_close(result.percentage(Outcome::Rearrested).value(), 30.0);
}

#[test]
fn only_felony_priors_mark_prior_history_as_high_risk() {
    let flagged: Vec<_> = PriorConvictions::all()
        .iter()
        .copied()
        .filter(|priors| priors.is_felony())
        .collect();
    assert_eq!(
        flagged,
        vec![PriorConvictions::NonViolentFelony, PriorConvictions::ViolentFelony]
    );
}

#[test]
fn maximum_incarceration_adjustment_clamps_sentence_outcomes() {
    let mut attributes = bronx_assault();
    attributes.top_charge = TopCharge::Robbery1st;
    attributes.prior_convictions = PriorConvictions::Misdemeanor;

    let indicators = RiskIndicators::from_attributes(&attributes);
    assert_close(indicators.incarceration_adjustment(), 35.0);

    let result = score(&attributes);
    assert_close(result.percentage(Outcome::ProbationOnly).value(), 15.0);
    assert_close(result.percentage(Outcome::ShortTermIncarceration).value(), 52.5);
    assert_close(result.percentage(Outcome::LongTermIncarceration).value(), 40.0);
    assert_close(result.percentage(Outcome::UnderSixMonths).value(), 25.0);
    assert_close(result.percentage(Outcome::SixMonthsToTwoYears).value(), 47.5);
    assert_close(result.percentage(Outcome::OverTwoYears).value(), 35.0);
}

#[test]
fn minimum_incarceration_adjustment_clamps_at_lower_bounds() {
    let result = score(&kings_larceny());
    assert_close(result.indicators.incarceration_adjustment(), -10.0);

    assert_close(result.percentage(Outcome::ProbationOnly).value(), 50.0);
    assert_close(result.percentage(Outcome::ShortTermIncarceration).value(), 30.0);
    assert_close(result.percentage(Outcome::LongTermIncarceration).value(), 5.0);
    assert_close(result.percentage(Outcome::UnderSixMonths).value(), 60.0);
    assert_close(result.percentage(Outcome::SixMonthsToTwoYears).value(), 25.0);
    assert_close(result.percentage(Outcome::OverTwoYears).value(), 5.0);
}

#[test]
fn superior_court_shifts_bail_toward_higher_amounts() {
    let mut attributes = kings_larceny();
    attributes.court_type = CourtType::Superior;

    let result = score(&attributes);
    assert_close(result.percentage(Outcome::NoBailSet).value(), 60.0);
    assert_close(result.percentage(Outcome::BailUnder5000).value(), 15.0);
    assert_close(result.percentage(Outcome::Bail5000To25000).value(), 45.0);
    assert_close(result.percentage(Outcome::BailOver25000).value(), 25.0);
}

#[test]
fn fractional_outcomes_keep_exact_values_and_round_for_display() {
    let result = score(&kings_larceny());

    let lesser = result.percentage(Outcome::ConvictedLesserCharge);
    let acquitted = result.percentage(Outcome::Acquitted);
    assert_close(lesser.value(), 32.5);
    assert_close(acquitted.value(), 15.0 + 5.0 / 3.0);

    assert_eq!(lesser.rounded(), 33);
    assert_eq!(acquitted.rounded(), 17);
    assert_eq!(lesser.to_string(), "32.5%");
    assert_eq!(acquitted.to_string(), "16.7%");
    assert_eq!(result.percentage(Outcome::ConvictedAsCharged).to_string(), "70%");
}

#[test]
fn county_does_not_affect_the_analysis() {
    let mut queens = bronx_assault();
    queens.county = crate::analysis::domain::County::Queens;

    let bronx_result = score(&bronx_assault());
    let queens_result = score(&queens);
    for outcome in Outcome::all() {
        assert_eq!(
            bronx_result.percentage(outcome),
            queens_result.percentage(outcome)
        );
    }
}
