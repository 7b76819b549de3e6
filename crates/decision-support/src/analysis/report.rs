use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::CaseAttributes;
use super::scoring::RiskIndicators;

pub const DISCLAIMER: &str = "These percentages are generated for demonstration purposes only \
and should not be used for actual legal decision-making. Real criminal justice decisions \
require comprehensive case review by qualified legal professionals and should consider \
additional factors not captured in this simplified statistical model.";

/// Share of comparable cases, kept at full precision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    pub fn clamped(value: f64, range: OutcomeRange) -> Self {
        Self(clamp(value, range.low, range.high))
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whole-number reading, rounding halves away from zero.
    pub fn rounded(self) -> u8 {
        self.0.round().clamp(0.0, 100.0) as u8
    }

    pub fn is_whole(self) -> bool {
        (self.0 - self.0.round()).abs() < 1e-9
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{:.0}%", self.0)
        } else {
            write!(f, "{:.1}%", self.0)
        }
    }
}

pub fn clamp(value: f64, low: f64, high: f64) -> f64 {
    low.max(high.min(value))
}

/// Closed interval an outcome percentage is held to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeRange {
    pub low: f64,
    pub high: f64,
}

impl OutcomeRange {
    const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(self, percentage: Percentage) -> bool {
        percentage.value() >= self.low && percentage.value() <= self.high
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ReleaseDecisions,
    BailRanges,
    PretrialRearrest,
    DisposedCaseOutcomes,
    ConvictionChargeLevels,
    SentenceSeverity,
    IncarcerationDurations,
}

impl Category {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::ReleaseDecisions,
            Self::BailRanges,
            Self::PretrialRearrest,
            Self::DisposedCaseOutcomes,
            Self::ConvictionChargeLevels,
            Self::SentenceSeverity,
            Self::IncarcerationDurations,
        ]
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::ReleaseDecisions => "Release Decisions",
            Self::BailRanges => "Bail Ranges",
            Self::PretrialRearrest => "Pre-Trial Rearrest",
            Self::DisposedCaseOutcomes => "Disposed Case Outcomes",
            Self::ConvictionChargeLevels => "Convictions-Charge Level",
            Self::SentenceSeverity => "Most Serious Sentences",
            Self::IncarcerationDurations => "Incarcerative Sentence Ranges",
        }
    }

    pub const fn outcomes(self) -> &'static [Outcome] {
        match self {
            Self::ReleaseDecisions => &[
                Outcome::ReleasedOnRecognizance,
                Outcome::SupervisedRelease,
                Outcome::DetainedPretrial,
            ],
            Self::BailRanges => &[
                Outcome::NoBailSet,
                Outcome::BailUnder5000,
                Outcome::Bail5000To25000,
                Outcome::BailOver25000,
            ],
            Self::PretrialRearrest => &[Outcome::NoRearrest, Outcome::Rearrested],
            Self::DisposedCaseOutcomes => &[
                Outcome::Dismissed,
                Outcome::PleaBargain,
                Outcome::TrialConviction,
            ],
            Self::ConvictionChargeLevels => &[
                Outcome::ConvictedAsCharged,
                Outcome::ConvictedLesserCharge,
                Outcome::Acquitted,
            ],
            Self::SentenceSeverity => &[
                Outcome::ProbationOnly,
                Outcome::ShortTermIncarceration,
                Outcome::LongTermIncarceration,
            ],
            Self::IncarcerationDurations => &[
                Outcome::UnderSixMonths,
                Outcome::SixMonthsToTwoYears,
                Outcome::OverTwoYears,
            ],
        }
    }
}

/// Individual outcome displayed as a labeled bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    ReleasedOnRecognizance,
    SupervisedRelease,
    DetainedPretrial,
    NoBailSet,
    BailUnder5000,
    Bail5000To25000,
    BailOver25000,
    NoRearrest,
    Rearrested,
    Dismissed,
    PleaBargain,
    TrialConviction,
    ConvictedAsCharged,
    ConvictedLesserCharge,
    Acquitted,
    ProbationOnly,
    ShortTermIncarceration,
    LongTermIncarceration,
    UnderSixMonths,
    SixMonthsToTwoYears,
    OverTwoYears,
}

impl Outcome {
    pub fn all() -> impl Iterator<Item = Outcome> {
        Category::ordered()
            .into_iter()
            .flat_map(|category| category.outcomes().iter().copied())
    }

    pub const fn category(self) -> Category {
        match self {
            Self::ReleasedOnRecognizance | Self::SupervisedRelease | Self::DetainedPretrial => {
                Category::ReleaseDecisions
            }
            Self::NoBailSet | Self::BailUnder5000 | Self::Bail5000To25000 | Self::BailOver25000 => {
                Category::BailRanges
            }
            Self::NoRearrest | Self::Rearrested => Category::PretrialRearrest,
            Self::Dismissed | Self::PleaBargain | Self::TrialConviction => {
                Category::DisposedCaseOutcomes
            }
            Self::ConvictedAsCharged | Self::ConvictedLesserCharge | Self::Acquitted => {
                Category::ConvictionChargeLevels
            }
            Self::ProbationOnly | Self::ShortTermIncarceration | Self::LongTermIncarceration => {
                Category::SentenceSeverity
            }
            Self::UnderSixMonths | Self::SixMonthsToTwoYears | Self::OverTwoYears => {
                Category::IncarcerationDurations
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ReleasedOnRecognizance => "Released on Recognizance",
            Self::SupervisedRelease => "Supervised Release",
            Self::DetainedPretrial => "Detained Pre-trial",
            Self::NoBailSet => "No Bail Set",
            Self::BailUnder5000 => "Under $5,000",
            Self::Bail5000To25000 => "$5,000 - $25,000",
            Self::BailOver25000 => "Over $25,000",
            Self::NoRearrest => "No Rearrest",
            Self::Rearrested => "Rearrested",
            Self::Dismissed => "Case Dismissed",
            Self::PleaBargain => "Plea Bargain",
            Self::TrialConviction => "Trial Conviction",
            Self::ConvictedAsCharged => "Convicted as Charged (Felony)",
            Self::ConvictedLesserCharge => "Convicted of Lesser Charge",
            Self::Acquitted => "Acquitted",
            Self::ProbationOnly => "Probation Only",
            Self::ShortTermIncarceration => "Short-term Incarceration",
            Self::LongTermIncarceration => "Long-term Incarceration",
            Self::UnderSixMonths => "Under 6 Months",
            Self::SixMonthsToTwoYears => "6 Months - 2 Years",
            Self::OverTwoYears => "Over 2 Years",
        }
    }

    pub const fn range(self) -> OutcomeRange {
        match self {
            Self::ReleasedOnRecognizance => OutcomeRange::new(5.0, 95.0),
            Self::SupervisedRelease => OutcomeRange::new(5.0, 40.0),
            Self::DetainedPretrial => OutcomeRange::new(5.0, 45.0),
            Self::NoBailSet => OutcomeRange::new(5.0, 60.0),
            Self::BailUnder5000 => OutcomeRange::new(10.0, 45.0),
            Self::Bail5000To25000 => OutcomeRange::new(15.0, 50.0),
            Self::BailOver25000 => OutcomeRange::new(5.0, 35.0),
            Self::NoRearrest => OutcomeRange::new(60.0, 95.0),
            Self::Rearrested => OutcomeRange::new(5.0, 40.0),
            Self::Dismissed => OutcomeRange::new(10.0, 35.0),
            Self::PleaBargain => OutcomeRange::new(40.0, 75.0),
            Self::TrialConviction => OutcomeRange::new(5.0, 25.0),
            Self::ConvictedAsCharged => OutcomeRange::new(20.0, 80.0),
            Self::ConvictedLesserCharge => OutcomeRange::new(15.0, 45.0),
            Self::Acquitted => OutcomeRange::new(5.0, 25.0),
            Self::ProbationOnly => OutcomeRange::new(15.0, 60.0),
            Self::ShortTermIncarceration => OutcomeRange::new(20.0, 55.0),
            Self::LongTermIncarceration => OutcomeRange::new(5.0, 40.0),
            Self::UnderSixMonths => OutcomeRange::new(25.0, 70.0),
            Self::SixMonthsToTwoYears => OutcomeRange::new(15.0, 50.0),
            Self::OverTwoYears => OutcomeRange::new(5.0, 35.0),
        }
    }

    /// Clamp a raw estimate into this outcome's range.
    pub fn estimate(self, raw: f64) -> Percentage {
        Percentage::clamped(raw, self.range())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseDecisions {
    pub released_on_recognizance: Percentage,
    pub supervised_release: Percentage,
    pub detained_pretrial: Percentage,
    pub summary: String,
}

impl ReleaseDecisions {
    pub fn new(
        released_on_recognizance: Percentage,
        supervised_release: Percentage,
        detained_pretrial: Percentage,
    ) -> Self {
        let summary = format!(
            "In comparable cases, {released_on_recognizance} of defendants were released on \
             recognizance, {supervised_release} were placed on supervised release, and \
             {detained_pretrial} were detained pre-trial."
        );
        Self {
            released_on_recognizance,
            supervised_release,
            detained_pretrial,
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BailRanges {
    pub no_bail_set: Percentage,
    pub under_5000: Percentage,
    pub between_5000_and_25000: Percentage,
    pub over_25000: Percentage,
    pub summary: String,
}

impl BailRanges {
    pub fn new(
        no_bail_set: Percentage,
        under_5000: Percentage,
        between_5000_and_25000: Percentage,
        over_25000: Percentage,
    ) -> Self {
        let summary = format!(
            "No bail was set in {no_bail_set} of comparable cases; bail under $5,000 was set in \
             {under_5000}, between $5,000 and $25,000 in {between_5000_and_25000}, and over \
             $25,000 in {over_25000}."
        );
        Self {
            no_bail_set,
            under_5000,
            between_5000_and_25000,
            over_25000,
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PretrialRearrest {
    pub no_rearrest: Percentage,
    pub rearrested: Percentage,
    pub summary: String,
}

impl PretrialRearrest {
    pub fn new(no_rearrest: Percentage, rearrested: Percentage) -> Self {
        let summary = format!(
            "{no_rearrest} of comparable defendants were not rearrested before disposition, \
             while {rearrested} were rearrested."
        );
        Self {
            no_rearrest,
            rearrested,
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisposedCaseOutcomes {
    pub dismissed: Percentage,
    pub plea_bargain: Percentage,
    pub trial_conviction: Percentage,
    pub summary: String,
}

impl DisposedCaseOutcomes {
    pub fn new(dismissed: Percentage, plea_bargain: Percentage, trial_conviction: Percentage) -> Self {
        let summary = format!(
            "Of disposed comparable cases, {dismissed} were dismissed, {plea_bargain} were \
             resolved by plea bargain, and {trial_conviction} ended in a trial conviction."
        );
        Self {
            dismissed,
            plea_bargain,
            trial_conviction,
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvictionChargeLevels {
    pub convicted_as_charged: Percentage,
    pub convicted_lesser_charge: Percentage,
    pub acquitted: Percentage,
    pub summary: String,
}

impl ConvictionChargeLevels {
    pub fn new(
        convicted_as_charged: Percentage,
        convicted_lesser_charge: Percentage,
        acquitted: Percentage,
    ) -> Self {
        let summary = format!(
            "{convicted_as_charged} of comparable cases ended in a felony conviction as \
             charged, {convicted_lesser_charge} in a conviction on a lesser charge, and \
             {acquitted} in acquittal."
        );
        Self {
            convicted_as_charged,
            convicted_lesser_charge,
            acquitted,
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceSeverity {
    pub probation_only: Percentage,
    pub short_term_incarceration: Percentage,
    pub long_term_incarceration: Percentage,
    pub summary: String,
}

impl SentenceSeverity {
    pub fn new(
        probation_only: Percentage,
        short_term_incarceration: Percentage,
        long_term_incarceration: Percentage,
    ) -> Self {
        let summary = format!(
            "The most serious sentence was probation only in {probation_only} of comparable \
             cases, short-term incarceration in {short_term_incarceration}, and long-term \
             incarceration in {long_term_incarceration}."
        );
        Self {
            probation_only,
            short_term_incarceration,
            long_term_incarceration,
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncarcerationDurations {
    pub under_six_months: Percentage,
    pub six_months_to_two_years: Percentage,
    pub over_two_years: Percentage,
    pub summary: String,
}

impl IncarcerationDurations {
    pub fn new(
        under_six_months: Percentage,
        six_months_to_two_years: Percentage,
        over_two_years: Percentage,
    ) -> Self {
        let summary = format!(
            "Among incarcerative sentences, {under_six_months} were under 6 months, \
             {six_months_to_two_years} ran from 6 months to 2 years, and {over_two_years} \
             exceeded 2 years."
        );
        Self {
            under_six_months,
            six_months_to_two_years,
            over_two_years,
            summary,
        }
    }
}

/// Derived analysis for one set of case attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub attributes: CaseAttributes,
    pub indicators: RiskIndicators,
    pub release_decisions: ReleaseDecisions,
    pub bail_ranges: BailRanges,
    pub pretrial_rearrest: PretrialRearrest,
    pub disposed_case_outcomes: DisposedCaseOutcomes,
    pub conviction_charge_levels: ConvictionChargeLevels,
    pub sentence_severity: SentenceSeverity,
    pub incarceration_durations: IncarcerationDurations,
}

impl AnalysisResult {
    pub fn percentage(&self, outcome: Outcome) -> Percentage {
        match outcome {
            Outcome::ReleasedOnRecognizance => self.release_decisions.released_on_recognizance,
            Outcome::SupervisedRelease => self.release_decisions.supervised_release,
            Outcome::DetainedPretrial => self.release_decisions.detained_pretrial,
            Outcome::NoBailSet => self.bail_ranges.no_bail_set,
            Outcome::BailUnder5000 => self.bail_ranges.under_5000,
            Outcome::Bail5000To25000 => self.bail_ranges.between_5000_and_25000,
            Outcome::BailOver25000 => self.bail_ranges.over_25000,
            Outcome::NoRearrest => self.pretrial_rearrest.no_rearrest,
            Outcome::Rearrested => self.pretrial_rearrest.rearrested,
            Outcome::Dismissed => self.disposed_case_outcomes.dismissed,
            Outcome::PleaBargain => self.disposed_case_outcomes.plea_bargain,
            Outcome::TrialConviction => self.disposed_case_outcomes.trial_conviction,
            Outcome::ConvictedAsCharged => self.conviction_charge_levels.convicted_as_charged,
            Outcome::ConvictedLesserCharge => {
                self.conviction_charge_levels.convicted_lesser_charge
            }
            Outcome::Acquitted => self.conviction_charge_levels.acquitted,
            Outcome::ProbationOnly => self.sentence_severity.probation_only,
            Outcome::ShortTermIncarceration => self.sentence_severity.short_term_incarceration,
            Outcome::LongTermIncarceration => self.sentence_severity.long_term_incarceration,
            Outcome::UnderSixMonths => self.incarceration_durations.under_six_months,
            Outcome::SixMonthsToTwoYears => self.incarceration_durations.six_months_to_two_years,
            Outcome::OverTwoYears => self.incarceration_durations.over_two_years,
        }
    }

    pub fn summary(&self, category: Category) -> &str {
        match category {
            Category::ReleaseDecisions => &self.release_decisions.summary,
            Category::BailRanges => &self.bail_ranges.summary,
            Category::PretrialRearrest => &self.pretrial_rearrest.summary,
            Category::DisposedCaseOutcomes => &self.disposed_case_outcomes.summary,
            Category::ConvictionChargeLevels => &self.conviction_charge_levels.summary,
            Category::SentenceSeverity => &self.sentence_severity.summary,
            Category::IncarcerationDurations => &self.incarceration_durations.summary,
        }
    }
}
