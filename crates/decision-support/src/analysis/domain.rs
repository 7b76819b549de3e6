use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of options backing a single case parameter field.
pub trait AttributeDomain: Copy + Sized + 'static {
    const FIELD: AttributeField;

    /// Options in the order the form presents them.
    fn all() -> &'static [Self];

    /// Exact label exchanged with the form and the API.
    fn label(self) -> &'static str;

    fn from_label(raw: &str) -> Result<Self, UnknownLabel> {
        let trimmed = raw.trim();
        Self::all()
            .iter()
            .copied()
            .find(|option| option.label() == trimmed)
            .ok_or_else(|| UnknownLabel {
                field: Self::FIELD,
                value: raw.to_string(),
            })
    }
}

/// Identifies one of the six case parameter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeField {
    County,
    CourtType,
    TopCharge,
    PendingCases,
    OnSupervision,
    PriorConvictions,
}

impl AttributeField {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::County,
            Self::CourtType,
            Self::TopCharge,
            Self::PendingCases,
            Self::OnSupervision,
            Self::PriorConvictions,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::County => "county",
            Self::CourtType => "court_type",
            Self::TopCharge => "top_charge",
            Self::PendingCases => "pending_cases",
            Self::OnSupervision => "on_supervision",
            Self::PriorConvictions => "prior_convictions",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::County => "County Name",
            Self::CourtType => "Court Type",
            Self::TopCharge => "Top Charge at Arraignment",
            Self::PendingCases => "Pending Cases at Arraignment",
            Self::OnSupervision => "On Supervision Time at Arraignment",
            Self::PriorConvictions => "Prior Convictions",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::County => "Select county",
            Self::CourtType => "Select court type",
            Self::TopCharge => "Select top charge",
            Self::PendingCases => "Select pending cases status",
            Self::OnSupervision => "Select supervision status",
            Self::PriorConvictions => "Select prior convictions",
        }
    }
}

impl fmt::Display for AttributeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum County {
    Bronx,
    Kings,
    #[serde(rename = "New York")]
    NewYork,
    Queens,
    Richmond,
}

impl AttributeDomain for County {
    const FIELD: AttributeField = AttributeField::County;

    fn all() -> &'static [Self] {
        &[
            Self::Bronx,
            Self::Kings,
            Self::NewYork,
            Self::Queens,
            Self::Richmond,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Bronx => "Bronx",
            Self::Kings => "Kings",
            Self::NewYork => "New York",
            Self::Queens => "Queens",
            Self::Richmond => "Richmond",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourtType {
    Local,
    Superior,
}

impl AttributeDomain for CourtType {
    const FIELD: AttributeField = AttributeField::CourtType;

    fn all() -> &'static [Self] {
        &[Self::Local, Self::Superior]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Superior => "Superior",
        }
    }
}

/// Offense grouping used to classify a top charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeFamily {
    Assault,
    Burglary,
    Larceny,
    Robbery,
    ControlledSubstance,
}

impl ChargeFamily {
    pub const fn is_violent(self) -> bool {
        matches!(self, Self::Assault | Self::Robbery)
    }
}

/// New York Penal Law statutes offered as the top charge at arraignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopCharge {
    #[serde(rename = "PL 120.00 - Assault 3rd")]
    Assault3rd,
    #[serde(rename = "PL 120.05 - Assault 2nd")]
    Assault2nd,
    #[serde(rename = "PL 120.10 - Assault 1st")]
    Assault1st,
    #[serde(rename = "PL 140.20 - Burglary 3rd")]
    Burglary3rd,
    #[serde(rename = "PL 140.25 - Burglary 2nd")]
    Burglary2nd,
    #[serde(rename = "PL 140.30 - Burglary 1st")]
    Burglary1st,
    #[serde(rename = "PL 155.25 - Petit Larceny")]
    PetitLarceny,
    #[serde(rename = "PL 155.30 - Grand Larceny 4th")]
    GrandLarceny4th,
    #[serde(rename = "PL 155.35 - Grand Larceny 3rd")]
    GrandLarceny3rd,
    #[serde(rename = "PL 155.40 - Grand Larceny 2nd")]
    GrandLarceny2nd,
    #[serde(rename = "PL 155.42 - Grand Larceny 1st")]
    GrandLarceny1st,
    #[serde(rename = "PL 160.05 - Robbery 3rd")]
    Robbery3rd,
    #[serde(rename = "PL 160.10 - Robbery 2nd")]
    Robbery2nd,
    #[serde(rename = "PL 160.15 - Robbery 1st")]
    Robbery1st,
    #[serde(rename = "PL 220.03 - Criminal Possession Controlled Substance 7th")]
    ControlledSubstance7th,
    #[serde(rename = "PL 220.06 - Criminal Possession Controlled Substance 5th")]
    ControlledSubstance5th,
    #[serde(rename = "PL 220.09 - Criminal Possession Controlled Substance 4th")]
    ControlledSubstance4th,
    #[serde(rename = "PL 220.16 - Criminal Possession Controlled Substance 3rd")]
    ControlledSubstance3rd,
    #[serde(rename = "PL 220.18 - Criminal Possession Controlled Substance 2nd")]
    ControlledSubstance2nd,
    #[serde(rename = "PL 220.21 - Criminal Possession Controlled Substance 1st")]
    ControlledSubstance1st,
}

impl TopCharge {
    pub const fn statute(self) -> &'static str {
        match self {
            Self::Assault3rd => "PL 120.00",
            Self::Assault2nd => "PL 120.05",
            Self::Assault1st => "PL 120.10",
            Self::Burglary3rd => "PL 140.20",
            Self::Burglary2nd => "PL 140.25",
            Self::Burglary1st => "PL 140.30",
            Self::PetitLarceny => "PL 155.25",
            Self::GrandLarceny4th => "PL 155.30",
            Self::GrandLarceny3rd => "PL 155.35",
            Self::GrandLarceny2nd => "PL 155.40",
            Self::GrandLarceny1st => "PL 155.42",
            Self::Robbery3rd => "PL 160.05",
            Self::Robbery2nd => "PL 160.10",
            Self::Robbery1st => "PL 160.15",
            Self::ControlledSubstance7th => "PL 220.03",
            Self::ControlledSubstance5th => "PL 220.06",
            Self::ControlledSubstance4th => "PL 220.09",
            Self::ControlledSubstance3rd => "PL 220.16",
            Self::ControlledSubstance2nd => "PL 220.18",
            Self::ControlledSubstance1st => "PL 220.21",
        }
    }

    pub const fn family(self) -> ChargeFamily {
        match self {
            Self::Assault3rd | Self::Assault2nd | Self::Assault1st => ChargeFamily::Assault,
            Self::Burglary3rd | Self::Burglary2nd | Self::Burglary1st => ChargeFamily::Burglary,
            Self::PetitLarceny
            | Self::GrandLarceny4th
            | Self::GrandLarceny3rd
            | Self::GrandLarceny2nd
            | Self::GrandLarceny1st => ChargeFamily::Larceny,
            Self::Robbery3rd | Self::Robbery2nd | Self::Robbery1st => ChargeFamily::Robbery,
            Self::ControlledSubstance7th
            | Self::ControlledSubstance5th
            | Self::ControlledSubstance4th
            | Self::ControlledSubstance3rd
            | Self::ControlledSubstance2nd
            | Self::ControlledSubstance1st => ChargeFamily::ControlledSubstance,
        }
    }

    pub const fn is_violent(self) -> bool {
        self.family().is_violent()
    }
}

impl AttributeDomain for TopCharge {
    const FIELD: AttributeField = AttributeField::TopCharge;

    fn all() -> &'static [Self] {
        &[
            Self::Assault3rd,
            Self::Assault2nd,
            Self::Assault1st,
            Self::Burglary3rd,
            Self::Burglary2nd,
            Self::Burglary1st,
            Self::PetitLarceny,
            Self::GrandLarceny4th,
            Self::GrandLarceny3rd,
            Self::GrandLarceny2nd,
            Self::GrandLarceny1st,
            Self::Robbery3rd,
            Self::Robbery2nd,
            Self::Robbery1st,
            Self::ControlledSubstance7th,
            Self::ControlledSubstance5th,
            Self::ControlledSubstance4th,
            Self::ControlledSubstance3rd,
            Self::ControlledSubstance2nd,
            Self::ControlledSubstance1st,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Assault3rd => "PL 120.00 - Assault 3rd",
            Self::Assault2nd => "PL 120.05 - Assault 2nd",
            Self::Assault1st => "PL 120.10 - Assault 1st",
            Self::Burglary3rd => "PL 140.20 - Burglary 3rd",
            Self::Burglary2nd => "PL 140.25 - Burglary 2nd",
            Self::Burglary1st => "PL 140.30 - Burglary 1st",
            Self::PetitLarceny => "PL 155.25 - Petit Larceny",
            Self::GrandLarceny4th => "PL 155.30 - Grand Larceny 4th",
            Self::GrandLarceny3rd => "PL 155.35 - Grand Larceny 3rd",
            Self::GrandLarceny2nd => "PL 155.40 - Grand Larceny 2nd",
            Self::GrandLarceny1st => "PL 155.42 - Grand Larceny 1st",
            Self::Robbery3rd => "PL 160.05 - Robbery 3rd",
            Self::Robbery2nd => "PL 160.10 - Robbery 2nd",
            Self::Robbery1st => "PL 160.15 - Robbery 1st",
            Self::ControlledSubstance7th => {
                "PL 220.03 - Criminal Possession Controlled Substance 7th"
            }
            Self::ControlledSubstance5th => {
                "PL 220.06 - Criminal Possession Controlled Substance 5th"
            }
            Self::ControlledSubstance4th => {
                "PL 220.09 - Criminal Possession Controlled Substance 4th"
            }
            Self::ControlledSubstance3rd => {
                "PL 220.16 - Criminal Possession Controlled Substance 3rd"
            }
            Self::ControlledSubstance2nd => {
                "PL 220.18 - Criminal Possession Controlled Substance 2nd"
            }
            Self::ControlledSubstance1st => {
                "PL 220.21 - Criminal Possession Controlled Substance 1st"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PendingCases {
    #[serde(rename = "Missing/null")]
    Missing,
    #[serde(rename = "No open cases")]
    NoOpenCases,
    #[serde(rename = "Open Felony")]
    OpenFelony,
    #[serde(rename = "Open Misdemeanor")]
    OpenMisdemeanor,
}

impl AttributeDomain for PendingCases {
    const FIELD: AttributeField = AttributeField::PendingCases;

    fn all() -> &'static [Self] {
        &[
            Self::Missing,
            Self::NoOpenCases,
            Self::OpenFelony,
            Self::OpenMisdemeanor,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Missing => "Missing/null",
            Self::NoOpenCases => "No open cases",
            Self::OpenFelony => "Open Felony",
            Self::OpenMisdemeanor => "Open Misdemeanor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupervisionStatus {
    #[serde(rename = "Null")]
    Unknown,
    Yes,
    No,
}

impl AttributeDomain for SupervisionStatus {
    const FIELD: AttributeField = AttributeField::OnSupervision;

    fn all() -> &'static [Self] {
        &[Self::Unknown, Self::Yes, Self::No]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Null",
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorConvictions {
    #[serde(rename = "No prior convictions")]
    NoPriors,
    #[serde(rename = "Prior Misdemeanor")]
    Misdemeanor,
    /// Non-violent felony offense.
    #[serde(rename = "Prior NVFO")]
    NonViolentFelony,
    /// Violent felony offense.
    #[serde(rename = "Prior VFO")]
    ViolentFelony,
}

impl PriorConvictions {
    /// `Prior VFO` and `Prior NVFO`.
    pub const fn is_felony(self) -> bool {
        matches!(self, Self::NonViolentFelony | Self::ViolentFelony)
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::NoPriors => "No prior convictions",
            Self::Misdemeanor => "Prior Misdemeanor",
            Self::NonViolentFelony => "Prior NVFO (Non-Violent Felony Offense)",
            Self::ViolentFelony => "Prior VFO (Violent Felony Offense)",
        }
    }
}

impl AttributeDomain for PriorConvictions {
    const FIELD: AttributeField = AttributeField::PriorConvictions;

    fn all() -> &'static [Self] {
        &[
            Self::NoPriors,
            Self::Misdemeanor,
            Self::NonViolentFelony,
            Self::ViolentFelony,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::NoPriors => "No prior convictions",
            Self::Misdemeanor => "Prior Misdemeanor",
            Self::NonViolentFelony => "Prior NVFO",
            Self::ViolentFelony => "Prior VFO",
        }
    }
}

/// Fully populated case parameters submitted for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseAttributes {
    pub county: County,
    pub court_type: CourtType,
    pub top_charge: TopCharge,
    pub pending_cases: PendingCases,
    pub on_supervision: SupervisionStatus,
    pub prior_convictions: PriorConvictions,
}

impl CaseAttributes {
    pub fn label_for(&self, field: AttributeField) -> &'static str {
        match field {
            AttributeField::County => self.county.label(),
            AttributeField::CourtType => self.court_type.label(),
            AttributeField::TopCharge => self.top_charge.label(),
            AttributeField::PendingCases => self.pending_cases.label(),
            AttributeField::OnSupervision => self.on_supervision.label(),
            AttributeField::PriorConvictions => self.prior_convictions.label(),
        }
    }

    /// Rows for the case summary card, in form order.
    pub fn summary_rows(&self) -> Vec<CaseSummaryRow> {
        AttributeField::ordered()
            .into_iter()
            .map(|field| CaseSummaryRow {
                field,
                field_label: field.label(),
                value: self.label_for(field),
            })
            .collect()
    }
}

impl From<CaseAttributes> for CaseAttributesDraft {
    fn from(attributes: CaseAttributes) -> Self {
        Self {
            county: attributes.county.label().to_string(),
            court_type: attributes.court_type.label().to_string(),
            top_charge: attributes.top_charge.label().to_string(),
            pending_cases: attributes.pending_cases.label().to_string(),
            on_supervision: attributes.on_supervision.label().to_string(),
            prior_convictions: attributes.prior_convictions.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseSummaryRow {
    pub field: AttributeField,
    pub field_label: &'static str,
    pub value: &'static str,
}

/// Case parameter form as collected; an empty string marks an unselected field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseAttributesDraft {
    pub county: String,
    pub court_type: String,
    pub top_charge: String,
    pub pending_cases: String,
    pub on_supervision: String,
    pub prior_convictions: String,
}

impl CaseAttributesDraft {
    fn value_for(&self, field: AttributeField) -> &str {
        match field {
            AttributeField::County => &self.county,
            AttributeField::CourtType => &self.court_type,
            AttributeField::TopCharge => &self.top_charge,
            AttributeField::PendingCases => &self.pending_cases,
            AttributeField::OnSupervision => &self.on_supervision,
            AttributeField::PriorConvictions => &self.prior_convictions,
        }
    }

    /// Fields still unselected, in form order.
    pub fn missing_fields(&self) -> Vec<AttributeField> {
        AttributeField::ordered()
            .into_iter()
            .filter(|field| self.value_for(*field).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn complete(&self) -> Result<CaseAttributes, DraftError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(IncompleteAttributes { missing }.into());
        }

        Ok(CaseAttributes {
            county: County::from_label(&self.county)?,
            court_type: CourtType::from_label(&self.court_type)?,
            top_charge: TopCharge::from_label(&self.top_charge)?,
            pending_cases: PendingCases::from_label(&self.pending_cases)?,
            on_supervision: SupervisionStatus::from_label(&self.on_supervision)?,
            prior_convictions: PriorConvictions::from_label(&self.prior_convictions)?,
        })
    }
}

/// Raised when a value falls outside a field's option list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {field} option")]
pub struct UnknownLabel {
    pub field: AttributeField,
    pub value: String,
}

/// Raised when the form is submitted with unselected fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please fill in all fields before proceeding.")]
pub struct IncompleteAttributes {
    pub missing: Vec<AttributeField>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error(transparent)]
    Incomplete(#[from] IncompleteAttributes),
    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabel),
}
