use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the three HRN multiplicands a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Severity,
    Probability,
    Frequency,
}

impl FactorKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Severity => "severity",
            Self::Probability => "probability",
            Self::Frequency => "frequency",
        }
    }

    /// Permitted magnitudes for this factor, lowest first.
    pub fn permitted_values(self) -> Vec<f64> {
        match self {
            Self::Severity => Severity::ordered().iter().map(|s| s.value()).collect(),
            Self::Probability => Probability::ordered().iter().map(|p| p.value()).collect(),
            Self::Frequency => Frequency::ordered().iter().map(|f| f.value()).collect(),
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a raw number is not exactly one of a factor's permitted levels.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{factor} value {value} is not a permitted level (allowed: {allowed})", allowed = format_levels(.factor))]
pub struct InvalidFactorError {
    pub factor: FactorKind,
    pub value: f64,
}

fn format_levels(factor: &FactorKind) -> String {
    factor
        .permitted_values()
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Degree of possible harm (DPH).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Scratch,
    Laceration,
    MinorFracture,
    MajorFracture,
    LossOfOneLimb,
    LossOfTwoLimbs,
    Fatality,
}

impl Severity {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Scratch,
            Self::Laceration,
            Self::MinorFracture,
            Self::MajorFracture,
            Self::LossOfOneLimb,
            Self::LossOfTwoLimbs,
            Self::Fatality,
        ]
    }

    pub const fn value(self) -> f64 {
        match self {
            Self::Scratch => 0.1,
            Self::Laceration => 0.5,
            Self::MinorFracture => 1.0,
            Self::MajorFracture => 2.0,
            Self::LossOfOneLimb => 4.0,
            Self::LossOfTwoLimbs => 8.0,
            Self::Fatality => 15.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Scratch => "Arranhão / escoriação",
            Self::Laceration => "Dilaceração / corte leve",
            Self::MinorFracture => "Fratura de ossos menores",
            Self::MajorFracture => "Fratura de ossos maiores",
            Self::LossOfOneLimb => "Perda de um membro ou olho",
            Self::LossOfTwoLimbs => "Perda de dois membros ou olhos",
            Self::Fatality => "Fatalidade",
        }
    }

    pub fn from_value(value: f64) -> Result<Self, InvalidFactorError> {
        Self::ordered()
            .into_iter()
            .find(|level| level.value() == value)
            .ok_or(InvalidFactorError {
                factor: FactorKind::Severity,
                value,
            })
    }
}

/// Likelihood of occurrence (LO).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Probability {
    AlmostImpossible,
    HighlyUnlikely,
    Unlikely,
    Possible,
    EvenChance,
    Probable,
    Likely,
    Expected,
    Certain,
}

impl Probability {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::AlmostImpossible,
            Self::HighlyUnlikely,
            Self::Unlikely,
            Self::Possible,
            Self::EvenChance,
            Self::Probable,
            Self::Likely,
            Self::Expected,
            Self::Certain,
        ]
    }

    pub const fn value(self) -> f64 {
        match self {
            Self::AlmostImpossible => 0.033,
            Self::HighlyUnlikely => 1.0,
            Self::Unlikely => 1.5,
            Self::Possible => 2.5,
            Self::EvenChance => 4.0,
            Self::Probable => 5.0,
            Self::Likely => 8.0,
            Self::Expected => 10.0,
            Self::Certain => 15.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AlmostImpossible => "Quase impossível",
            Self::HighlyUnlikely => "Altamente improvável",
            Self::Unlikely => "Improvável",
            Self::Possible => "Possível",
            Self::EvenChance => "Alguma chance",
            Self::Probable => "Provável",
            Self::Likely => "Muito provável",
            Self::Expected => "Esperado",
            Self::Certain => "Certo",
        }
    }

    pub fn from_value(value: f64) -> Result<Self, InvalidFactorError> {
        Self::ordered()
            .into_iter()
            .find(|level| level.value() == value)
            .ok_or(InvalidFactorError {
                factor: FactorKind::Probability,
                value,
            })
    }
}

/// Frequency of exposure (FE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Rarely,
    Annually,
    Monthly,
    Weekly,
    Daily,
    Hourly,
    Constantly,
}

impl Frequency {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Rarely,
            Self::Annually,
            Self::Monthly,
            Self::Weekly,
            Self::Daily,
            Self::Hourly,
            Self::Constantly,
        ]
    }

    pub const fn value(self) -> f64 {
        match self {
            Self::Rarely => 0.1,
            Self::Annually => 0.2,
            Self::Monthly => 1.0,
            Self::Weekly => 1.5,
            Self::Daily => 2.5,
            Self::Hourly => 4.0,
            Self::Constantly => 5.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rarely => "Raramente",
            Self::Annually => "Anualmente",
            Self::Monthly => "Mensalmente",
            Self::Weekly => "Semanalmente",
            Self::Daily => "Diariamente",
            Self::Hourly => "De hora em hora",
            Self::Constantly => "Constantemente",
        }
    }

    pub fn from_value(value: f64) -> Result<Self, InvalidFactorError> {
        Self::ordered()
            .into_iter()
            .find(|level| level.value() == value)
            .ok_or(InvalidFactorError {
                factor: FactorKind::Frequency,
                value,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permitted_sets_match_hrn_tables() {
        assert_eq!(
            FactorKind::Severity.permitted_values(),
            vec![0.1, 0.5, 1.0, 2.0, 4.0, 8.0, 15.0]
        );
        assert_eq!(
            FactorKind::Probability.permitted_values(),
            vec![0.033, 1.0, 1.5, 2.5, 4.0, 5.0, 8.0, 10.0, 15.0]
        );
        assert_eq!(
            FactorKind::Frequency.permitted_values(),
            vec![0.1, 0.2, 1.0, 1.5, 2.5, 4.0, 5.0]
        );
    }

    #[test]
    fn lookup_requires_exact_match() {
        assert_eq!(Probability::from_value(0.033), Ok(Probability::AlmostImpossible));
        assert!(Probability::from_value(0.0330001).is_err());
        assert!(Severity::from_value(0.1 + 0.2 - 0.2).is_err());
        assert!(Frequency::from_value(f64::NAN).is_err());
    }

    #[test]
    fn error_names_factor_and_value() {
        let err = Severity::from_value(3.0).expect_err("3 is not a severity level");
        assert_eq!(err.factor, FactorKind::Severity);
        assert_eq!(err.value, 3.0);

        let message = err.to_string();
        assert!(message.starts_with("severity value 3 "), "{message}");
        assert!(message.contains("0.1, 0.5, 1, 2, 4, 8, 15"), "{message}");
    }
}
