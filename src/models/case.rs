use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Area of law a case falls under. Persisted with the Spanish labels the
/// practice uses on paper, so the wire format and the store agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseType {
    Civil,
    Penal,
    Laboral,
    Mercantil,
}

impl CaseType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Civil => "Civil",
            Self::Penal => "Penal",
            Self::Laboral => "Laboral",
            Self::Mercantil => "Mercantil",
        }
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Civil" => Ok(Self::Civil),
            "Penal" => Ok(Self::Penal),
            "Laboral" => Ok(Self::Laboral),
            "Mercantil" => Ok(Self::Mercantil),
            other => Err(format!("Unknown case type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    #[serde(rename = "En Progreso")]
    EnProgreso,
    Ganado,
    Perdido,
}

impl CaseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnProgreso => "En Progreso",
            Self::Ganado => "Ganado",
            Self::Perdido => "Perdido",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "En Progreso" => Ok(Self::EnProgreso),
            "Ganado" => Ok(Self::Ganado),
            "Perdido" => Ok(Self::Perdido),
            other => Err(format!("Unknown case status: {other}")),
        }
    }
}

/// A tracked client matter. Ids are assigned by the store in insertion
/// order; `owner` is set once at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: i32,
    pub client: String,
    pub case_type: CaseType,
    pub start_date: NaiveDate,
    pub status: CaseStatus,
    pub owner: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_type_round_trips_through_labels() {
        for t in [
            CaseType::Civil,
            CaseType::Penal,
            CaseType::Laboral,
            CaseType::Mercantil,
        ] {
            assert_eq!(t.as_str().parse::<CaseType>().unwrap(), t);
        }
    }

    #[test]
    fn status_uses_spanish_labels() {
        assert_eq!(CaseStatus::EnProgreso.as_str(), "En Progreso");
        assert_eq!(
            "En Progreso".parse::<CaseStatus>().unwrap(),
            CaseStatus::EnProgreso
        );
        assert!("InProgress".parse::<CaseStatus>().is_err());
    }

    #[test]
    fn status_serde_matches_display() {
        let json = serde_json::to_string(&CaseStatus::EnProgreso).unwrap();
        assert_eq!(json, "\"En Progreso\"");
    }
}
