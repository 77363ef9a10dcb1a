use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosisStatus {
    #[serde(alias = "Normal", alias = "NORMAL")]
    Normal,
    #[serde(alias = "Abnormal", alias = "ABNORMAL")]
    Abnormal,
}

impl DiagnosisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosisStatus::Normal => "normal",
            DiagnosisStatus::Abnormal => "abnormal",
        }
    }

    pub fn as_upper(&self) -> &'static str {
        match self {
            DiagnosisStatus::Normal => "NORMAL",
            DiagnosisStatus::Abnormal => "ABNORMAL",
        }
    }

    pub fn is_abnormal(&self) -> bool {
        matches!(self, DiagnosisStatus::Abnormal)
    }
}

impl FromStr for DiagnosisStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(DiagnosisStatus::Normal),
            "abnormal" => Ok(DiagnosisStatus::Abnormal),
            other => Err(format!("Invalid diagnosis status: {}", other)),
        }
    }
}

impl fmt::Display for DiagnosisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
