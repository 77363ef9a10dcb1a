use serde::Deserialize;

use super::DiagnosisStatus;

/// One persona's reading as returned by the completion model.
///
/// Measurements are kept as `f64` because the model is free to answer with
/// decimals; rounding happens once, after averaging.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelOpinion {
    pub heart_rate: f64,
    pub pr_interval: f64,
    pub qrs_duration: f64,
    pub qt_interval: f64,
    pub st_segment: String,
    pub diagnosis: OpinionDiagnosis,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpinionDiagnosis {
    pub status: DiagnosisStatus,
    #[serde(default)]
    pub condition: Option<String>,
    pub details: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}
