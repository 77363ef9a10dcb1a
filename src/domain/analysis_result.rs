use serde::{Deserialize, Serialize};

use super::DiagnosisStatus;

/// Aggregated ECG reading returned to the viewer. Built once per upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub heart_rate: i64,
    pub pr_interval: i64,
    pub qrs_duration: i64,
    pub qt_interval: i64,
    pub st_segment: String,
    pub diagnosis: Diagnosis,
    pub waveform_data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub status: DiagnosisStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ensemble_agreement: Option<String>,
}
