use crate::domain::{AnalysisResult, Diagnosis, DiagnosisStatus, ModelOpinion};

pub const ENSEMBLE_SIZE: usize = 3;
pub const DEFAULT_CONFIDENCE: f64 = 85.0;

const NORMAL_CONDITION: &str = "Normal";

/// Combines the three persona opinions into one reading.
///
/// Measurements and confidence are averaged, the status is a majority vote,
/// conditions are merged, the longest explanation wins and the ST segment is
/// taken from the first opinion as-is.
pub fn aggregate_opinions(
    opinions: &[ModelOpinion; ENSEMBLE_SIZE],
    waveform_data: Vec<f64>,
) -> AnalysisResult {
    let abnormal_votes = opinions
        .iter()
        .filter(|o| o.diagnosis.status.is_abnormal())
        .count();

    let status = if abnormal_votes * 2 > ENSEMBLE_SIZE {
        DiagnosisStatus::Abnormal
    } else {
        DiagnosisStatus::Normal
    };

    let confidence = mean_rounded(
        opinions
            .iter()
            .map(|o| o.diagnosis.confidence.unwrap_or(DEFAULT_CONFIDENCE)),
    )
    .clamp(0, 100) as u8;

    AnalysisResult {
        heart_rate: mean_rounded(opinions.iter().map(|o| o.heart_rate)),
        pr_interval: mean_rounded(opinions.iter().map(|o| o.pr_interval)),
        qrs_duration: mean_rounded(opinions.iter().map(|o| o.qrs_duration)),
        qt_interval: mean_rounded(opinions.iter().map(|o| o.qt_interval)),
        st_segment: opinions[0].st_segment.clone(),
        diagnosis: Diagnosis {
            status,
            condition: merge_conditions(opinions),
            details: longest_details(opinions),
            confidence: Some(confidence),
            ensemble_agreement: Some(format!(
                "{} models analyzed - {} detected abnormalities",
                ENSEMBLE_SIZE, abnormal_votes
            )),
        },
        waveform_data,
    }
}

/// Mean rounded half-up, so 70.5 becomes 71 and -70.5 becomes -70.
fn mean_rounded(values: impl Iterator<Item = f64>) -> i64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0;
    }
    (sum / count as f64 + 0.5).floor() as i64
}

fn merge_conditions(opinions: &[ModelOpinion]) -> Option<String> {
    let mut unique: Vec<&str> = Vec::new();

    for condition in opinions
        .iter()
        .filter_map(|o| o.diagnosis.condition.as_deref())
        .filter(|c| !c.is_empty() && *c != NORMAL_CONDITION)
    {
        if !unique.contains(&condition) {
            unique.push(condition);
        }
    }

    if unique.is_empty() {
        None
    } else {
        Some(unique.join(", "))
    }
}

fn longest_details(opinions: &[ModelOpinion]) -> String {
    opinions
        .iter()
        .map(|o| o.diagnosis.details.as_str())
        .fold("", |longest, current| {
            if current.chars().count() > longest.chars().count() {
                current
            } else {
                longest
            }
        })
        .to_string()
}
