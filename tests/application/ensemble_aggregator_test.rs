use ecg_insight::application::services::aggregate_opinions;
use ecg_insight::domain::{DiagnosisStatus, ModelOpinion, OpinionDiagnosis};

fn opinion(status: DiagnosisStatus) -> ModelOpinion {
    ModelOpinion {
        heart_rate: 72.0,
        pr_interval: 160.0,
        qrs_duration: 90.0,
        qt_interval: 400.0,
        st_segment: "Isoelectric".to_string(),
        diagnosis: OpinionDiagnosis {
            status,
            condition: None,
            details: "Normal sinus rhythm.".to_string(),
            confidence: Some(90.0),
        },
    }
}

fn with_votes(abnormal: usize) -> [ModelOpinion; 3] {
    std::array::from_fn(|i| {
        if i < abnormal {
            opinion(DiagnosisStatus::Abnormal)
        } else {
            opinion(DiagnosisStatus::Normal)
        }
    })
}

#[test]
fn given_abnormal_vote_counts_when_aggregating_then_majority_decides_status() {
    let expected = [
        (0, DiagnosisStatus::Normal),
        (1, DiagnosisStatus::Normal),
        (2, DiagnosisStatus::Abnormal),
        (3, DiagnosisStatus::Abnormal),
    ];

    for (abnormal, status) in expected {
        let result = aggregate_opinions(&with_votes(abnormal), Vec::new());
        assert_eq!(result.diagnosis.status, status, "{abnormal} abnormal votes");
        assert_eq!(
            result.diagnosis.ensemble_agreement.as_deref(),
            Some(format!("3 models analyzed - {abnormal} detected abnormalities").as_str())
        );
    }
}

#[test]
fn given_numeric_fields_when_aggregating_then_each_is_rounded_mean() {
    let mut opinions = with_votes(0);
    for (opinion, (hr, pr, qrs, qt)) in opinions.iter_mut().zip([
        (60.0, 150.0, 80.0, 380.0),
        (72.0, 160.0, 90.0, 400.0),
        (78.0, 171.0, 101.0, 411.0),
    ]) {
        opinion.heart_rate = hr;
        opinion.pr_interval = pr;
        opinion.qrs_duration = qrs;
        opinion.qt_interval = qt;
    }

    let result = aggregate_opinions(&opinions, Vec::new());

    assert_eq!(result.heart_rate, 70);
    assert_eq!(result.pr_interval, 160);
    assert_eq!(result.qrs_duration, 90);
    assert_eq!(result.qt_interval, 397);
}

#[test]
fn given_half_way_mean_when_aggregating_then_rounds_up() {
    let mut opinions = with_votes(0);
    opinions[0].heart_rate = 70.0;
    opinions[1].heart_rate = 70.0;
    opinions[2].heart_rate = 71.5;

    let result = aggregate_opinions(&opinions, Vec::new());

    assert_eq!(result.heart_rate, 71);
}

#[test]
fn given_opinion_without_confidence_when_aggregating_then_counts_as_85() {
    let mut opinions = with_votes(0);
    opinions[0].diagnosis.confidence = Some(90.0);
    opinions[1].diagnosis.confidence = Some(70.0);
    opinions[2].diagnosis.confidence = None;

    let result = aggregate_opinions(&opinions, Vec::new());

    assert_eq!(result.diagnosis.confidence, Some(82));
}

#[test]
fn given_normal_and_repeated_conditions_when_aggregating_then_joins_unique_non_normal() {
    let mut opinions = with_votes(2);
    opinions[0].diagnosis.condition = Some("Normal".to_string());
    opinions[1].diagnosis.condition = Some("AFib".to_string());
    opinions[2].diagnosis.condition = Some("AFib".to_string());

    let result = aggregate_opinions(&opinions, Vec::new());

    assert_eq!(result.diagnosis.condition.as_deref(), Some("AFib"));
}

#[test]
fn given_distinct_conditions_when_aggregating_then_joins_in_first_seen_order() {
    let mut opinions = with_votes(3);
    opinions[0].diagnosis.condition = Some("Ischemia".to_string());
    opinions[1].diagnosis.condition = Some("AFib".to_string());
    opinions[2].diagnosis.condition = Some("Ischemia".to_string());

    let result = aggregate_opinions(&opinions, Vec::new());

    assert_eq!(result.diagnosis.condition.as_deref(), Some("Ischemia, AFib"));
}

#[test]
fn given_only_normal_conditions_when_aggregating_then_condition_is_absent() {
    let mut opinions = with_votes(0);
    opinions[0].diagnosis.condition = Some("Normal".to_string());
    opinions[1].diagnosis.condition = Some(String::new());

    let result = aggregate_opinions(&opinions, Vec::new());

    assert_eq!(result.diagnosis.condition, None);
}

#[test]
fn given_condition_differing_from_normal_only_by_case_when_aggregating_then_kept_verbatim() {
    let mut opinions = with_votes(2);
    opinions[0].diagnosis.condition = Some("normal".to_string());
    opinions[1].diagnosis.condition = Some(" AFib".to_string());
    opinions[2].diagnosis.condition = Some("Normal".to_string());

    let result = aggregate_opinions(&opinions, Vec::new());

    assert_eq!(result.diagnosis.condition.as_deref(), Some("normal,  AFib"));
}

#[test]
fn given_details_of_different_lengths_when_aggregating_then_longest_is_kept_verbatim() {
    let mut opinions = with_votes(0);
    opinions[0].diagnosis.details = "a".repeat(40);
    opinions[1].diagnosis.details = "b".repeat(55);
    opinions[2].diagnosis.details = "c".repeat(30);

    let result = aggregate_opinions(&opinions, Vec::new());

    assert_eq!(result.diagnosis.details, "b".repeat(55));
}

#[test]
fn given_equally_long_details_when_aggregating_then_first_seen_wins() {
    let mut opinions = with_votes(0);
    opinions[0].diagnosis.details = "first".to_string();
    opinions[1].diagnosis.details = "secnd".to_string();
    opinions[2].diagnosis.details = "thrd".to_string();

    let result = aggregate_opinions(&opinions, Vec::new());

    assert_eq!(result.diagnosis.details, "first");
}

#[test]
fn given_differing_st_segments_when_aggregating_then_first_opinion_is_used() {
    let mut opinions = with_votes(0);
    opinions[0].st_segment = "Isoelectric".to_string();
    opinions[1].st_segment = "Elevated 1mm in V2".to_string();
    opinions[2].st_segment = "Depressed".to_string();

    let result = aggregate_opinions(&opinions, vec![0.1, 0.2]);

    assert_eq!(result.st_segment, "Isoelectric");
    assert_eq!(result.waveform_data, vec![0.1, 0.2]);
}
