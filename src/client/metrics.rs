use crate::domain::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

/// The measurement tiles shown above the diagnosis.
pub fn metric_cards(analysis: &AnalysisResult) -> Vec<MetricCard> {
    vec![
        MetricCard {
            label: "Heart Rate",
            value: format!("{} BPM", analysis.heart_rate),
        },
        MetricCard {
            label: "PR Interval",
            value: format!("{} ms", analysis.pr_interval),
        },
        MetricCard {
            label: "QRS Duration",
            value: format!("{} ms", analysis.qrs_duration),
        },
        MetricCard {
            label: "QT Interval",
            value: format!("{} ms", analysis.qt_interval),
        },
    ]
}
