//! Viewer-side logic: upload validation, calls to the two endpoints,
//! session state and the data behind the chart and metric tiles.

mod ecg_api;
mod http_ecg_api;
mod image_ingestion;
mod metrics;
mod notice;
mod session;
mod waveform_chart;

pub use ecg_api::{ApiError, EcgApi};
pub use http_ecg_api::HttpEcgApi;
pub use image_ingestion::{ImageIngestionError, UploadedFile, encode_image};
pub use metrics::{MetricCard, metric_cards};
pub use notice::{Notice, NoticeVariant};
pub use session::{EcgSession, GREETING};
pub use waveform_chart::{VIEWPORT_SIZE, waveform_path};
