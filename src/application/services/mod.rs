mod chat_relay_service;
mod ensemble_aggregator;
mod ensemble_service;
mod json_extraction;
mod waveform_generator;

pub use chat_relay_service::{ChatRelayError, ChatRelayService, build_context};
pub use ensemble_aggregator::{DEFAULT_CONFIDENCE, ENSEMBLE_SIZE, aggregate_opinions};
pub use ensemble_service::{
    EnsembleAnalysisService, EnsembleError, OpinionParseError, parse_opinion,
};
pub use json_extraction::extract_json_object;
pub use waveform_generator::{
    NOISE_AMPLITUDE, WAVEFORM_SAMPLES, generate_waveform, generate_waveform_with, waveform_shape,
};
