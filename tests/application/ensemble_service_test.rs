use std::sync::Arc;

use ecg_insight::application::ports::{CompletionRole, LlmClientError};
use ecg_insight::application::services::{
    EnsembleAnalysisService, EnsembleError, OpinionParseError, parse_opinion,
};
use ecg_insight::domain::{DiagnosisStatus, EncodedImage, Persona};
use ecg_insight::infrastructure::llm::MockLlmClient;

use crate::helpers::{OpinionFixture, TEST_IMAGE, opinion_reply, persona_of};

const TEST_MODEL: &str = "test-vision-model";

fn service(llm: &Arc<MockLlmClient>) -> EnsembleAnalysisService<MockLlmClient> {
    EnsembleAnalysisService::new(Arc::clone(llm), TEST_MODEL.to_string(), 100)
}

#[tokio::test]
async fn given_three_personas_when_analyzing_then_each_prompt_is_sent_once() {
    let llm = Arc::new(MockLlmClient::replying(&opinion_reply(&OpinionFixture::default())));

    let result = service(&llm)
        .analyze(&EncodedImage::new(TEST_IMAGE))
        .await
        .unwrap();

    let requests = llm.requests();
    assert_eq!(requests.len(), 3);
    for persona in Persona::ALL {
        assert_eq!(
            requests
                .iter()
                .filter(|r| persona_of(r) == Some(persona))
                .count(),
            1,
            "{persona} prompt count"
        );
    }
    assert!(requests.iter().all(|r| r.model == TEST_MODEL));
    assert_eq!(result.diagnosis.status, DiagnosisStatus::Normal);
    assert_eq!(result.waveform_data.len(), 200);
}

#[tokio::test]
async fn given_long_image_when_building_request_then_user_message_carries_prefix_only() {
    let llm = Arc::new(MockLlmClient::replying("unused"));
    let image = EncodedImage::new(format!("data:image/png;base64,{}", "A".repeat(500)));

    let request = service(&llm).build_request(Persona::Cnn, &image);

    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, CompletionRole::System);
    assert!(request.messages[0].content.contains("CNN-based"));
    assert!(request.messages[0].content.contains("Return ONLY valid JSON"));
    assert_eq!(request.messages[1].role, CompletionRole::User);
    assert_eq!(
        request.messages[1].content,
        format!(
            "Analyze this ECG image and provide detailed measurements. Image data: {}...",
            image.prefix(100)
        )
    );
}

#[tokio::test]
async fn given_reply_without_json_when_analyzing_then_reports_parse_failure_for_persona() {
    let llm = Arc::new(MockLlmClient::new(|request| match persona_of(request) {
        Some(Persona::Cnn) => Ok("No measurements available.".to_string()),
        _ => Ok(opinion_reply(&OpinionFixture::default())),
    }));

    let error = service(&llm)
        .analyze(&EncodedImage::new(TEST_IMAGE))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        EnsembleError::Parse {
            persona: Persona::Cnn,
            source: OpinionParseError::NoJsonFound,
        }
    ));
    assert_eq!(error.to_string(), "cnn parsing failed");
}

#[tokio::test]
async fn given_rate_limited_persona_when_analyzing_then_error_names_status() {
    let llm = Arc::new(MockLlmClient::new(|request| match persona_of(request) {
        Some(Persona::BiLstm) => Err(LlmClientError::RateLimited),
        _ => Ok(opinion_reply(&OpinionFixture::default())),
    }));

    let error = service(&llm)
        .analyze(&EncodedImage::new(TEST_IMAGE))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "bilstm analysis failed: 429");
}

#[tokio::test]
async fn given_transport_error_when_analyzing_then_error_keeps_cause() {
    let llm = Arc::new(MockLlmClient::new(|_| {
        Err(LlmClientError::ApiRequestFailed("connection refused".to_string()))
    }));

    let error = service(&llm)
        .analyze(&EncodedImage::new(TEST_IMAGE))
        .await
        .unwrap_err();

    assert!(error.to_string().contains("connection refused"));
}

#[test]
fn given_opinion_missing_required_field_when_parsing_then_invalid_json() {
    let reply = r#"{"heartRate": 72, "diagnosis": {"status": "normal", "details": "ok"}}"#;

    assert!(matches!(
        parse_opinion(reply),
        Err(OpinionParseError::InvalidJson(_))
    ));
}

#[test]
fn given_decimal_measurements_and_no_confidence_when_parsing_then_accepts_opinion() {
    let reply = r#"Sure! {"heartRate": 72.5, "prInterval": 160, "qrsDuration": 88.2,
        "qtInterval": 401, "stSegment": "Normal",
        "diagnosis": {"status": "Abnormal", "details": "Borderline QT"}}"#;

    let opinion = parse_opinion(reply).unwrap();

    assert_eq!(opinion.heart_rate, 72.5);
    assert_eq!(opinion.diagnosis.status, DiagnosisStatus::Abnormal);
    assert_eq!(opinion.diagnosis.confidence, None);
    assert_eq!(opinion.diagnosis.condition, None);
}
