use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;

use ecg_insight::application::ports::LlmClientError;
use ecg_insight::client::{EcgApi, EcgSession, HttpEcgApi, UploadedFile};
use ecg_insight::domain::{ChatMessage, DiagnosisStatus, EncodedImage, MessageRole};
use ecg_insight::infrastructure::llm::MockLlmClient;
use ecg_insight::presentation::{AppState, create_router};

use crate::helpers::{OpinionFixture, TEST_IMAGE, opinion_reply, sample_analysis, test_settings};

async fn start_server(llm: Arc<MockLlmClient>) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let app = create_router(AppState::new(llm, test_settings()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (format!("http://{}", addr), shutdown_tx)
}

/// Answers persona prompts with an opinion and everything else with chat.
fn ensemble_and_chat_llm() -> Arc<MockLlmClient> {
    Arc::new(MockLlmClient::new(|request| {
        if crate::helpers::persona_of(request).is_some() {
            Ok(opinion_reply(&OpinionFixture::default()))
        } else {
            Ok("All intervals are within normal limits.".to_string())
        }
    }))
}

#[tokio::test]
async fn given_running_server_when_analyzing_over_http_then_decodes_result() {
    let (base_url, shutdown_tx) = start_server(ensemble_and_chat_llm()).await;
    let api = HttpEcgApi::new(&base_url);

    let analysis = api.analyze(&EncodedImage::new(TEST_IMAGE)).await.unwrap();

    assert_eq!(analysis.heart_rate, 72);
    assert_eq!(analysis.diagnosis.status, DiagnosisStatus::Normal);
    assert_eq!(analysis.waveform_data.len(), 200);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limited_chat_when_calling_over_http_then_surfaces_status_and_message() {
    let llm = Arc::new(MockLlmClient::new(|_| Err(LlmClientError::RateLimited)));
    let (base_url, shutdown_tx) = start_server(llm).await;
    let api = HttpEcgApi::new(&base_url);

    let error = api
        .chat(
            &[ChatMessage::user("Hi")],
            &sample_analysis(DiagnosisStatus::Normal),
        )
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(429));
    assert!(error.to_string().contains("Rate limit exceeded"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_full_session_when_uploading_analyzing_and_asking_then_transcript_grows_by_two() {
    let (base_url, shutdown_tx) = start_server(ensemble_and_chat_llm()).await;
    let mut session = EcgSession::new(HttpEcgApi::new(&base_url));

    session
        .select_file(&UploadedFile::new("strip.png", "image/png", vec![1, 2, 3, 4]))
        .unwrap();
    session.analyze().await.unwrap();
    let before = session.transcript().len();
    session.ask("Is this normal?").await.unwrap();

    let transcript = session.transcript();
    assert_eq!(transcript.len(), before + 2);
    assert_eq!(transcript[before].role, MessageRole::User);
    assert_eq!(transcript[before + 1].role, MessageRole::Assistant);
    assert_eq!(
        transcript[before + 1].content,
        "All intervals are within normal limits."
    );
    shutdown_tx.send(()).ok();
}
