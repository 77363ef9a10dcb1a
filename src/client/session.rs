use crate::domain::{AnalysisResult, ChatMessage, EncodedImage};

use super::ecg_api::EcgApi;
use super::image_ingestion::{UploadedFile, encode_image};
use super::notice::Notice;

pub const GREETING: &str = "Hello! I'm your AI ECG assistant. I can help explain your results and answer any questions you have about your ECG analysis. What would you like to know?";

/// Everything one loaded viewer holds in memory: the uploaded image, the
/// latest analysis and the chat transcript.
///
/// The transcript only ever grows. A failed call leaves earlier state in
/// place and is reported as a [`Notice`].
pub struct EcgSession<A>
where
    A: EcgApi,
{
    api: A,
    uploaded_image: Option<EncodedImage>,
    analysis: Option<AnalysisResult>,
    transcript: Vec<ChatMessage>,
}

impl<A> EcgSession<A>
where
    A: EcgApi,
{
    pub fn new(api: A) -> Self {
        Self {
            api,
            uploaded_image: None,
            analysis: None,
            transcript: vec![ChatMessage::assistant(GREETING)],
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn uploaded_image(&self) -> Option<&EncodedImage> {
        self.uploaded_image.as_ref()
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Accepts an image file for the next analysis. Anything else is
    /// rejected locally, without contacting the backend.
    pub fn select_file(&mut self, file: &UploadedFile) -> Result<(), Notice> {
        let image = encode_image(file).map_err(|e| {
            tracing::warn!(error = %e, "Rejected upload");
            Notice::error(
                "Invalid file type",
                "Please upload an image file (JPG, PNG, or PDF)",
            )
        })?;

        self.uploaded_image = Some(image);
        Ok(())
    }

    /// Drops the image and analysis. The chat starts over with the greeting.
    pub fn clear(&mut self) {
        self.uploaded_image = None;
        self.analysis = None;
        self.transcript = vec![ChatMessage::assistant(GREETING)];
    }

    pub async fn analyze(&mut self) -> Result<Notice, Notice> {
        let Some(image) = self.uploaded_image.as_ref() else {
            return Err(Notice::error(
                "No image selected",
                "Upload an ECG image before analyzing",
            ));
        };

        let outcome = self.api.analyze(image).await;
        match outcome {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                Ok(Notice::info(
                    "Analysis Complete",
                    "Your ECG has been successfully analyzed",
                ))
            }
            Err(e) => {
                tracing::error!(error = %e, "Analysis error");
                Err(Notice::error(
                    "Analysis Failed",
                    "Unable to analyze ECG. Please try again.",
                ))
            }
        }
    }

    /// Sends `input` with the whole transcript. The user's message is
    /// appended before the call and stays even when the call fails.
    /// Blank input is ignored and yields `Ok(None)`.
    pub async fn ask(&mut self, input: &str) -> Result<Option<&ChatMessage>, Notice> {
        if input.trim().is_empty() {
            return Ok(None);
        }

        let Some(analysis) = self.analysis.as_ref() else {
            return Err(Notice::error(
                "No analysis yet",
                "Analyze an ECG before asking questions",
            ));
        };

        self.transcript.push(ChatMessage::user(input));

        let outcome = self.api.chat(&self.transcript, analysis).await;
        match outcome {
            Ok(reply) => {
                self.transcript.push(ChatMessage::assistant(reply));
                Ok(self.transcript.last())
            }
            Err(e) => {
                tracing::error!(error = %e, "Chat error");
                Err(Notice::error(
                    "Chat Error",
                    "Unable to get response. Please try again.",
                ))
            }
        }
    }
}
