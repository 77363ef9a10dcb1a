mod analysis_result;
mod chat_message;
mod diagnosis_status;
mod encoded_image;
mod message_role;
mod model_opinion;
mod persona;

pub use analysis_result::{AnalysisResult, Diagnosis};
pub use chat_message::ChatMessage;
pub use diagnosis_status::DiagnosisStatus;
pub use encoded_image::EncodedImage;
pub use message_role::MessageRole;
pub use model_opinion::{ModelOpinion, OpinionDiagnosis};
pub use persona::Persona;
