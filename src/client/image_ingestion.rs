use base64::{Engine as _, engine::general_purpose};

use crate::domain::EncodedImage;

/// A file picked or dropped by the user, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime
            .get(..6)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ImageIngestionError {
    #[error("unsupported file type {mime:?} for {name}")]
    NotAnImage { name: String, mime: String },
}

/// Validates the MIME type and encodes the bytes as a base64 `data:` URI.
pub fn encode_image(file: &UploadedFile) -> Result<EncodedImage, ImageIngestionError> {
    if !file.is_image() {
        return Err(ImageIngestionError::NotAnImage {
            name: file.name.clone(),
            mime: file.mime.clone(),
        });
    }

    let payload = general_purpose::STANDARD.encode(&file.bytes);
    Ok(EncodedImage::new(format!(
        "data:{};base64,{}",
        file.mime, payload
    )))
}
