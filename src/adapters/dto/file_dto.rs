use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::{
    application::error::ApplicationError,
    domain::models::file::UploadRequest,
};

/// JSON body of `POST /file/receive_file`.
#[derive(Debug, Deserialize)]
pub struct ReceiveFileRequest {
    #[serde(rename = "FileName", alias = "fileName", default)]
    pub file_name: Option<String>,
    #[serde(rename = "FileContent", alias = "fileContent", default)]
    pub file_content: Option<String>,
}

impl TryFrom<ReceiveFileRequest> for UploadRequest {
    type Error = ApplicationError;

    fn try_from(value: ReceiveFileRequest) -> Result<Self, Self::Error> {
        let file_name = value
            .file_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ApplicationError::BadRequest("File name is required".to_string()))?;

        let encoded = value
            .file_content
            .ok_or_else(|| ApplicationError::BadRequest("File content is required".to_string()))?;

        // Line-wrapped base64 is common from some clients.
        let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let content = STANDARD.decode(compact.as_bytes()).map_err(|e| {
            ApplicationError::BadRequest(format!("File content is not valid base64: {}", e))
        })?;

        Ok(UploadRequest::new(file_name, content))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> Result<UploadRequest, ApplicationError> {
        let dto: ReceiveFileRequest = serde_json::from_value(value).unwrap();
        UploadRequest::try_from(dto)
    }

    #[test]
    fn decodes_pascal_case_body() {
        let request = parse(json!({
            "FileName": "testfile.txt",
            "FileContent": "VGhpcyBpcyBhIHRlc3QgZmlsZSBjb250ZW50Lg=="
        }))
        .unwrap();

        assert_eq!(request.file_name, "testfile.txt");
        assert_eq!(request.content, b"This is a test file content.");
    }

    #[test]
    fn accepts_camel_case_and_wrapped_base64() {
        let request = parse(json!({
            "fileName": "hello.txt",
            "fileContent": "SGVsbG8s\nIFdvcmxkIQ=="
        }))
        .unwrap();

        assert_eq!(request.content, b"Hello, World!");
    }

    #[test]
    fn empty_content_decodes_to_empty_bytes() {
        let request = parse(json!({ "FileName": "empty.txt", "FileContent": "" })).unwrap();
        assert!(request.content.is_empty());
    }

    #[test]
    fn missing_fields_are_bad_requests() {
        assert!(matches!(
            parse(json!({ "FileContent": "SGk=" })),
            Err(ApplicationError::BadRequest(msg)) if msg == "File name is required"
        ));
        assert!(matches!(
            parse(json!({ "FileName": "  ", "FileContent": "SGk=" })),
            Err(ApplicationError::BadRequest(_))
        ));
        assert!(matches!(
            parse(json!({ "FileName": "a.txt" })),
            Err(ApplicationError::BadRequest(msg)) if msg == "File content is required"
        ));
    }

    #[test]
    fn invalid_base64_is_a_bad_request() {
        assert!(matches!(
            parse(json!({ "FileName": "a.txt", "FileContent": "not base64!!" })),
            Err(ApplicationError::BadRequest(msg)) if msg.starts_with("File content is not valid base64")
        ));
    }
}
