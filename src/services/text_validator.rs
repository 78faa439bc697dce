use crate::{
    application::services::{FormatValidator, FormatVerdict},
    domain::models::file::UploadRequest,
};

/// Accepts only UTF-8 text. NUL bytes are treated as binary.
pub struct Utf8TextValidator;

impl FormatValidator for Utf8TextValidator {
    fn name(&self) -> &'static str {
        "utf8-text"
    }

    fn check(&self, request: &UploadRequest) -> FormatVerdict {
        match std::str::from_utf8(&request.content) {
            Ok(text) if text.contains('\0') => FormatVerdict::rejected("binary content"),
            Ok(_) => FormatVerdict::Accepted,
            Err(e) => FormatVerdict::rejected(format!(
                "not UTF-8 text (invalid byte at offset {})",
                e.valid_up_to()
            )),
        }
    }
}
