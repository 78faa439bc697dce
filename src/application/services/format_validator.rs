use crate::domain::models::file::UploadRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatVerdict {
    Accepted,
    Rejected { reason: String },
}

impl FormatVerdict {
    pub fn rejected(reason: impl Into<String>) -> Self {
        FormatVerdict::Rejected {
            reason: reason.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, FormatVerdict::Accepted)
    }
}

/// Decides whether an upload's content is an acceptable format.
/// Runs before anything touches storage.
pub trait FormatValidator: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, request: &UploadRequest) -> FormatVerdict;
}
