pub mod format_validator;
pub mod receive_service;
pub mod storage_service;

pub use format_validator::{FormatValidator, FormatVerdict};
pub use receive_service::FileReceiveService;
pub use storage_service::StorageService;
