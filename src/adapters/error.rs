use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::{application::error::ApplicationError, domain::models::message::ResultMessage};

impl ApplicationError {
    /// Status code and client-facing message. Details stay in the logs.
    pub fn outcome(&self) -> (StatusCode, ResultMessage) {
        match self {
            ApplicationError::NotFound => {
                warn!("Resource not found");
                (
                    StatusCode::NOT_FOUND,
                    ResultMessage::Rejected {
                        reason: "File not found".to_string(),
                    },
                )
            }
            ApplicationError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ResultMessage::Rejected {
                        reason: msg.clone(),
                    },
                )
            }
            ApplicationError::InvalidFileFormat(reason) => {
                warn!("Invalid file format: {}", reason);
                (StatusCode::UNPROCESSABLE_ENTITY, ResultMessage::InvalidFormat)
            }
            ApplicationError::PayloadTooLarge => {
                warn!("File too large");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    ResultMessage::Rejected {
                        reason: "File too large".to_string(),
                    },
                )
            }
            ApplicationError::UnsupportedMediaType(content_type) => {
                warn!("Unsupported content type: {:?}", content_type);
                (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    ResultMessage::Rejected {
                        reason: "Unsupported content type".to_string(),
                    },
                )
            }
            ApplicationError::InternalError(msg) => {
                error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ResultMessage::Rejected {
                        reason: "Internal server error".to_string(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, message) = self.outcome();
        (status, message.to_string()).into_response()
    }
}
