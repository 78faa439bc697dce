use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, FromRequest, Multipart, Path, Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::{
    adapters::{
        dto::file_dto::ReceiveFileRequest,
        state::AppState,
        views::{ResultView, Views},
    },
    application::{error::ApplicationError, services::FileReceiveService},
    domain::models::{
        file::{StoredFile, UploadRequest},
        message::ResultMessage,
    },
};

/// Set on successful JSON uploads so clients can fetch the stored copy.
pub const STORED_NAME_HEADER: &str = "x-stored-name";

pub struct FileController;

impl FileController {
    /// Upload form for the browser flow
    /// GET /File/receive_file
    pub async fn receive_file_form(
        State(views): State<Arc<Views>>,
    ) -> Result<Html<String>, ApplicationError> {
        Ok(Html(views.receive_file_page(None)?))
    }

    /// POST /file/receive_file
    /// `application/json` with base64 content, or `multipart/form-data` from the form.
    pub async fn receive_file(State(app_state): State<AppState>, request: Request) -> Response {
        let content_type = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            Self::receive_json(app_state, request).await.into_response()
        } else if content_type.starts_with("multipart/form-data") {
            Self::receive_form_upload(app_state, request).await
        } else {
            ApplicationError::UnsupportedMediaType(content_type).into_response()
        }
    }

    async fn receive_json(
        app_state: AppState,
        request: Request,
    ) -> Result<Response, ApplicationError> {
        let Json(body) = Json::<ReceiveFileRequest>::from_request(request, &app_state)
            .await
            .map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    ApplicationError::PayloadTooLarge
                } else {
                    ApplicationError::BadRequest(format!(
                        "Invalid JSON body: {}",
                        rejection.body_text()
                    ))
                }
            })?;

        let upload = UploadRequest::try_from(body)?;
        let stored = app_state.receive_service.receive(upload).await?;

        let message = ResultMessage::received(&stored.original_name);
        Ok(([(STORED_NAME_HEADER, stored.stored_name)], message.to_string()).into_response())
    }

    async fn receive_form_upload(app_state: AppState, request: Request) -> Response {
        let (status, view) = match Self::read_form_upload(&app_state, request).await {
            Ok(stored) => (StatusCode::OK, ResultView::received(&stored)),
            Err(e) => {
                let (status, message) = e.outcome();
                (status, ResultView::failed(&message))
            }
        };

        match app_state.views.receive_file_page(Some(&view)) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => e.into_response(),
        }
    }

    async fn read_form_upload(
        app_state: &AppState,
        request: Request,
    ) -> Result<StoredFile, ApplicationError> {
        let mut multipart = Multipart::from_request(request, app_state)
            .await
            .map_err(|rejection| {
                ApplicationError::BadRequest(format!(
                    "Invalid multipart body: {}",
                    rejection.body_text()
                ))
            })?;

        let mut upload: Option<UploadRequest> = None;

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some("file") {
                continue;
            }

            let file_name = field.file_name().unwrap_or_default().to_string();
            let content = field.bytes().await.map_err(multipart_error)?;
            upload = Some(UploadRequest::new(file_name, content.to_vec()));
        }

        let upload = upload.ok_or_else(|| {
            warn!("Missing required 'file' field in form upload");
            ApplicationError::BadRequest("No file was uploaded".to_string())
        })?;

        // Browsers send an unnamed, empty part when nothing was chosen.
        if upload.file_name.trim().is_empty() {
            return Err(ApplicationError::BadRequest(
                "No file was selected".to_string(),
            ));
        }

        app_state.receive_service.receive(upload).await
    }

    /// GET /file/stored/{stored_name}
    pub async fn download_stored_file(
        State(receive_service): State<FileReceiveService>,
        Path(stored_name): Path<String>,
    ) -> Result<Response, ApplicationError> {
        let bytes = receive_service.storage().read(&stored_name).await?;
        info!("Serving stored file {} ({} bytes)", stored_name, bytes.len());

        Ok((
            [
                (header::CONTENT_TYPE, "application/octet-stream".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", stored_name),
                ),
            ],
            bytes,
        )
            .into_response())
    }
}

fn multipart_error(error: MultipartError) -> ApplicationError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApplicationError::PayloadTooLarge
    } else {
        ApplicationError::BadRequest(format!("Invalid multipart data: {}", error.body_text()))
    }
}
