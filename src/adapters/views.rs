use minijinja::{context, Environment};
use serde::Serialize;

use crate::{
    application::error::ApplicationError,
    domain::models::{file::StoredFile, message::ResultMessage},
};

const RECEIVE_FILE_TEMPLATE: &str = "receive_file.html";

pub const FORM_ACTION: &str = "/File/receive_file";

/// What the result block of the form page shows.
#[derive(Debug, Serialize)]
pub struct ResultView {
    pub success: bool,
    pub message: String,
    pub file_name: Option<String>,
    pub stored_name: Option<String>,
}

impl ResultView {
    pub fn received(stored: &StoredFile) -> Self {
        Self {
            success: true,
            message: ResultMessage::received(&stored.original_name).to_string(),
            file_name: Some(stored.original_name.clone()),
            stored_name: Some(stored.stored_name.clone()),
        }
    }

    pub fn failed(message: &ResultMessage) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            file_name: None,
            stored_name: None,
        }
    }
}

/// HTML pages for the browser flow. `.html` templates are auto-escaped.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(
            RECEIVE_FILE_TEMPLATE,
            include_str!("../../templates/receive_file.html"),
        )?;
        Ok(Self { env })
    }

    pub fn receive_file_page(
        &self,
        result: Option<&ResultView>,
    ) -> Result<String, ApplicationError> {
        let template = self
            .env
            .get_template(RECEIVE_FILE_TEMPLATE)
            .map_err(|e| ApplicationError::InternalError(format!("Template error: {}", e)))?;

        template
            .render(context! { action => FORM_ACTION, result => result })
            .map_err(|e| ApplicationError::InternalError(format!("Template error: {}", e)))
    }
}
