#[derive(Debug)]
pub enum ApplicationError {
    NotFound,
    InternalError(String),
    BadRequest(String),
    InvalidFileFormat(String),
    PayloadTooLarge,
    UnsupportedMediaType(String),
}
