use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardsError {
    #[error("member `contact` must be a structured object, got {found}")]
    InvalidContactType { found: String },

    #[error("member `contact` has an invalid shape: {reason}")]
    InvalidContactShape { reason: String },

    #[error("club member list is invalid: {reason}")]
    InvalidMemberList { reason: String },

    #[error("sheet row {row} is malformed: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("Sheets API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Sheets API returned an unexpected payload: {message}")]
    MalformedResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in `{field}`: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value `{value}` for `{field}`: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CardsError>;
