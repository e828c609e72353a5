use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use snafu::Snafu;
use strum::IntoStaticStr;

use crate::handlers::ErrorResponse;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// One entry of the validation-error list returned for a rejected
/// leaderboard name.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Snafu, IntoStaticStr)]
#[snafu(visibility(pub(crate)))]
#[snafu(context(suffix(false)))]
pub enum Error {
    DataType {
        source: photohunt_datatypes::error::Error,
    },

    #[snafu(display("Photo not found"))]
    PhotoNotFound,

    #[snafu(display("User not found"))]
    SessionNotFound,

    #[snafu(display("Photo {photo} has no target named {target}"))]
    TargetNotFound { photo: String, target: String },

    #[snafu(display("This user is already registered to the leaderboard!"))]
    AlreadyRegistered,

    #[snafu(display("The submitted name is invalid"))]
    NameValidation { errors: Vec<FieldError> },

    #[snafu(display("Invalid photo definition: {reason}"))]
    InvalidPhotoDefinition { reason: String },

    #[snafu(display("A photo named {name} already exists"))]
    DuplicatePhotoName { name: String },

    Io {
        source: std::io::Error,
    },

    SerdeJson {
        source: serde_json::Error,
    },

    Config {
        source: config::ConfigError,
    },

    ConfigLockFailed,

    MissingWorkingDirectory {
        source: std::io::Error,
    },

    MissingSettingsDirectory,
}

impl actix_web::error::ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        // a rejected name reports the individual field errors, everything
        // else uses the standard envelope
        if let Error::NameValidation { errors } = self {
            return HttpResponse::build(self.status_code()).json(errors);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: Into::<&str>::into(self).to_string(),
            message: self.to_string(),
        })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::PhotoNotFound | Error::SessionNotFound | Error::TargetNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            Error::AlreadyRegistered | Error::NameValidation { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<photohunt_datatypes::error::Error> for Error {
    fn from(e: photohunt_datatypes::error::Error) -> Self {
        Self::DataType { source: e }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::SerdeJson { source: e }
    }
}
