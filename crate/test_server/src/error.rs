use actix_web::{
    HttpResponse, HttpResponseBuilder,
    http::{StatusCode, header},
};
use key_protect_structs::StructsError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

pub(crate) const ERROR_MEDIA_TYPE: &str = "application/vnd.ibm.kms.error+json";

// Each error type must have a corresponding HTTP status code
#[derive(Error, Debug, Clone)]
pub enum KmsServerError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Bad Request: {message}")]
    Rejected { code: &'static str, message: String },
    // Rejected with an empty body, the way the IAM gateway does it
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Conflict: {code}: {message}")]
    Conflict { code: &'static str, message: String },
    #[error("Unexpected server error: {0}")]
    ServerError(String),
    #[error(transparent)]
    StructsError(#[from] StructsError),
}

impl From<serde_json::Error> for KmsServerError {
    fn from(e: serde_json::Error) -> Self {
        Self::BadRequest(format!("invalid JSON body: {e}"))
    }
}

impl From<base64::DecodeError> for KmsServerError {
    fn from(e: base64::DecodeError) -> Self {
        Self::BadRequest(format!("invalid base64: {e}"))
    }
}

impl KmsServerError {
    fn reason_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) | Self::StructsError(_) => "BAD_BODY_ERR",
            Self::Rejected { code, .. } | Self::Conflict { code, .. } => code,
            Self::Unauthorized => "UNAUTHORIZED_ERR",
            Self::NotFound(_) => "NOT_FOUND_ERR",
            Self::ServerError(_) => "INTERNAL_SERVER_ERR",
        }
    }
}

impl actix_web::error::ResponseError for KmsServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Rejected { .. } | Self::StructsError(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let message = self.to_string();

        if status_code >= StatusCode::INTERNAL_SERVER_ERROR {
            error!("{status_code} - {message}");
        } else {
            warn!("{status_code} - {message}");
        }

        if matches!(self, Self::Unauthorized) {
            return HttpResponseBuilder::new(status_code).finish();
        }

        let body = json!({
            "metadata": {
                "collectionType": ERROR_MEDIA_TYPE,
                "collectionTotal": 1
            },
            "resources": [{
                "errorMsg": message,
                "reasons": [{
                    "code": self.reason_code(),
                    "message": message,
                    "status": status_code.as_u16(),
                    "moreInfo": "https://cloud.ibm.com/apidocs/key-protect"
                }]
            }]
        });
        HttpResponseBuilder::new(status_code)
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .body(body.to_string())
    }
}

pub(crate) type KResult<T> = Result<T, KmsServerError>;
