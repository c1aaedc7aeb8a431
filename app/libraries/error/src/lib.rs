use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde::Serialize;
use serde_json::Error as JsonError;
use sqlx::Error as SqlxError;
use std::{error::Error as StdError, fmt, io::Error as IoError};

pub static SYSTEM_ERROR_CODE: i64 = -1000;
pub static SYSTEM_ERROR_CODE_DB: i64 = -1001;
pub static SYSTEM_ERROR_CODE_IO: i64 = -1002;
pub static SYSTEM_ERROR_CODE_JSON: i64 = -1003;

#[derive(Debug, Clone, Serialize)]
pub struct AppError {
    pub message: String,
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
    pub code: i64,
}

fn serialize_status<S>(status: &StatusCode, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_u16(status.as_u16())
}

impl AppError {
    pub fn new(message: impl Into<String>, status: StatusCode, code: i64) -> Self {
        Self {
            message: message.into(),
            status,
            code,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            message,
            StatusCode::INTERNAL_SERVER_ERROR,
            SYSTEM_ERROR_CODE,
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{"message":"{}","status":{},"code":{}}}"#,
            self.message,
            self.status.as_u16(),
            self.code
        )
    }
}

impl StdError for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(
            "AppError ({}): {} (HTTP {})",
            self.code,
            self.message,
            self.status.as_u16()
        );
        (self.status, Json(self)).into_response()
    }
}

// --------------------
// Error conversions
// --------------------

impl From<SqlxError> for AppError {
    fn from(value: SqlxError) -> Self {
        Self::new(
            format!("{value:?}"),
            StatusCode::BAD_REQUEST,
            SYSTEM_ERROR_CODE_DB,
        )
    }
}

impl From<IoError> for AppError {
    fn from(value: IoError) -> Self {
        Self::new(
            format!("{value:?}"),
            StatusCode::BAD_REQUEST,
            SYSTEM_ERROR_CODE_IO,
        )
    }
}

impl From<JsonError> for AppError {
    fn from(value: JsonError) -> Self {
        Self::new(
            format!("{value:?}"),
            StatusCode::INTERNAL_SERVER_ERROR,
            SYSTEM_ERROR_CODE_JSON,
        )
    }
}
