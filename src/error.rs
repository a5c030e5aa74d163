use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use dotenv::Error as DotError;
use sqlx::migrate::MigrateError;
use std::num;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("not found")]
    NotFound,

    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    MigrateError(#[from] MigrateError),

    #[error("dotenv error: {0}")]
    DotEnvError(#[from] DotError),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("parse int error: {0}")]
    ParseIntError(#[from] num::ParseIntError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("server error: {0}")]
    ServerError(String),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        HttpResponse::build(status).body(status.canonical_reason().unwrap_or_default())
    }
}
