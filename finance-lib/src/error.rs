use actix_web::body::BoxBody;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use finance_repo::error::RepoError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum HandlerError {
    /// A transaction id in the path that could never name a row.
    #[error("Transaction id {0} is not a number")]
    InvalidTransactionId(String),
    #[error(transparent)]
    RepoError(#[from] RepoError),
}

impl HandlerError {
    fn not_found_message(&self) -> Option<&'static str> {
        match self {
            HandlerError::InvalidTransactionId(_)
            | HandlerError::RepoError(RepoError::TransactionNotFound(_)) => {
                Some("Transaction not found")
            }
            HandlerError::RepoError(RepoError::CategoryNotFound(_)) => Some("Category not found"),
            HandlerError::RepoError(RepoError::Other(_)) => None,
        }
    }
}

// Store failures are reported with a 200 and `ok: false`; only absence gets a 404.
impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        if self.not_found_message().is_some() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::OK
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if let Some(message) = self.not_found_message() {
            return HttpResponse::NotFound().json(json!({ "message": message }));
        }

        error!("Error: {:#}", self);
        let message = match self {
            HandlerError::RepoError(e) => e.store_message(),
            e => e.to_string(),
        };
        HttpResponse::Ok().json(json!({ "ok": false, "message": message }))
    }
}

/// Bodies that fail to parse are answered in the same `ok: false` shape as store failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, req| {
            error!(req_path = req.path(), %err);
            let error_body = json!({
                "ok": false,
                "message": err.to_string(),
            });
            InternalError::from_response(err, HttpResponse::Ok().json(error_body)).into()
        })
}
