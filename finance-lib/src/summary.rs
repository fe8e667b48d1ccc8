use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use finance_repo::transaction_repo::TransactionRepo;

use crate::error::HandlerError;

/// Income and expense totals over every transaction, recomputed on each call.
#[get("/summary")]
pub async fn get_summary(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
) -> Result<impl Responder, HandlerError> {
    let summary = transaction_repo.get_summary().await?;
    Ok(HttpResponse::Ok().json(summary))
}
