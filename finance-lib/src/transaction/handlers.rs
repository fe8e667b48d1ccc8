use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use finance_repo::transaction_repo::{NewTransaction, TransactionRepo};
use serde_json::json;

use crate::error::HandlerError;

/// Ids arrive as raw path text and match the way an INTEGER key compares against text:
/// `7`, ` 7 `, `7.0` and `7e0` all name row 7, while `7.5` or `abc` name nothing.
fn parse_transaction_id(raw: &str) -> Result<i64, HandlerError> {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<i64>() {
        return Ok(id);
    }
    match trimmed.parse::<f64>() {
        Ok(id) if id.fract() == 0.0 && id >= i64::MIN as f64 && id < i64::MAX as f64 => {
            Ok(id as i64)
        }
        _ => Err(HandlerError::InvalidTransactionId(raw.to_owned())),
    }
}

#[post("")]
pub async fn create_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    new_transaction: web::Json<NewTransaction>,
) -> Result<impl Responder, HandlerError> {
    let id = transaction_repo
        .create_transaction(new_transaction.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true, "message": "Transaction added", "id": id })))
}

#[get("")]
pub async fn get_all_transactions(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
) -> Result<impl Responder, HandlerError> {
    let transactions = transaction_repo.get_all_transactions().await?;
    Ok(HttpResponse::Ok().json(transactions))
}

#[get("/{transaction_id}")]
pub async fn get_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<String>,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = parse_transaction_id(&transaction_id)?;
    let transaction = transaction_repo.get_transaction(transaction_id).await?;
    Ok(HttpResponse::Ok().json(transaction))
}

// The response echoes the id exactly as it appeared in the path.
#[put("/{transaction_id}")]
pub async fn update_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<String>,
    updated_transaction: web::Json<NewTransaction>,
) -> Result<impl Responder, HandlerError> {
    let raw_id = transaction_id.into_inner();
    transaction_repo
        .update_transaction(
            parse_transaction_id(&raw_id)?,
            updated_transaction.into_inner(),
        )
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true, "message": "Transaction updated", "id": raw_id })))
}

#[delete("/{transaction_id}")]
pub async fn delete_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<String>,
) -> Result<impl Responder, HandlerError> {
    let raw_id = transaction_id.into_inner();
    transaction_repo
        .delete_transaction(parse_transaction_id(&raw_id)?)
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true, "message": "Transaction deleted", "id": raw_id })))
}

#[cfg(test)]
mod tests {
    use super::parse_transaction_id;

    #[::core::prelude::v1::test]
    fn integral_ids_are_accepted() {
        for raw in ["7", "+7", " 7 ", "7.0", "7e0", "0007"] {
            assert_eq!(parse_transaction_id(raw).unwrap(), 7, "{:?}", raw);
        }
    }

    #[::core::prelude::v1::test]
    fn other_ids_match_nothing() {
        for raw in ["7.5", "abc", "", "inf", "NaN", "1e30"] {
            assert!(parse_transaction_id(raw).is_err(), "{:?}", raw);
        }
    }
}
