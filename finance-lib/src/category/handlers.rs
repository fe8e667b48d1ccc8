use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use finance_repo::category_repo::{CategoryRepo, NewCategory};
use finance_repo::transaction_repo::TransactionRepo;
use serde_json::json;
use tracing::info;

use crate::error::HandlerError;

#[post("")]
pub async fn create_category(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    new_category: web::Json<NewCategory>,
) -> Result<impl Responder, HandlerError> {
    let id = category_repo
        .create_category(new_category.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true, "message": "Category added", "id": id })))
}

#[get("")]
pub async fn get_all_categories(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
) -> Result<impl Responder, HandlerError> {
    let categories = category_repo.get_all_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// Deletes the category's transactions first, then the category itself, as two separate
/// store calls. If the second fails the transactions stay deleted. Not-found is decided by
/// the category row alone.
#[delete("/{name}")]
pub async fn delete_category(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    name: web::Path<String>,
) -> Result<impl Responder, HandlerError> {
    let name = name.into_inner();

    let removed = transaction_repo
        .delete_transactions_in_category(&name)
        .await?;
    info!(category = %name, removed, "Deleted transactions in category");

    category_repo.delete_category(&name).await?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true, "message": "Category deleted", "name": name })))
}
