#[macro_use]
extern crate actix_web;

use std::sync::Arc;

use actix_web::web::{Data, ServiceConfig};
use finance_repo::category_repo::CategoryRepo;
use finance_repo::transaction_repo::TransactionRepo;

pub mod category;
pub mod config;
pub mod cors;
mod error;
pub mod summary;
pub mod tracing;
pub mod transaction;

/// Registers the repos and every route. Shared by the server binary and the tests.
pub fn app_config_func(
    transaction_repo: Arc<dyn TransactionRepo>,
    category_repo: Arc<dyn CategoryRepo>,
) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(transaction_repo))
            .app_data(Data::new(category_repo))
            .app_data(error::json_config())
            .service(transaction::transaction_service())
            .service(category::category_service())
            .service(summary::get_summary);
    }
}
