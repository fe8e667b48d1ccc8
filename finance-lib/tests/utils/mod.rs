use std::sync::Arc;

use finance_repo::category_repo::CategoryRepo;
use finance_repo::transaction_repo::TransactionRepo;
use rstest::*;
use tracing::info;
use tracing::Level;

#[allow(dead_code)]
pub mod failing;

macro_rules! build_app {
    ($repos:ident) => {{
        let (transaction_repo, category_repo) = $repos;
        let app = App::new()
            .wrap(finance_lib::cors::create_cors())
            .wrap(finance_lib::tracing::create_middleware())
            .configure(finance_lib::app_config_func(transaction_repo, category_repo));
        tracing::info!("Built app");
        app
    }};
}

macro_rules! create_transaction {
    (&$service:ident, $new_transaction:expr) => {{
        let request = TestRequest::post()
            .uri("/transactions")
            .set_json(&$new_transaction)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert!(
            response.status().is_success(),
            "Got {} response when creating transaction",
            response.status()
        );
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["ok"], true, "Unexpected response {}", body);
        body["id"].as_i64().expect("numeric id")
    }};
}

macro_rules! create_category {
    (&$service:ident, $new_category:expr) => {{
        let request = TestRequest::post()
            .uri("/categories")
            .set_json(&$new_category)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert!(response.status().is_success());
        let body: serde_json::Value = test::read_body_json(response).await;
        body
    }};
}

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

pub async fn build_repos(repo_type: RepoType) -> (Arc<dyn TransactionRepo>, Arc<dyn CategoryRepo>) {
    info!(?repo_type, "Building repos");
    match repo_type {
        RepoType::SQLx => finance_repo::sqlx_repo::create_repos("sqlite::memory:", 1)
            .await
            .unwrap(),
        RepoType::Mem => finance_repo::mem_repo::create_repos(),
    }
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}
