use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::test::TestRequest;
use actix_web::App;
use finance_repo::category_repo::{CategoryRepo, NewCategory};
use finance_repo::transaction_repo::{NewTransaction, TransactionRepo};
use rstest::rstest;
use serde_json::{json, Value};

use utils::failing::{FailingRepo, STORE_MESSAGE};
use utils::tracing_setup;

#[macro_use]
mod utils;

fn new_transaction() -> NewTransaction {
    NewTransaction::new("expense", "Food", 1.0, "2024-01-01", None)
}

#[rstest]
#[case::create_transaction(TestRequest::post().uri("/transactions").set_json(new_transaction()))]
#[case::get_all_transactions(TestRequest::get().uri("/transactions"))]
#[case::get_transaction(TestRequest::get().uri("/transactions/1"))]
#[case::update_transaction(TestRequest::put().uri("/transactions/1").set_json(new_transaction()))]
#[case::delete_transaction(TestRequest::delete().uri("/transactions/1"))]
#[case::create_category(TestRequest::post().uri("/categories").set_json(NewCategory::new("Food", "expense")))]
#[case::get_all_categories(TestRequest::get().uri("/categories"))]
#[case::delete_category(TestRequest::delete().uri("/categories/Food"))]
#[case::get_summary(TestRequest::get().uri("/summary"))]
#[actix_rt::test]
async fn test_store_failure_is_reported_with_ok_false(
    _tracing_setup: &(),
    #[case] request: TestRequest,
) {
    let repo = Arc::new(FailingRepo);
    let repos: (Arc<dyn TransactionRepo>, Arc<dyn CategoryRepo>) = (repo.clone(), repo);
    let service = test::init_service(build_app!(repos)).await;

    let response = test::call_service(&service, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({ "ok": false, "message": STORE_MESSAGE }));
}
