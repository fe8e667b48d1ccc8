use anyhow::anyhow;
use async_trait::async_trait;
use finance_repo::category_repo::{Category, CategoryRepo, NewCategory};
use finance_repo::error::RepoError;
use finance_repo::transaction_repo::{NewTransaction, Summary, Transaction, TransactionRepo};

pub const STORE_MESSAGE: &str = "disk I/O error";

/// Every call fails the way an unreachable store would.
pub struct FailingRepo;

fn store_error() -> RepoError {
    anyhow!(STORE_MESSAGE)
        .context("Unable to reach store")
        .into()
}

#[async_trait]
impl TransactionRepo for FailingRepo {
    async fn get_transaction(&self, _transaction_id: i64) -> Result<Transaction, RepoError> {
        Err(store_error())
    }

    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, RepoError> {
        Err(store_error())
    }

    async fn create_transaction(&self, _new_transaction: NewTransaction) -> Result<i64, RepoError> {
        Err(store_error())
    }

    async fn update_transaction(
        &self,
        _transaction_id: i64,
        _updated_transaction: NewTransaction,
    ) -> Result<(), RepoError> {
        Err(store_error())
    }

    async fn delete_transaction(&self, _transaction_id: i64) -> Result<(), RepoError> {
        Err(store_error())
    }

    async fn delete_transactions_in_category(&self, _category: &str) -> Result<u64, RepoError> {
        Err(store_error())
    }

    async fn get_summary(&self) -> Result<Summary, RepoError> {
        Err(store_error())
    }
}

#[async_trait]
impl CategoryRepo for FailingRepo {
    async fn get_all_categories(&self) -> Result<Vec<Category>, RepoError> {
        Err(store_error())
    }

    async fn create_category(&self, _new_category: NewCategory) -> Result<i64, RepoError> {
        Err(store_error())
    }

    async fn delete_category(&self, _name: &str) -> Result<(), RepoError> {
        Err(store_error())
    }
}
