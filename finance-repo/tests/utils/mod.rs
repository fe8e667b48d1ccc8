use finance_repo::category_repo::CategoryRepo;
use finance_repo::transaction_repo::TransactionRepo;
use std::sync::Arc;

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

pub async fn build_repos(repo_type: RepoType) -> (Arc<dyn TransactionRepo>, Arc<dyn CategoryRepo>) {
    match repo_type {
        // a single connection, or each one would get its own empty database
        RepoType::SQLx => finance_repo::sqlx_repo::create_repos("sqlite::memory:", 1)
            .await
            .unwrap(),
        RepoType::Mem => finance_repo::mem_repo::create_repos(),
    }
}
