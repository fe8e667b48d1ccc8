use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("Transaction with id {0} not found")]
    TransactionNotFound(i64),
    #[error("Category {0} not found")]
    CategoryNotFound(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepoError {
    /// Text of the innermost error, i.e. what the store itself reported.
    pub fn store_message(&self) -> String {
        match self {
            RepoError::Other(e) => e.root_cause().to_string(),
            _ => self.to_string(),
        }
    }
}
