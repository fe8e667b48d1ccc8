use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RepoError;

#[async_trait]
pub trait TransactionRepo: Sync + Send {
    async fn get_transaction(&self, transaction_id: i64) -> Result<Transaction, RepoError>;

    /// All transactions in the order the store keeps them (ascending id).
    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, RepoError>;

    /// Returns the generated id.
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<i64, RepoError>;

    async fn update_transaction(
        &self,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<(), RepoError>;

    async fn delete_transaction(&self, transaction_id: i64) -> Result<(), RepoError>;

    /// Removes every transaction filed under `category` and returns how many went.
    async fn delete_transactions_in_category(&self, category: &str) -> Result<u64, RepoError>;

    async fn get_summary(&self) -> Result<Summary, RepoError>;
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct NewTransaction {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTransaction {
    pub fn new(
        kind: &str,
        category: &str,
        amount: f64,
        date: &str,
        description: Option<String>,
    ) -> NewTransaction {
        NewTransaction {
            kind: Some(kind.to_owned()),
            category: Some(category.to_owned()),
            amount: Some(amount),
            date: Some(date.to_owned()),
            description,
        }
    }

    pub fn into_transaction(self, id: i64) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            date: self.date,
            description: self.description,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

impl Summary {
    pub fn new(total_income: f64, total_expenses: f64) -> Summary {
        Summary {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }
}
