use crate::error::RepoError;
use crate::error::RepoError::TransactionNotFound;
use crate::sqlx_repo::SQLxRepo;
use crate::transaction_repo::{NewTransaction, Summary, Transaction, TransactionRepo};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{query, query_as};
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct TransactionEntry {
    id: i64,
    #[sqlx(rename = "type")]
    kind: Option<String>,
    category: Option<String>,
    amount: Option<f64>,
    date: Option<String>,
    description: Option<String>,
}

impl From<TransactionEntry> for Transaction {
    fn from(value: TransactionEntry) -> Self {
        Transaction {
            id: value.id,
            kind: value.kind,
            category: value.category,
            amount: value.amount,
            date: value.date,
            description: value.description,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryResult {
    total_income: f64,
    total_expenses: f64,
}

#[async_trait]
impl TransactionRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_transaction(&self, transaction_id: i64) -> Result<Transaction, RepoError> {
        let transaction_entry: Option<TransactionEntry> =
            query_as("SELECT * FROM transactions WHERE id = ?")
                .bind(transaction_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get transaction {}", transaction_id))?;
        transaction_entry
            .ok_or(TransactionNotFound(transaction_id))
            .map(|t| t.into())
    }

    #[instrument(skip(self))]
    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, RepoError> {
        let transaction_entries: Vec<TransactionEntry> = query_as("SELECT * FROM transactions")
            .fetch_all(&self.pool)
            .await
            .context("Unable to get transactions")?;
        Ok(transaction_entries.into_iter().map(|t| t.into()).collect())
    }

    #[instrument(skip(self))]
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<i64, RepoError> {
        let result = query(
            "INSERT INTO transactions (type, category, amount, date, description) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(new_transaction.kind)
        .bind(new_transaction.category)
        .bind(new_transaction.amount)
        .bind(new_transaction.date)
        .bind(new_transaction.description)
        .execute(&self.pool)
        .await
        .context("Unable to insert transaction")?;
        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self))]
    async fn update_transaction(
        &self,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<(), RepoError> {
        let result = query(
            "UPDATE transactions SET type = ?, category = ?, amount = ?, date = ?, description = ? WHERE id = ?",
        )
        .bind(updated_transaction.kind)
        .bind(updated_transaction.category)
        .bind(updated_transaction.amount)
        .bind(updated_transaction.date)
        .bind(updated_transaction.description)
        .bind(transaction_id)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Unable to update transaction {}", transaction_id))?;
        if result.rows_affected() == 0 {
            Err(TransactionNotFound(transaction_id))
        } else {
            Ok(())
        }
    }

    #[instrument(skip(self))]
    async fn delete_transaction(&self, transaction_id: i64) -> Result<(), RepoError> {
        let result = query("DELETE FROM transactions WHERE id = ?")
            .bind(transaction_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to delete transaction {}", transaction_id))?;
        if result.rows_affected() == 0 {
            Err(TransactionNotFound(transaction_id))
        } else {
            Ok(())
        }
    }

    #[instrument(skip(self))]
    async fn delete_transactions_in_category(&self, category: &str) -> Result<u64, RepoError> {
        let result = query("DELETE FROM transactions WHERE category = ?")
            .bind(category)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to delete transactions in category {}", category))?;
        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn get_summary(&self) -> Result<Summary, RepoError> {
        // CAST keeps the result REAL even when every summed value is the integer 0
        let totals: SummaryResult = query_as(
            r#"
            SELECT CAST(COALESCE(SUM(CASE WHEN type = 'income' THEN amount ELSE 0 END), 0) AS REAL)  AS total_income,
                   CAST(COALESCE(SUM(CASE WHEN type = 'expense' THEN amount ELSE 0 END), 0) AS REAL) AS total_expenses
            FROM transactions
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .context("Unable to get summary")?;
        Ok(Summary::new(totals.total_income, totals.total_expenses))
    }
}
