use crate::error::RepoError;
use crate::error::RepoError::TransactionNotFound;
use crate::mem_repo::MemRepo;
use crate::transaction_repo::{NewTransaction, Summary, Transaction, TransactionRepo};
use async_trait::async_trait;
use std::collections::btree_map::Entry;

#[async_trait]
impl TransactionRepo for MemRepo {
    async fn get_transaction(&self, transaction_id: i64) -> Result<Transaction, RepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .transactions
            .get(&transaction_id)
            .cloned()
            .ok_or(TransactionNotFound(transaction_id))
    }

    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, RepoError> {
        let read_guard = self.read_lock()?;

        Ok(read_guard.transactions.values().cloned().collect())
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<i64, RepoError> {
        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_transaction_id;
        write_guard.next_transaction_id += 1;

        write_guard
            .transactions
            .insert(id, new_transaction.into_transaction(id));

        Ok(id)
    }

    async fn update_transaction(
        &self,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<(), RepoError> {
        let mut write_guard = self.write_lock()?;

        if let Entry::Occupied(mut e) = write_guard.transactions.entry(transaction_id) {
            e.insert(updated_transaction.into_transaction(transaction_id));
            Ok(())
        } else {
            Err(TransactionNotFound(transaction_id))
        }
    }

    async fn delete_transaction(&self, transaction_id: i64) -> Result<(), RepoError> {
        let mut write_guard = self.write_lock()?;

        write_guard
            .transactions
            .remove(&transaction_id)
            .map(|_| ())
            .ok_or(TransactionNotFound(transaction_id))
    }

    async fn delete_transactions_in_category(&self, category: &str) -> Result<u64, RepoError> {
        let mut write_guard = self.write_lock()?;

        let before = write_guard.transactions.len();
        write_guard
            .transactions
            .retain(|_, t| t.category.as_deref() != Some(category));

        Ok((before - write_guard.transactions.len()) as u64)
    }

    async fn get_summary(&self) -> Result<Summary, RepoError> {
        let read_guard = self.read_lock()?;

        let total_of = |kind: &str| -> f64 {
            read_guard
                .transactions
                .values()
                .filter(|t| t.kind.as_deref() == Some(kind))
                .filter_map(|t| t.amount)
                .sum()
        };

        Ok(Summary::new(total_of("income"), total_of("expense")))
    }
}
