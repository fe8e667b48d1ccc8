use crate::category_repo::{Category, CategoryRepo};
use crate::transaction_repo::{Transaction, TransactionRepo};
use anyhow::anyhow;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod category_repo;
mod transaction_repo;

/// Ids are handed out from 1 and never reused, like sqlite's AUTOINCREMENT.
struct State {
    transactions: BTreeMap<i64, Transaction>,
    categories: BTreeMap<i64, Category>,
    next_transaction_id: i64,
    next_category_id: i64,
}

pub struct MemRepo {
    state: RwLock<State>,
}

impl MemRepo {
    pub fn new() -> MemRepo {
        let state = State {
            transactions: BTreeMap::new(),
            categories: BTreeMap::new(),
            next_transaction_id: 1,
            next_category_id: 1,
        };
        MemRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

impl Default for MemRepo {
    fn default() -> Self {
        MemRepo::new()
    }
}

pub fn create_repos() -> (Arc<dyn TransactionRepo>, Arc<dyn CategoryRepo>) {
    let repo = Arc::new(MemRepo::new());
    (repo.clone(), repo)
}
