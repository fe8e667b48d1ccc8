use crate::category_repo::{Category, CategoryRepo, NewCategory};
use crate::error::RepoError;
use crate::mem_repo::MemRepo;
use anyhow::anyhow;
use async_trait::async_trait;

#[async_trait]
impl CategoryRepo for MemRepo {
    async fn get_all_categories(&self) -> Result<Vec<Category>, RepoError> {
        let read_guard = self.read_lock()?;

        Ok(read_guard.categories.values().cloned().collect())
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<i64, RepoError> {
        let mut write_guard = self.write_lock()?;

        // NULL names never collide, same as a UNIQUE column
        if new_category.name.is_some()
            && write_guard
                .categories
                .values()
                .any(|c| c.name == new_category.name)
        {
            return Err(anyhow!("UNIQUE constraint failed: categories.name").into());
        }

        let id = write_guard.next_category_id;
        write_guard.next_category_id += 1;

        let category = Category {
            id,
            name: new_category.name,
            kind: new_category.kind,
        };
        write_guard.categories.insert(id, category);

        Ok(id)
    }

    async fn delete_category(&self, name: &str) -> Result<(), RepoError> {
        let mut write_guard = self.write_lock()?;

        let before = write_guard.categories.len();
        write_guard
            .categories
            .retain(|_, c| c.name.as_deref() != Some(name));

        if write_guard.categories.len() == before {
            Err(RepoError::CategoryNotFound(name.to_owned()))
        } else {
            Ok(())
        }
    }
}
