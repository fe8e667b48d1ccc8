use crate::category_repo::{Category, CategoryRepo, NewCategory};
use crate::error::RepoError;
use crate::sqlx_repo::SQLxRepo;
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{query, query_as};
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct CategoryEntry {
    id: i64,
    name: Option<String>,
    #[sqlx(rename = "type")]
    kind: Option<String>,
}

impl From<CategoryEntry> for Category {
    fn from(value: CategoryEntry) -> Self {
        Category {
            id: value.id,
            name: value.name,
            kind: value.kind,
        }
    }
}

#[async_trait]
impl CategoryRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_all_categories(&self) -> Result<Vec<Category>, RepoError> {
        let category_entries: Vec<CategoryEntry> = query_as("SELECT * FROM categories")
            .fetch_all(&self.pool)
            .await
            .context("Unable to get categories")?;
        Ok(category_entries.into_iter().map(|c| c.into()).collect())
    }

    #[instrument(skip(self))]
    async fn create_category(&self, new_category: NewCategory) -> Result<i64, RepoError> {
        let result = query("INSERT INTO categories (name, type) VALUES (?, ?)")
            .bind(new_category.name.clone())
            .bind(new_category.kind)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to create category {:?}", new_category.name))?;
        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self))]
    async fn delete_category(&self, name: &str) -> Result<(), RepoError> {
        let result = query("DELETE FROM categories WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to delete category {}", name))?;
        if result.rows_affected() == 0 {
            Err(RepoError::CategoryNotFound(name.to_owned()))
        } else {
            Ok(())
        }
    }
}
