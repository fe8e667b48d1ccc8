use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RepoError;

#[async_trait]
pub trait CategoryRepo: Sync + Send {
    async fn get_all_categories(&self) -> Result<Vec<Category>, RepoError>;

    /// Returns the generated id. Names are unique, a duplicate is rejected by the store.
    async fn create_category(&self, new_category: NewCategory) -> Result<i64, RepoError>;

    /// Only removes the category row; transactions filed under it are left alone.
    async fn delete_category(&self, name: &str) -> Result<(), RepoError>;
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Category {
    pub id: i64,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct NewCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl NewCategory {
    pub fn new(name: &str, kind: &str) -> NewCategory {
        NewCategory {
            name: Some(name.to_owned()),
            kind: Some(kind.to_owned()),
        }
    }
}
