pub mod category_repo;
pub mod error;
pub mod transaction_repo;

// implementation modules
pub mod mem_repo;
pub mod sqlx_repo;
