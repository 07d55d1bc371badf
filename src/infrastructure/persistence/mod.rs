mod mock_contract_repository;
mod pg_contract_repository;
mod pg_pool;

pub use mock_contract_repository::MockContractRepository;
pub use pg_contract_repository::PgContractRepository;
pub use pg_pool::{create_pool, run_migrations};
