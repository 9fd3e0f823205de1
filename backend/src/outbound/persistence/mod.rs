//! Member store adapters.
//!
//! - [`DieselMemberRepository`]: PostgreSQL via Diesel, `diesel-async` and a
//!   `bb8` pool. Row structs and the table definition stay private.
//! - [`InMemoryMemberRepository`]: process-local store for development runs
//!   and tests.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use roster::outbound::persistence::{DbPool, DieselMemberRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/roster")).await?;
//! let repository = DieselMemberRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_member_repository;
mod in_memory_member_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_member_repository::DieselMemberRepository;
pub use in_memory_member_repository::InMemoryMemberRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
