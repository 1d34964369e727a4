pub mod connection;
pub mod error;
pub mod profile_store;
pub mod repositories;

pub use connection::pool::{open_in_memory_pool, open_pool};
pub use error::{DbError, Result};
pub use profile_store::ProfileStore;
pub use repositories::profile_repository::ProfileRepository;
