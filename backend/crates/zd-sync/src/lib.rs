pub mod auth_result;
pub mod error;
pub mod identity_sync_service;
pub mod sync_policy;
pub mod sync_warning;

pub use auth_result::AuthResult;
pub use error::{Result, SyncError};
pub use identity_sync_service::IdentitySyncService;
pub use sync_policy::SyncPolicy;
pub use sync_warning::SyncWarning;

#[cfg(test)]
mod tests;
