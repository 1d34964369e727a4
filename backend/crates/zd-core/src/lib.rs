pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::font_size::FontSize;
pub use models::new_profile::NewProfile;
pub use models::profile::{FONT_SIZE_SETTING, Profile, Settings};
pub use models::profile_update::ProfileUpdate;

#[cfg(test)]
mod tests;
