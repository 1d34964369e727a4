pub mod font_size;
pub mod new_profile;
pub mod profile;
pub mod profile_update;
