pub mod font_size_request;
pub mod profile_dto;
#[allow(clippy::module_inception)]
pub mod users;
