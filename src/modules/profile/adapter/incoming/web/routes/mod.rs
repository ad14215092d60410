mod create_profile;
mod delete_profile;
mod error_mapping;
mod get_profile;
mod update_profile;

pub use create_profile::create_profile_handler;
pub use delete_profile::delete_profile_handler;
pub use get_profile::get_profile_handler;
pub use update_profile::update_profile_handler;
