mod create_profile_service;
mod delete_profile_service;
mod get_profile_service;
mod update_profile_service;

#[cfg(test)]
mod mocks;

pub use create_profile_service::CreateProfileService;
pub use delete_profile_service::DeleteProfileService;
pub use get_profile_service::GetProfileService;
pub use update_profile_service::UpdateProfileService;
