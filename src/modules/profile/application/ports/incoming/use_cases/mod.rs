mod create_profile_use_case;
mod delete_profile_use_case;
mod get_profile_use_case;
mod update_profile_use_case;

pub use create_profile_use_case::{
    CreateProfileCommand, CreateProfileCommandError, CreateProfileError, CreateProfileUseCase,
};
pub use delete_profile_use_case::{DeleteProfileError, DeleteProfileUseCase};
pub use get_profile_use_case::{GetProfileError, GetProfileUseCase};
pub use update_profile_use_case::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError, UpdateProfileOutcome,
    UpdateProfileUseCase,
};
