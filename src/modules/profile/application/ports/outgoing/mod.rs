pub mod profile_query;
pub mod profile_repository;

pub use profile_query::{ProfileQuery, ProfileQueryError};
pub use profile_repository::{
    NewProfileData, PatchField, ProfileChanges, ProfileRepository, ProfileRepositoryError,
    UniqueField,
};
