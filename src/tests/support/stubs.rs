use async_trait::async_trait;

use crate::profile::application::{
    domain::entities::{Profile, UserId},
    ports::incoming::use_cases::{
        CreateProfileCommand, CreateProfileError, CreateProfileUseCase, DeleteProfileError,
        DeleteProfileUseCase, GetProfileError, GetProfileUseCase, UpdateProfileCommand,
        UpdateProfileError, UpdateProfileOutcome, UpdateProfileUseCase,
    },
};

#[derive(Default, Clone)]
pub struct StubCreateProfileUseCase;

#[async_trait]
impl CreateProfileUseCase for StubCreateProfileUseCase {
    async fn execute(&self, _command: CreateProfileCommand) -> Result<Profile, CreateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<Profile, GetProfileError> {
        Err(GetProfileError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _command: UpdateProfileCommand,
    ) -> Result<UpdateProfileOutcome, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProfileUseCase;

#[async_trait]
impl DeleteProfileUseCase for StubDeleteProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<(), DeleteProfileError> {
        Err(DeleteProfileError::NotFound)
    }
}
