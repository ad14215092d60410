use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileUseCase, DeleteProfileUseCase, GetProfileUseCase, UpdateProfileUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    profile: ProfileUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            profile: ProfileUseCases {
                create: Arc::new(StubCreateProfileUseCase),
                get: Arc::new(StubGetProfileUseCase),
                update: Arc::new(StubUpdateProfileUseCase),
                delete: Arc::new(StubDeleteProfileUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_profile(
        mut self,
        uc: impl CreateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.create = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.get = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.update = Arc::new(uc);
        self
    }

    pub fn with_delete_profile(
        mut self,
        uc: impl DeleteProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.delete = Arc::new(uc);
        self
    }

    pub fn with_profile(mut self, profile: ProfileUseCases) -> Self {
        self.profile = profile;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile: self.profile,
        })
    }
}
