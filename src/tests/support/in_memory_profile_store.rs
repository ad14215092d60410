use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use uuid::Uuid;

use crate::profile::application::{
    domain::entities::{Profile, UserId},
    ports::outgoing::{
        NewProfileData, PatchField, ProfileChanges, ProfileQuery, ProfileQueryError,
        ProfileRepository, ProfileRepositoryError, UniqueField,
    },
};

#[derive(Debug, Clone)]
struct StoredProfile {
    profile: Profile,
    deleted_at: Option<DateTime<Utc>>,
}

impl StoredProfile {
    fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Profile store backed by a `Vec`, honouring the same live-row uniqueness
/// rules as the `user_profiles` partial indexes. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    rows: Arc<Mutex<Vec<StoredProfile>>>,
    fail_reads: Arc<AtomicBool>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent query fail until reset.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Total rows, tombstones included.
    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn live_count(&self) -> usize {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_live())
            .count()
    }

    fn find_live(
        &self,
        pred: impl Fn(&Profile) -> bool,
    ) -> Result<Option<Profile>, ProfileQueryError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ProfileQueryError::DatabaseError(
                "simulated read failure".to_string(),
            ));
        }

        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.is_live() && pred(&r.profile))
            .map(|r| r.profile.clone()))
    }
}

fn check_unique(
    rows: &[StoredProfile],
    skip: Option<Uuid>,
    user_id: Option<&UserId>,
    username: Option<&str>,
    email: Option<&str>,
) -> Result<(), ProfileRepositoryError> {
    for row in rows
        .iter()
        .filter(|r| r.is_live() && Some(r.profile.id) != skip)
    {
        if user_id.is_some_and(|id| *id == row.profile.user_id) {
            return Err(ProfileRepositoryError::UniqueViolation(UniqueField::UserId));
        }
        if username.is_some_and(|u| u == row.profile.username) {
            return Err(ProfileRepositoryError::UniqueViolation(
                UniqueField::Username,
            ));
        }
        if email.is_some_and(|e| e == row.profile.email) {
            return Err(ProfileRepositoryError::UniqueViolation(UniqueField::Email));
        }
    }

    Ok(())
}

fn apply_nullable<T>(target: &mut Option<T>, patch: PatchField<T>) {
    match patch {
        PatchField::Unset => {}
        PatchField::Null => *target = None,
        PatchField::Value(v) => *target = Some(v),
    }
}

#[async_trait]
impl ProfileQuery for InMemoryProfileStore {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Profile>, ProfileQueryError> {
        self.find_live(|p| p.user_id == *user_id)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Profile>, ProfileQueryError> {
        self.find_live(|p| p.username == username)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, ProfileQueryError> {
        self.find_live(|p| p.email == email)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn insert(&self, data: NewProfileData) -> Result<Profile, ProfileRepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        check_unique(
            &rows,
            None,
            Some(&data.user_id),
            Some(&data.username),
            Some(&data.email),
        )?;

        let now = Utc::now();
        let profile = Profile {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            username: data.username,
            email: data.email,
            display_name: data.display_name,
            bio: data.bio,
            avatar_url: data.avatar_url,
            role: data.role,
            preferences: data.preferences,
            last_seen: None,
            created_at: now,
            updated_at: now,
        };

        rows.push(StoredProfile {
            profile: profile.clone(),
            deleted_at: None,
        });

        Ok(profile)
    }

    async fn merge_update(
        &self,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfileRepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        check_unique(
            &rows,
            Some(id),
            None,
            changes.username.as_value().map(String::as_str),
            changes.email.as_value().map(String::as_str),
        )?;

        let row = rows
            .iter_mut()
            .find(|r| r.is_live() && r.profile.id == id)
            .ok_or(ProfileRepositoryError::NotFound)?;

        let profile = &mut row.profile;

        if let PatchField::Value(username) = changes.username {
            profile.username = username;
        }
        if let PatchField::Value(email) = changes.email {
            profile.email = email;
        }
        if let PatchField::Value(preferences) = changes.preferences {
            profile.preferences = preferences;
        }
        apply_nullable(&mut profile.display_name, changes.display_name);
        apply_nullable(&mut profile.bio, changes.bio);
        apply_nullable(&mut profile.avatar_url, changes.avatar_url);
        apply_nullable(&mut profile.last_seen, changes.last_seen);
        profile.updated_at = Utc::now();

        Ok(profile.clone())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), ProfileRepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        let row = rows
            .iter_mut()
            .find(|r| r.is_live() && r.profile.id == id)
            .ok_or(ProfileRepositoryError::NotFound)?;

        row.deleted_at = Some(Utc::now());

        Ok(())
    }
}
