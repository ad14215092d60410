use chrono::Utc;
use uuid::Uuid;

use crate::profile::application::domain::entities::{Preferences, Profile, UserId};

pub fn sample_profile(user_id: &str, username: &str, email: &str) -> Profile {
    let now = Utc::now();

    Profile {
        id: Uuid::new_v4(),
        user_id: UserId::parse(user_id).unwrap(),
        username: username.to_string(),
        email: email.to_string(),
        display_name: None,
        bio: None,
        avatar_url: None,
        role: "user".to_string(),
        preferences: Preferences::new(),
        last_seen: None,
        created_at: now,
        updated_at: now,
    }
}
