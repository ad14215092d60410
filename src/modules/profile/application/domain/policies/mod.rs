mod profile_policy;

pub use profile_policy::{ProfileFieldError, ProfilePolicy};
