mod profile_lifecycle;
pub mod support;
