pub mod app_state_builder;
pub mod in_memory_profile_store;
pub mod profile_fixtures;
pub mod stubs;
