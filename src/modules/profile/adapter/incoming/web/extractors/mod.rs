mod gateway_identity;

pub use gateway_identity::{GatewayIdentity, USER_ID_HEADER};
