pub mod auth;

pub use auth::{admin_auth_middleware, issue_admin_token, AdminClaims};
