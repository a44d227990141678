//! Request extractors for authentication ([`auth::AuthUser`]) and the
//! administrator gate ([`rbac::RequireAdmin`]).

pub mod auth;
pub mod rbac;
