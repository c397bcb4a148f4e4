//! Request-processing middleware.
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] verifies the token and loads the active user
//! 3. An optional [`role`] layer checks membership in an allowed role set
//! 4. The handler runs with the identity attached

pub mod auth;
pub mod role;
