//! Configuration modules.
//!
//! Each submodule builds one immutable config struct from environment
//! variables at startup. The structs are carried in [`crate::state::AppState`]
//! and never mutated afterwards.
//!
//! - [`app`]: deployment environment and bind address
//! - [`database`]: PostgreSQL pool initialization
//! - [`jwt`]: token signing secret and lifetime

pub mod app;
pub mod database;
pub mod jwt;
