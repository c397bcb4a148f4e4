pub mod auth;
pub mod paralelos;
pub mod settings;
pub mod users;
