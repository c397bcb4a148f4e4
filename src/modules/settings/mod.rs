pub mod controller;
pub mod model;
pub mod router;
pub mod service;
pub mod values;

pub use router::init_settings_router;
