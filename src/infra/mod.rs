pub mod auth;
pub mod factory;
pub mod repositories;
