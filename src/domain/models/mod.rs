pub mod announcement;
pub mod auth;
pub mod profile;
pub mod question;
pub mod session;
pub mod user;
