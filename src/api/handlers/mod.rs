pub mod announcement;
pub mod attendance;
pub mod auth;
pub mod health;
pub mod overview;
pub mod question;
pub mod session;
