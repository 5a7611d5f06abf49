pub mod auth;
pub mod browse;
pub mod dashboard;
pub mod favorites;
pub mod home;
pub mod profile;
pub mod upload;
pub mod watch;
