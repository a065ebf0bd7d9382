pub mod application;
pub mod auth;
pub mod dashboard;
pub mod document;
pub mod locale;
