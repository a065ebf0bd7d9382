pub mod application;
pub mod user;

pub use application::*;
pub use user::*;
