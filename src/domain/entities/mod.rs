//! Domain entities - Core business objects with no external dependencies

pub mod user;
pub mod message;
pub mod reply;

pub use user::User;
pub use message::{Message, Channel};
pub use reply::Reply;
