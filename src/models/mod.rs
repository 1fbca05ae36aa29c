// Entities and their request/response DTOs

pub mod user;
pub mod exercise;
pub mod progress;
pub mod routine;
pub mod chat;

pub use user::*;
pub use exercise::*;
pub use progress::*;
pub use routine::*;
pub use chat::*;
