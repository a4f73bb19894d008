pub mod authorization_repository;
pub mod card;
pub mod permissions;

pub use authorization_repository::*;
