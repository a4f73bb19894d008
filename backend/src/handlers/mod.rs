pub mod admin;
pub mod cards;
pub mod me;
