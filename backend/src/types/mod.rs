pub mod id;

pub use id::{CardId, GraphTypeId, RoleId, UserId};
