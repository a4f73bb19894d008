pub mod auth;
pub mod permission;
pub mod request_id;

pub use auth::*;
pub use permission::*;
pub use request_id::*;
