//! Record store for the user directory.

mod error;
mod user;
mod user_store;

pub use error::{StoreError, StoreResult};
pub use user::{User, parse_age};
pub use user_store::UserStore;
