pub mod password;
pub mod store;
pub mod types;

pub use store::AccountStore;
pub use types::User;
