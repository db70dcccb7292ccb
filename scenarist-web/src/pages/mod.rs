pub mod about;
pub mod blog;
pub mod categories;
pub mod error;
pub mod home;
pub mod not_found;
pub mod premium;
pub mod result;
pub mod scenario;
pub mod store;
pub mod unlock;
