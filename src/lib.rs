pub mod common;
pub mod handlers;
pub mod router;
pub mod store;
pub mod view;
