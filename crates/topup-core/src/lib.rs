pub mod dial;
pub mod error;
pub mod extract;
pub mod preprocess;
pub mod session;
pub mod types;
pub mod validate;
