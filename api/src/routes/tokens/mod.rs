//! Token endpoint handlers

pub mod generate;
pub mod validate;

pub use generate::generate_token;
pub use validate::validate_token;
