pub mod error;
pub mod message;
pub mod token;

pub use error::ErrorResponse;
pub use message::{SubmitMessageRequest, SubmitMessageResponse};
pub use token::{TokenResponse, ValidateTokenRequest, ValidateTokenResponse};
