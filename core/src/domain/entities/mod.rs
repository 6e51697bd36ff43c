pub mod message;
pub mod token;

pub use message::ContactMessage;
pub use token::{AccessToken, Claims, ACCESS_SCOPE, TOKEN_WINDOW_MINUTES};
