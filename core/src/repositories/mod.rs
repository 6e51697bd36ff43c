pub mod message;
pub mod token;

pub use message::MessageRepository;
pub use token::TokenRepository;

#[cfg(test)]
pub use message::MockMessageRepository;
#[cfg(test)]
pub use token::MockTokenRepository;
