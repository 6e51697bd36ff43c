pub mod message_repository;
pub mod token_repository;

pub use message_repository::MySqlMessageRepository;
pub use token_repository::MySqlTokenRepository;
