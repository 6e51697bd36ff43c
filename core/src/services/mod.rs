pub mod token;

pub use token::{
    SweeperConfig, SweeperHandle, TokenService, TokenServiceConfig, TokenSweeper,
    ValidationOutcome,
};
