pub mod cors;
pub mod rate_limit;
pub mod security;

pub use cors::create_cors;
pub use rate_limit::{RateLimitConfig, RateLimiter};
pub use security::SecurityHeaders;
