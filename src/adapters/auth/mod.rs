//! Credential validation adapters.
//!
//! - `JwtTokenValidator` - production HS256 validation against the server
//!   signing secret
//! - `MockTokenValidator` - table-backed validator for tests

mod jwt;
mod mock;

pub use jwt::{JwtConfig, JwtTokenValidator};
pub use mock::MockTokenValidator;
