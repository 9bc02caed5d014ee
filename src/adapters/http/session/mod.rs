//! Session HTTP surface.

mod dto;
mod handlers;
mod routes;

pub use dto::{LoginResponse, LogoutResponse, SessionView};
pub use handlers::{SessionAppState, SESSION_COOKIE};
pub use routes::session_routes;
