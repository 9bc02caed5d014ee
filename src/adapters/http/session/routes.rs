//! Axum router configuration for session endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{current_session, get_session, login, logout, SessionAppState};

/// Session routes.
///
/// - `POST /login` - exchange a validated bearer credential for a cookie
/// - `GET /session` - identity behind the presented cookie
/// - `POST /logout` - best-effort session destruction
/// - `GET /sessions/:id` - admin lookup of any session record
pub fn session_routes() -> Router<SessionAppState> {
    Router::new()
        .route("/login", post(login))
        .route("/session", get(current_session))
        .route("/logout", post(logout))
        .route("/sessions/:id", get(get_session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::session::InMemorySessionStore;

    #[test]
    fn session_routes_creates_router() {
        let router = session_routes();
        let _: Router<()> = router.with_state(SessionAppState {
            sessions: Arc::new(InMemorySessionStore::new()),
        });
    }
}
