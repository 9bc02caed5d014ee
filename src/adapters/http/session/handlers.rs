//! HTTP handlers for session endpoints.
//!
//! Sessions are the cookie-backed path: login exchanges a validated bearer
//! credential for a server-side session record and a cookie; subsequent
//! requests authenticate with the cookie alone.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::auth::Role;
use crate::domain::session::{SessionError, SessionId};
use crate::ports::SessionStore;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::dto::{LoginResponse, LogoutResponse, SessionView};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "ledgergate_session";

/// Shared state for session routes.
#[derive(Clone)]
pub struct SessionAppState {
    pub sessions: Arc<dyn SessionStore>,
}

/// Pull the session id out of the request's Cookie headers.
fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    for header in headers.get_all(COOKIE) {
        let Ok(value) = header.to_str() else { continue };
        for pair in value.split(';') {
            if let Some((name, cookie_value)) = pair.split_once('=') {
                if name.trim() == SESSION_COOKIE {
                    return cookie_value.trim().parse().ok();
                }
            }
        }
    }
    None
}

fn session_cookie(id: &SessionId) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

fn expired_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}

/// POST /auth/login - exchange a validated bearer credential for a session.
pub async fn login(
    State(state): State<SessionAppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let record = state.sessions.create(identity).await?;

    tracing::info!(user_id = %record.identity.user_id, "Session issued");

    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, session_cookie(&record.id))],
        Json(LoginResponse::from(&record)),
    ))
}

/// GET /auth/session - identity behind the presented cookie.
pub async fn current_session(
    State(state): State<SessionAppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let id = session_id_from_headers(&headers).ok_or(SessionError::NoActiveSession)?;
    let record = state.sessions.read(&id).await?;

    Ok(Json(SessionView::from(&record)))
}

/// POST /auth/logout - destroy the presented session, best-effort.
///
/// A failed destroy is logged but never fails the logout response.
pub async fn logout(
    State(state): State<SessionAppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Some(id) = session_id_from_headers(&headers) {
        if let Err(e) = state.sessions.destroy(&id).await {
            tracing::warn!(session_id = %id, error = %e, "Session destroy failed during logout");
        }
    }

    (
        [(SET_COOKIE, expired_session_cookie())],
        Json(LogoutResponse { logged_out: true }),
    )
}

/// GET /auth/sessions/:id - admin lookup of any session record.
pub async fn get_session(
    State(state): State<SessionAppState>,
    RequireAuth(identity): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    identity.require_role(Role::Admin)?;

    let id: SessionId = id.parse().map_err(|_| SessionError::NoActiveSession)?;
    let record = state.sessions.read(&id).await?;

    Ok(Json(SessionView::from(&record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn finds_session_cookie_among_others() {
        let id = SessionId::new();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!(
                "theme=dark; {}={}; locale=en",
                SESSION_COOKIE, id
            ))
            .unwrap(),
        );

        assert_eq!(session_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn missing_cookie_header_yields_none() {
        assert_eq!(session_id_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn malformed_session_id_yields_none() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("{}=not-a-uuid", SESSION_COOKIE)).unwrap(),
        );

        assert_eq!(session_id_from_headers(&headers), None);
    }

    #[test]
    fn issued_cookie_is_http_only() {
        let id = SessionId::new();
        let cookie = session_cookie(&id);
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.starts_with(SESSION_COOKIE));
        assert!(cookie.contains(&id.to_string()));
    }

    #[test]
    fn expired_cookie_has_zero_max_age() {
        assert!(expired_session_cookie().contains("Max-Age=0"));
    }
}
