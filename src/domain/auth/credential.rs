//! Bearer credential extraction.
//!
//! A credential is the opaque token carried in an `Authorization` header of
//! the form `Bearer <token>`. The header must split into exactly a `Bearer`
//! scheme token followed by a non-empty value; anything else is treated as
//! "no credential".

use super::AuthError;

/// Extract the bearer credential from a raw `Authorization` header value.
///
/// Splits the header on whitespace and takes the second token. Fails with
/// [`AuthError::MissingCredential`] when the header is absent, empty, not
/// prefixed with `Bearer`, or has no value after the scheme.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingCredential)?;
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("Bearer"), Some(token)) => Ok(token),
        _ => Err(AuthError::MissingCredential),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_from_well_formed_header() {
        assert_eq!(extract_bearer(Some("Bearer abc123")), Ok("abc123"));
    }

    #[test]
    fn rejects_absent_header() {
        assert_eq!(extract_bearer(None), Err(AuthError::MissingCredential));
    }

    #[test]
    fn rejects_empty_header() {
        assert_eq!(extract_bearer(Some("")), Err(AuthError::MissingCredential));
    }

    #[test]
    fn rejects_scheme_without_value() {
        assert_eq!(extract_bearer(Some("Bearer")), Err(AuthError::MissingCredential));
        assert_eq!(extract_bearer(Some("Bearer ")), Err(AuthError::MissingCredential));
    }

    #[test]
    fn rejects_non_bearer_scheme() {
        assert_eq!(
            extract_bearer(Some("Basic dXNlcjpwYXNz")),
            Err(AuthError::MissingCredential)
        );
    }

    #[test]
    fn rejects_lowercase_scheme() {
        assert_eq!(
            extract_bearer(Some("bearer abc123")),
            Err(AuthError::MissingCredential)
        );
    }

    #[test]
    fn rejects_bare_token_without_scheme() {
        assert_eq!(
            extract_bearer(Some("abc123")),
            Err(AuthError::MissingCredential)
        );
    }

    #[test]
    fn takes_second_token_when_extra_whitespace_present() {
        assert_eq!(extract_bearer(Some("Bearer   abc123")), Ok("abc123"));
    }
}
