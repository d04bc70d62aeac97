//! HTTP Basic credential parsing (RFC 7617).

use axum::http::{header, HeaderMap};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::identity::Credentials;

/// Extracts credentials from the `Authorization` header.
///
/// Returns `None` when the header is absent or is not well-formed Basic auth.
pub fn credentials(headers: &HeaderMap) -> Option<Credentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    // The username cannot contain a colon; the password can.
    let (username, password) = decoded.split_once(':')?;

    Some(Credentials::new(username, password))
}
