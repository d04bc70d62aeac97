//! Authentication and authorization gate.
//!
//! [`gate`] runs as route middleware in front of every handler: it verifies the
//! Basic credentials against the configured [`IdentityProvider`], resolves the
//! operation from the matched route, and checks it against the policy table.
//! Handlers only run for authorized callers and find the [`Identity`] in the
//! request extensions.

pub mod basic;
pub mod identity;
pub mod policy;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

pub use identity::{default_accounts, Identity, IdentityProvider, StaticIdentityProvider};

use crate::{
    error::{AppError, AppResult},
    routes, AppState,
};

pub async fn gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let Some(credentials) = basic::credentials(request.headers()) else {
        debug!(path = %request.uri().path(), "Missing or malformed credentials");
        return Err(AppError::Unauthorized);
    };

    // Password verification is deliberately slow; keep it off the async workers.
    let provider = state.identities.clone();
    let username = credentials.username.clone();
    let identity = tokio::task::spawn_blocking(move || provider.verify(&credentials))
        .await
        .map_err(|e| AppError::Internal(format!("credential check failed: {e}")))?;
    let Some(identity) = identity else {
        warn!(username = %username, "Rejected credentials");
        return Err(AppError::Unauthorized);
    };

    let operation = request
        .extensions()
        .get::<MatchedPath>()
        .and_then(|path| routes::operation_for(request.method(), path.as_str()));
    let Some(operation) = operation else {
        warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "No policy for route"
        );
        return Err(AppError::Forbidden);
    };

    if let Err(e) = policy::authorize(&identity, operation) {
        debug!(
            username = %identity.username,
            role = %identity.role,
            %operation,
            "Insufficient role"
        );
        return Err(e);
    }

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
