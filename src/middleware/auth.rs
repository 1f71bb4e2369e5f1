use axum::{response::{Response, IntoResponse}};
use axum::extract::{Request, State};
use axum::middleware::Next;
use http::header::AUTHORIZATION;
use tracing::warn;
use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::state::AppState;

/// Verified session, attached to request extensions by [`require_auth`].
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub email: String,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = match req.headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer ")) {
        Some(t) => t.trim(),
        None => return AppError::Unauthorized.into_response(),
    };

    let claims = match verify_token(token, &state.jwt_secret) {
        Ok(c) => c,
        Err(e) => return e.into_response(),
    };

    req.extensions_mut().insert(AuthContext {
        email: claims.email,
    });

    next.run(req).await
}

/// Must be layered inside [`require_auth`]. Passes only when the stored user
/// for the session's email has role `admin`.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let Some(email) = req.extensions().get::<AuthContext>().map(|a| a.email.clone()) else {
        return AppError::Unauthorized.into_response();
    };

    let user = match state.store.find_user_by_email(&email).await {
        Ok(u) => u,
        Err(e) => return e.into_response(),
    };

    match user {
        Some(u) if u.is_admin() => next.run(req).await,
        _ => {
            warn!(%email, "Admin route denied");
            AppError::forbidden("Admin role required").into_response()
        }
    }
}
