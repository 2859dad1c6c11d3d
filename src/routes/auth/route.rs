use axum::{Extension, Json, Router, extract::State, routing::post};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use time::{Duration, OffsetDateTime};

use super::dto::{LoginRequest, LoginResponse};
use crate::AppState;
use crate::config::{APP_CONFIG, AUTH_COOKIE};
use crate::entities::user;
use crate::error::ApiError;
use crate::routes::MessageResponse;
use crate::utils::jwt::{self, Claims};

pub fn public_route() -> Router<AppState> {
    Router::new().route("/api/v1/login", post(login))
}

pub fn protected_route() -> Router<AppState> {
    Router::new().route("/api/v1/logout", post(logout))
}

/// Login endpoint - verifies credentials and sets the session cookie
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    // A database failure here deliberately reads as bad credentials to the
    // caller; the real cause only goes to the log.
    let user = user::Entity::find()
        .filter(user::Column::Username.eq(&payload.username))
        .one(&state.db)
        .await
        .map_err(|e| {
            tracing::error!(username = %payload.username, error = %e, "database error during authentication");
            ApiError::Unauthorized("invalid username or password".to_string())
        })?
        .ok_or_else(|| {
            tracing::warn!(username = %payload.username, "login attempt for unknown user");
            ApiError::Unauthorized("invalid username or password".to_string())
        })?;

    let password_valid = bcrypt::verify(&payload.password, &user.password).unwrap_or(false);
    if !password_valid {
        tracing::warn!(username = %user.username, "password mismatch");
        return Err(ApiError::Unauthorized(
            "invalid username or password".to_string(),
        ));
    }

    let token = jwt::generate_token(
        &user.username,
        &user.role,
        &APP_CONFIG.jwt_secret,
        APP_CONFIG.token_validity_hours,
    )
    .map_err(|e| ApiError::Internal(e.into()))?;

    tracing::info!(username = %user.username, role = %user.role, "user authenticated");

    let jar = jar.add(build_auth_cookie(token, APP_CONFIG.token_validity_hours));

    Ok((
        jar,
        Json(LoginResponse {
            message: "Login Successful".to_string(),
            username: user.username,
            role: user.role,
        }),
    ))
}

/// Logout endpoint - expires the session cookie
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 200, description = "Logout successful", body = MessageResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Authentication"
)]
pub async fn logout(
    Extension(claims): Extension<Claims>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    tracing::info!(username = %claims.username, "user logged out");

    (
        jar.add(removal_cookie()),
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
}

/// SameSite=None + Secure so the cookie survives cross-site requests from
/// the web client.
fn build_auth_cookie(token: String, validity_hours: i64) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(Duration::hours(validity_hours))
        .build()
}

/// Same attributes as the login cookie, empty value, expiry in the past;
/// the client discards it.
fn removal_cookie() -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookie_attributes() {
        let cookie = build_auth_cookie("some-token".to_string(), 168);
        assert_eq!(cookie.name(), AUTH_COOKIE);
        assert_eq!(cookie.value(), "some-token");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.max_age(), Some(Duration::hours(168)));
    }

    #[test]
    fn test_removal_cookie_is_expired() {
        let cookie = removal_cookie();
        assert_eq!(cookie.name(), AUTH_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(
            cookie.expires().and_then(|e| e.datetime()),
            Some(OffsetDateTime::UNIX_EPOCH)
        );
    }
}
