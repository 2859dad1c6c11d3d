use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::config::{APP_CONFIG, AUTH_COOKIE, ROLE_ADMIN, ROLE_SUPERADMIN};
use crate::error::ApiError;
use crate::utils::jwt::{self, Claims};

/// Validates the session cookie and makes the decoded claims available to
/// downstream handlers and role gates via request extensions.
pub async fn authenticate(
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let cookie = jar
        .get(AUTH_COOKIE)
        .ok_or_else(|| ApiError::Unauthorized("Authorization token not found".to_string()))?;

    let claims = jwt::validate_token(cookie.value(), &APP_CONFIG.jwt_secret)
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Exact allow-list membership. Roles are not ranked; "superadmin" passes
/// the admin gate only because the admin allow-list names it.
pub(crate) fn role_allowed(role: &str, allowed: &[&str]) -> bool {
    allowed.contains(&role)
}

fn check_role(req: &Request, allowed: &[&str]) -> Result<(), ApiError> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| ApiError::Unauthorized("User role not found".to_string()))?;

    if !role_allowed(&claims.role, allowed) {
        return Err(ApiError::Forbidden("Insufficient permissions".to_string()));
    }

    Ok(())
}

pub async fn require_admin(req: Request, next: Next) -> Result<Response, ApiError> {
    check_role(&req, &[ROLE_ADMIN, ROLE_SUPERADMIN])?;
    Ok(next.run(req).await)
}

pub async fn require_superadmin(req: Request, next: Next) -> Result<Response, ApiError> {
    check_role(&req, &[ROLE_SUPERADMIN])?;
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ROLE_FACULTY;

    #[test]
    fn test_role_allowed_exact_membership() {
        let admin_list = [ROLE_ADMIN, ROLE_SUPERADMIN];
        assert!(role_allowed("admin", &admin_list));
        assert!(role_allowed("superadmin", &admin_list));
        assert!(!role_allowed("faculty", &admin_list));
    }

    #[test]
    fn test_role_allowed_no_hierarchy() {
        // superadmin passes a gate only when the allow-list names it
        let faculty_only = [ROLE_FACULTY];
        assert!(!role_allowed("superadmin", &faculty_only));
        assert!(!role_allowed("admin", &faculty_only));

        let superadmin_only = [ROLE_SUPERADMIN];
        assert!(!role_allowed("admin", &superadmin_only));
        assert!(role_allowed("superadmin", &superadmin_only));
    }

    #[test]
    fn test_role_allowed_is_case_sensitive() {
        assert!(!role_allowed("Admin", &[ROLE_ADMIN]));
        assert!(!role_allowed("", &[ROLE_ADMIN, ROLE_SUPERADMIN]));
    }

    #[test]
    fn test_check_role_without_claims_is_unauthorized() {
        let req = Request::builder().body(axum::body::Body::empty()).unwrap();
        let err = check_role(&req, &[ROLE_ADMIN]).unwrap_err();
        assert_eq!(err.status_code(), http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_check_role_forbidden_and_allowed() {
        let mut req = Request::builder().body(axum::body::Body::empty()).unwrap();
        req.extensions_mut().insert(Claims {
            username: "jdoe".to_string(),
            role: "faculty".to_string(),
            iat: 0,
            exp: i64::MAX,
        });

        let err = check_role(&req, &[ROLE_ADMIN, ROLE_SUPERADMIN]).unwrap_err();
        assert_eq!(err.status_code(), http::StatusCode::FORBIDDEN);

        assert!(check_role(&req, &[ROLE_FACULTY]).is_ok());
    }
}
