use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Claims carried by the session token. Role is the free-text role string
/// stored on the user row; authorization checks it against per-route
/// allow-lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

pub fn generate_token(
    username: &str,
    role: &str,
    secret: &str,
    validity_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        username: username.to_owned(),
        role: role.to_owned(),
        iat: now,
        exp: now + validity_hours * 3600,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn validate_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_round_trip() {
        let token = generate_token("alice", "admin", SECRET, 1).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = generate_token("alice", "admin", SECRET, 1).unwrap();
        assert!(validate_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Issued two hours in the past, well beyond the default leeway.
        let token = generate_token("alice", "faculty", SECRET, -2).unwrap();
        assert!(validate_token(&token, SECRET).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = generate_token("alice", "faculty", SECRET, 1).unwrap();
        let mut tampered = token.clone();
        tampered.truncate(token.len() - 2);
        assert!(validate_token(&tampered, SECRET).is_err());
    }
}
