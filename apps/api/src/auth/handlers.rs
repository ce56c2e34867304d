//! Axum route handlers for registration and login.
//!
//! Token issuance is stubbed: both endpoints validate the payload shape and
//! return the same canned bearer token.

use axum::Json;
use tracing::info;

use crate::errors::AppError;
use crate::models::user::{Token, UserCreate, UserLogin};

pub const CANNED_ACCESS_TOKEN: &str = "fake-jwt-token";

/// POST /api/register
pub async fn handle_register(Json(user): Json<UserCreate>) -> Result<Json<Token>, AppError> {
    validate_email(&user.email)?;
    validate_password(&user.password)?;
    if user.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    info!(email = %user.email, "User registered");
    Ok(Json(bearer_token(user.email, Some(user.name))))
}

/// POST /api/login
pub async fn handle_login(Json(credentials): Json<UserLogin>) -> Result<Json<Token>, AppError> {
    validate_email(&credentials.email)?;
    validate_password(&credentials.password)?;

    info!(email = %credentials.email, "User logged in");
    Ok(Json(bearer_token(credentials.email, None)))
}

fn bearer_token(email: String, name: Option<String>) -> Token {
    Token {
        access_token: CANNED_ACCESS_TOKEN.to_string(),
        token_type: "bearer".to_string(),
        email,
        name,
    }
}

/// Shape check only: one `@`, non-empty local part, dotted domain, no whitespace.
fn validate_email(email: &str) -> Result<(), AppError> {
    let invalid = || AppError::Validation(format!("'{email}' is not a valid email address"));

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.is_empty() {
        return Err(AppError::Validation("password cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for email in ["ada@example.com", "first.last+tag@mail.co.uk", "x@y.io"] {
            assert!(validate_email(email).is_ok(), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "ada@",
            "ada@localhost",
            "ada@example..com",
            "ada@@example.com",
            "ada lovelace@example.com",
        ] {
            assert!(
                matches!(validate_email(email), Err(AppError::Validation(_))),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn empty_password_is_rejected() {
        assert!(validate_password("").is_err());
        assert!(validate_password("hunter2").is_ok());
    }

    #[tokio::test]
    async fn register_echoes_identity_with_canned_token() {
        let Json(token) = handle_register(Json(UserCreate {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            name: "Ada".to_string(),
        }))
        .await
        .unwrap();

        assert_eq!(token.access_token, "fake-jwt-token");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.email, "ada@example.com");
        assert_eq!(token.name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn register_rejects_blank_name() {
        let result = handle_register(Json(UserCreate {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            name: "  ".to_string(),
        }))
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn login_returns_canned_token_without_name() {
        let Json(token) = handle_login(Json(UserLogin {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        }))
        .await
        .unwrap();

        assert_eq!(token.access_token, CANNED_ACCESS_TOKEN);
        assert!(token.name.is_none());
    }
}
