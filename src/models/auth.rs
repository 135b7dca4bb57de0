//! Session user extracted from the JWT issued by the external auth service.

use actix_identity::Identity;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, error::ErrorUnauthorized, web};
use jsonwebtoken::{DecodingKey, Validation, decode, errors::Error as JwtError};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// Claims carried by the auth service's session token. The identity cookie
/// stores the raw JWT; this type doubles as the decoded claim set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Subject: the user id at the auth service.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    /// Expiry as a unix timestamp, validated on decode.
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Decodes and validates a JWT with the shared HS256 secret.
    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, JwtError> {
        let decoded = decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(decoded.claims)
    }

    /// True when the user carries the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = Identity::from_request(req, payload).into_inner();
        let secret = req
            .app_data::<web::Data<ServerConfig>>()
            .map(|config| config.secret.clone());

        let user = (|| {
            let identity = identity.map_err(|_| ErrorUnauthorized("no session"))?;
            let token = identity.id().map_err(|_| ErrorUnauthorized("no session"))?;
            let secret = secret.ok_or_else(|| ErrorUnauthorized("server misconfigured"))?;
            Self::from_jwt(&token, &secret).map_err(|_| ErrorUnauthorized("invalid session"))
        })();

        std::future::ready(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn token(user: &AuthenticatedUser, secret: &str) -> String {
        encode(
            &Header::default(),
            user,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("failed to encode token")
    }

    fn sample_user(exp: usize) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "42".to_string(),
            email: "admin@chatai.com".to_string(),
            name: "Admin".to_string(),
            roles: vec!["admin".to_string()],
            exp,
        }
    }

    #[test]
    fn decodes_valid_token() {
        let exp = (chrono::Utc::now().timestamp() + 3600) as usize;
        let user = sample_user(exp);
        let decoded = AuthenticatedUser::from_jwt(&token(&user, "secret"), "secret").unwrap();
        assert_eq!(decoded.email, user.email);
        assert!(decoded.has_role("admin"));
        assert!(!decoded.has_role("editor"));
    }

    #[test]
    fn rejects_wrong_secret() {
        let exp = (chrono::Utc::now().timestamp() + 3600) as usize;
        let user = sample_user(exp);
        assert!(AuthenticatedUser::from_jwt(&token(&user, "secret"), "other").is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let exp = (chrono::Utc::now().timestamp() - 3600) as usize;
        let user = sample_user(exp);
        assert!(AuthenticatedUser::from_jwt(&token(&user, "secret"), "secret").is_err());
    }
}
