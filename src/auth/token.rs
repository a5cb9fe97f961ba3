use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{app::AppError, database::models::user::User};

pub const TOKEN_LIFETIME_HOURS: i64 = 1;
const TOKEN_LIFETIME_SECS: i64 = TOKEN_LIFETIME_HOURS * 60 * 60;

/// Payload of a login token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub mail: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 keys derived from the configured secret.
/// Issuing (login) and verifying (auth gate) must share one instance.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Signs a token for `user`, valid for [TOKEN_LIFETIME_HOURS] from now
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        self.issue_at(user, Utc::now().timestamp())
    }

    fn issue_at(&self, user: &User, issued_at: i64) -> Result<String, AppError> {
        let claims = Claims {
            id: user.id.clone(),
            mail: user.mail.clone(),
            iat: issued_at,
            exp: issued_at + TOKEN_LIFETIME_SECS,
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Checks signature and expiry, returns the payload
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        Ok(decode::<Claims>(token, &self.decoding, &self.validation)?.claims)
    }
}
