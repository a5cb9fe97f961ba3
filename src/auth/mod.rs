pub mod password;
pub mod token;

use actix_web::{dev::ServiceRequest, web::Data, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use log::debug;

use crate::app::AppState;
use token::Claims;

/// Result of checking the bearer token of a request.
/// Attached to every request, nothing enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_auth: bool,
    pub claims: Option<Claims>,
}

impl AuthState {
    pub fn authenticated(claims: Claims) -> Self {
        Self {
            is_auth: true,
            claims: Some(claims),
        }
    }
}

/// Fail-open validator for `HttpAuthentication::with_fn`.
/// A missing, malformed or invalid token marks the request as
/// unauthenticated, the request itself always goes through.
pub async fn bearer_auth_validator(
    req: ServiceRequest,
    creds: Option<BearerAuth>,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let state = match (creds, req.app_data::<Data<AppState>>()) {
        (Some(creds), Some(app_state)) => match app_state.tokens.verify(creds.token()) {
            Ok(claims) => AuthState::authenticated(claims),
            Err(err) => {
                debug!("Ignoring bearer token: {}", err);
                AuthState::default()
            }
        },
        _ => AuthState::default(),
    };

    req.extensions_mut().insert(state);

    Ok(req)
}
