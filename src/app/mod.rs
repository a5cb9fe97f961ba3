pub mod config;

use std::fmt::Display;

use actix_web::error::BlockingError;

use crate::{
    auth::{password::PasswordHasher, token::TokenKeys},
    database::store::Store,
    graphql::{build_schema, AppSchema},
};

/** Shared by every worker, holds the assembled schema and the token keys the auth gate verifies with */
#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub tokens: TokenKeys,
}

impl AppState {
    pub fn new(store: Store, tokens: TokenKeys, hasher: PasswordHasher) -> Self {
        Self {
            schema: build_schema(store, tokens.clone(), hasher),
            tokens,
        }
    }
}

/** Holds the errors we can hit while bootstrapping or resolving a request */
#[derive(Debug)]
pub enum AppError {
    UserExists,
    UserNotFound,
    PasswordIncorrect,
    MissingConfig(&'static str),
    InvalidConfig(&'static str),
    Database(diesel::result::Error),
    Pool(diesel::r2d2::PoolError),
    Blocking,
    Hashing(bcrypt::BcryptError),
    Token(jsonwebtoken::errors::Error),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::UserExists => f.write_str("User already exists!"),
            AppError::UserNotFound => f.write_str("User does not exist!"),
            AppError::PasswordIncorrect => f.write_str("Password is incorrect!"),
            AppError::MissingConfig(var) => write!(f, "Environment variable '{}' not set", var),
            AppError::InvalidConfig(var) => write!(f, "Environment variable '{}' is invalid", var),
            AppError::Database(err) => write!(f, "Database error: {}", err),
            AppError::Pool(err) => write!(f, "Connection pool error: {}", err),
            AppError::Blocking => f.write_str("Blocking task was cancelled"),
            AppError::Hashing(err) => write!(f, "Password hashing error: {}", err),
            AppError::Token(err) => write!(f, "Token error: {}", err),
        }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        AppError::Database(err)
    }
}
impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::Pool(err)
    }
}
impl From<BlockingError> for AppError {
    fn from(_: BlockingError) -> Self {
        AppError::Blocking
    }
}
impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::Hashing(err)
    }
}
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Token(err)
    }
}

impl std::error::Error for AppError {}
