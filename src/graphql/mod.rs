//! GraphQL schema assembly

pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};

use crate::{
    auth::{password::PasswordHasher, token::TokenKeys},
    database::store::Store,
};
use mutation::MutationRoot;
use query::QueryRoot;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the store, the token keys and the password hasher
/// injected as context data. Per-request auth state is added by the
/// HTTP handler.
pub fn build_schema(store: Store, tokens: TokenKeys, hasher: PasswordHasher) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .data(tokens)
        .data(hasher)
        .finish()
}
