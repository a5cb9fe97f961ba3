pub mod graphql;

use actix_web::web::ServiceConfig;

/// Registers every endpoint of the server
pub fn config(cfg: &mut ServiceConfig) {
    cfg.service(graphql::graphql).service(graphql::graphiql);
}
