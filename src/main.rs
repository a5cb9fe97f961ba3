#[macro_use]
extern crate diesel;
extern crate dotenv;

pub mod app;
pub mod auth;
pub mod database;
pub mod graphql;
pub mod routes;
pub mod schema;

use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use actix_web_httpauth::middleware::HttpAuthentication;
use log::info;

use crate::{
    app::{config::Config, AppState},
    auth::{bearer_auth_validator, password::PasswordHasher, token::TokenKeys},
    database::store::Store,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let store =
        Store::connect(&config.database_url).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let app_state = AppState::new(
        store,
        TokenKeys::new(config.jwt_secret.as_bytes()),
        PasswordHasher::new(config.bcrypt_cost),
    );

    info!("Server running on http://{}:{}/graphql", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(app_state.clone()))
            .wrap(HttpAuthentication::with_fn(bearer_auth_validator))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(routes::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
