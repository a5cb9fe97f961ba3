use actix_web::{
    get, http::header::ContentType, post, web::Data, HttpMessage, HttpRequest, HttpResponse,
};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::{app::AppState, auth::AuthState};

/// Pipe for executing GraphQL queries and mutations
/// - url: `{domain}/graphql`
///
/// # HTTP request requirements
/// ## header
/// - `Authorization: Bearer <token>` (optional, never enforced)
/// ## body
/// - json formatted GraphQL request with `query` and optional `variables`
///
/// # Example
/// ```
/// let request = actix_web::test::TestRequest::post()
///     .uri("localhost/graphql")
///     .set_json(json!({ "query": "{ blogs(user: \"U1\") { id name } }" }))
///     .to_request();
/// ```
///
/// # Response
/// ## Ok
/// - GraphQL response, failures are reported in its `errors` array
#[post("/graphql")]
pub async fn graphql(
    req: HttpRequest,
    app_state: Data<AppState>,
    gql_req: GraphQLRequest,
) -> GraphQLResponse {
    let auth = req.extensions().get::<AuthState>().cloned().unwrap_or_default();

    app_state
        .schema
        .execute(gql_req.into_inner().data(auth))
        .await
        .into()
}

/// Pipe serving the GraphiQL explorer
/// - url: `{domain}/graphql`
#[get("/graphql")]
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{
        test::{self, call_service, read_body, read_body_json},
        App,
    };
    use actix_web_httpauth::middleware::HttpAuthentication;
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        auth::{bearer_auth_validator, password::PasswordHasher, token::TokenKeys},
        database::store::Store,
    };

    fn app_state() -> AppState {
        AppState::new(Store::in_memory(), TokenKeys::new(b"secret"), PasswordHasher::new(4))
    }

    #[actix_rt::test]
    async fn test_graphql_over_http() {
        let app_state = app_state();

        let app = test::init_service(
            App::new()
                .app_data(Data::new(app_state.clone()))
                .wrap(HttpAuthentication::with_fn(bearer_auth_validator))
                .service(super::graphql),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({
                "query": "mutation($name: String!) { createBlog(name: $name, user: \"U1\") { name } }",
                "variables": { "name": "Over HTTP" }
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = read_body_json(resp).await;
        assert_eq!(body["data"]["createBlog"]["name"], "Over HTTP");

        let req = test::TestRequest::post()
            .uri("/graphql")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .set_json(json!({ "query": "{ blogs(user: \"U1\") { name } }" }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = read_body_json(resp).await;
        assert_eq!(body["data"]["blogs"], json!([{ "name": "Over HTTP" }]));
    }

    #[actix_rt::test]
    async fn test_domain_errors_are_graphql_errors() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(app_state()))
                .service(super::graphql),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({
                "query": "mutation { loginUser(mail: \"nobody@example.com\", pass: \"x\") { token } }"
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: Value = read_body_json(resp).await;
        assert_eq!(body["errors"][0]["message"], "User does not exist!");
    }

    #[actix_rt::test]
    async fn test_graphiql_page() {
        let app = test::init_service(App::new().service(super::graphiql)).await;

        let req = test::TestRequest::get().uri("/graphql").to_request();
        let resp = call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = read_body(resp).await;
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("graphiql"));
        assert!(page.contains("/graphql"));
    }
}
