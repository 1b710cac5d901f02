pub mod helpers;
pub mod schema_impl;

use actix_web::{post, web};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::auth::AuthenticatedUser;

pub use schema_impl::{create_schema, MutationRoot, QueryRoot, Schema};

/// GraphQL endpoint; the caller's claims are attached to every request.
#[post("/graphql")]
pub async fn graphql_handler(
    schema: web::Data<Schema>,
    auth: AuthenticatedUser,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner().data(auth.0)).await.into()
}
