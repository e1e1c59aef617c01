//! OpenAPI description
//!
//! Handler paths are declared with `#[utoipa::path]` next to each handler. The
//! response shapes below only exist to describe the envelope in the document;
//! handlers never construct them.

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::api::handlers;
use crate::envelope::Meta;
use crate::error::Result;
use crate::types::{LoginData, LoginRequest, User};

#[derive(OpenApi)]
#[openapi(
    info(title = "envelope-api", description = "Login check and user listing"),
    paths(handlers::login, handlers::list_users),
    components(schemas(
        User,
        LoginRequest,
        LoginData,
        LoginResponse,
        UsersResponse,
        FailureResponse,
        Meta
    )),
    tags(
        (name = "Auth", description = "Authentication operations"),
        (name = "Users", description = "User operations")
    )
)]
pub struct ApiDoc;

/// Envelope answered by a successful login
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Connection succeded")]
    pub message: String,
    pub data: LoginData,
    pub meta: Meta,
}

/// Envelope answered by the user listing
#[derive(Serialize, ToSchema)]
pub struct UsersResponse {
    #[schema(example = "Users list")]
    pub message: String,
    pub data: Vec<User>,
    pub meta: Meta,
}

/// Envelope answered on a failed request; never carries `data`
#[derive(Serialize, ToSchema)]
pub struct FailureResponse {
    #[schema(example = "username or password not found")]
    pub message: String,
    pub meta: Meta,
}

/// Render the document as pretty-printed JSON.
pub fn openapi_json() -> Result<String> {
    Ok(ApiDoc::openapi().to_pretty_json()?)
}
