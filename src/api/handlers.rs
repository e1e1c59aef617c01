//! API handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    Json,
};
use crate::api::docs::{FailureResponse, LoginResponse, UsersResponse};
use crate::api::AppState;
use crate::envelope::{ApiResponse, ResponseChannel};
use crate::types::{LoginData, LoginRequest};

pub const MISSING_CREDENTIALS: &str = "username or password not found";
pub const INVALID_CREDENTIALS: &str = "invalid credentials";
pub const LOGIN_SUCCEEDED: &str = "Connection succeded";
pub const USERS_LISTED: &str = "Users list";

/// Plain-text greeting
pub async fn root() -> &'static str {
    "Hello World"
}

/// Check a username/password pair against the configured login
#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 400, description = "Missing or invalid credentials", body = FailureResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    channel: ResponseChannel,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected login body");
            return ApiResponse::failure(rejection.body_text()).send(channel);
        }
    };

    let (Some(username), Some(password)) = (
        request.username.filter(|u| !u.is_empty()),
        request.password.filter(|p| !p.is_empty()),
    ) else {
        return ApiResponse::failure(MISSING_CREDENTIALS).send(channel);
    };

    if !state.credentials.matches(&username, &password) {
        tracing::info!(%username, "Login rejected");
        return ApiResponse::failure(INVALID_CREDENTIALS).send(channel);
    }

    let data = LoginData {
        username,
        token: state.credentials.token.clone(),
    };
    ApiResponse::success(LOGIN_SUCCEEDED, Some(data)).send(channel)
}

/// List every user
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "Users listed", body = UsersResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>, channel: ResponseChannel) -> Response {
    ApiResponse::success(USERS_LISTED, Some(state.users.as_slice())).send(channel)
}
