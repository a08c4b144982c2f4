use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::user_dto::{UserPayload, UserResponse},
    error::{Error, Result},
    utils::{response::ApiResponse, validation::parse_id_param},
    AppState,
};

pub async fn welcome() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to User Management API" }))
}

pub async fn route_not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error(format!("Route {} not found", uri.path()))),
    )
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = [UserResponse])
    )
)]
#[axum::debug_handler]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.get_all_users().await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(ApiResponse::success(
        "Users retrieved successfully",
        users,
    )))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserResponse),
        (status = 400, description = "Invalid ID parameter"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id_param(&id)?;
    let user = state.user_service.get_user_by_id(id).await?;
    Ok(Json(ApiResponse::success(
        "User retrieved successfully",
        UserResponse::from(user),
    )))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email already in use")
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<UserPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(|err| Error::BadRequest(err.body_text()))?;
    payload.validate()?;
    let user = state.user_service.create_user(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "User created successfully",
            UserResponse::from(user),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already in use by another user")
    )
)]
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UserPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let id = parse_id_param(&id)?;
    let Json(payload) = payload.map_err(|err| Error::BadRequest(err.body_text()))?;
    payload.validate()?;
    let user = state.user_service.update_user(id, payload).await?;
    Ok(Json(ApiResponse::success(
        "User updated successfully",
        UserResponse::from(user),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = UserResponse),
        (status = 400, description = "Invalid ID parameter"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id_param(&id)?;
    let user = state.user_service.delete_user(id).await?;
    Ok(Json(ApiResponse::success(
        "User deleted successfully",
        UserResponse::from(user),
    )))
}
