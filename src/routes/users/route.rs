use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};

use super::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::AppState;
use crate::config::ROLE_FACULTY;
use crate::entities::user;
use crate::error::ApiError;
use crate::routes::MessageResponse;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/api/v1/user", get(list_users).post(create_user))
        .route(
            "/api/v1/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// List all users (superadmin only)
#[utoipa::path(
    get,
    path = "/api/v1/user",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Forbidden - superadmin only"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = user::Entity::find().all(&state.db).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get one user by id (superadmin only)
#[utoipa::path(
    get,
    path = "/api/v1/user/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = user::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Not found".to_string()))?;

    Ok(Json(user.into()))
}

/// Create a user (superadmin only)
#[utoipa::path(
    post,
    path = "/api/v1/user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let hashed = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(e.into()))?;

    let new_user = user::ActiveModel {
        username: Set(payload.username),
        password: Set(hashed),
        role: Set(payload.role.unwrap_or_else(|| ROLE_FACULTY.to_string())),
        ..Default::default()
    };

    let created = new_user.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Update a user (superadmin only)
#[utoipa::path(
    put,
    path = "/api/v1/user/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let existing = user::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Not found".to_string()))?;

    let mut model = existing.into_active_model();

    if let Some(username) = payload.username {
        model.username = Set(username);
    }
    if let Some(password) = payload.password {
        let hashed = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
            .map_err(|e| ApiError::Internal(e.into()))?;
        model.password = Set(hashed);
    }
    if let Some(role) = payload.role {
        model.role = Set(role);
    }

    let updated = model.update(&state.db).await?;
    Ok(Json(updated.into()))
}

/// Delete a user (superadmin only)
#[utoipa::path(
    delete,
    path = "/api/v1/user/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    user::Entity::delete_by_id(id).exec(&state.db).await?;

    Ok(Json(MessageResponse {
        message: "Deleted".to_string(),
    }))
}
