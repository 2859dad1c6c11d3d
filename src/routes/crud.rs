//! Generic CRUD handlers, bound at compile time to an entity (or its
//! ActiveModel) at route-registration sites. One implementation serves every
//! plain entity; entities with extra rules (users) get dedicated handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, IntoActiveModel, PrimaryKeyTrait,
};
use serde::Serialize;
use serde_json::Value;

use crate::AppState;
use crate::error::ApiError;
use crate::routes::MessageResponse;

pub async fn all<E>(State(state): State<AppState>) -> Result<Json<Vec<E::Model>>, ApiError>
where
    E: EntityTrait,
    E::Model: Serialize,
{
    let rows = E::find().all(&state.db).await?;
    Ok(Json(rows))
}

pub async fn get_one<E>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<E::Model>, ApiError>
where
    E: EntityTrait,
    E::Model: Serialize,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let row = E::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Not found".to_string()))?;

    Ok(Json(row))
}

pub async fn create<A>(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<<A::Entity as EntityTrait>::Model>), ApiError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Default + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A> + Serialize,
    for<'de> <A::Entity as EntityTrait>::Model: serde::de::Deserialize<'de>,
{
    let model = A::from_json(payload).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let created = model.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetches the existing row, overlays the fields present in the body onto it
/// and persists the result. Fields absent from the body keep their values.
pub async fn update<A>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<Value>,
) -> Result<Json<<A::Entity as EntityTrait>::Model>, ApiError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Default + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A> + Serialize,
    for<'de> <A::Entity as EntityTrait>::Model: serde::de::Deserialize<'de>,
    <<A::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let existing = <A::Entity as EntityTrait>::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Not found".to_string()))?;

    let mut model = existing.into_active_model();
    model
        .set_from_json(payload)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let updated = model.update(&state.db).await?;
    Ok(Json(updated))
}

/// Idempotent from the caller's perspective: deleting an absent row still
/// reports success.
pub async fn destroy<E>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    E::delete_by_id(id).exec(&state.db).await?;

    Ok(Json(MessageResponse {
        message: "Deleted".to_string(),
    }))
}
