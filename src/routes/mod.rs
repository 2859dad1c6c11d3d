use axum::Router;
use axum::routing::{get, post, put};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;
use crate::entities::{batch, course, faculty, lecture, room, session, subject};

pub mod auth;
pub mod calendar;
pub mod crud;
pub mod health;
pub mod lectures;
pub mod users;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Read endpoints available to every authenticated role.
pub fn faculty_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/course", get(crud::all::<course::Entity>))
        .route("/api/v1/course/{id}", get(crud::get_one::<course::Entity>))
        .route("/api/v1/subject", get(crud::all::<subject::Entity>))
        .route("/api/v1/subject/{id}", get(crud::get_one::<subject::Entity>))
        .route("/api/v1/faculty", get(crud::all::<faculty::Entity>))
        .route("/api/v1/faculty/{id}", get(crud::get_one::<faculty::Entity>))
        .route("/api/v1/room", get(crud::all::<room::Entity>))
        .route("/api/v1/room/{id}", get(crud::get_one::<room::Entity>))
        .route("/api/v1/batch", get(crud::all::<batch::Entity>))
        .route("/api/v1/batch/{id}", get(crud::get_one::<batch::Entity>))
        // kept for backwards compatibility, use /lecture/query
        .route("/api/v1/lecture", get(lectures::route::query_lectures))
        .route("/api/v1/lecture/query", get(lectures::route::query_lectures))
        .route("/api/v1/lecture/{id}", get(crud::get_one::<lecture::Entity>))
        .route("/api/v1/session", get(crud::all::<session::Entity>))
        .route("/api/v1/session/{id}", get(crud::get_one::<session::Entity>))
        .merge(calendar::create_route())
}

/// Write endpoints, gated to admin and superadmin.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/course", post(crud::create::<course::ActiveModel>))
        .route(
            "/api/v1/course/{id}",
            put(crud::update::<course::ActiveModel>).delete(crud::destroy::<course::Entity>),
        )
        .route("/api/v1/subject", post(crud::create::<subject::ActiveModel>))
        .route(
            "/api/v1/subject/{id}",
            put(crud::update::<subject::ActiveModel>).delete(crud::destroy::<subject::Entity>),
        )
        .route("/api/v1/faculty", post(crud::create::<faculty::ActiveModel>))
        .route(
            "/api/v1/faculty/{id}",
            put(crud::update::<faculty::ActiveModel>).delete(crud::destroy::<faculty::Entity>),
        )
        .route("/api/v1/room", post(crud::create::<room::ActiveModel>))
        .route(
            "/api/v1/room/{id}",
            put(crud::update::<room::ActiveModel>).delete(crud::destroy::<room::Entity>),
        )
        .route("/api/v1/batch", post(crud::create::<batch::ActiveModel>))
        .route(
            "/api/v1/batch/{id}",
            put(crud::update::<batch::ActiveModel>).delete(crud::destroy::<batch::Entity>),
        )
        .route("/api/v1/lecture", post(crud::create::<lecture::ActiveModel>))
        .route(
            "/api/v1/lecture/{id}",
            put(crud::update::<lecture::ActiveModel>).delete(crud::destroy::<lecture::Entity>),
        )
        .route("/api/v1/session", post(crud::create::<session::ActiveModel>))
        .route(
            "/api/v1/session/{id}",
            put(crud::update::<session::ActiveModel>).delete(crud::destroy::<session::Entity>),
        )
}

/// User administration, gated to superadmin.
pub fn superadmin_routes() -> Router<AppState> {
    users::create_route()
}
