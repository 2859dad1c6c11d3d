use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::route::ping,
        crate::routes::auth::route::login,
        crate::routes::auth::route::logout,
        crate::routes::lectures::route::query_lectures,
        crate::routes::calendar::route::monthly_summary,
        crate::routes::calendar::route::day_details,
        crate::routes::users::route::list_users,
        crate::routes::users::route::get_user,
        crate::routes::users::route::create_user,
        crate::routes::users::route::update_user,
        crate::routes::users::route::delete_user,
    ),
    tags(
        (name = "System", description = "Liveness probes"),
        (name = "Authentication", description = "Login and session cookie management"),
        (name = "Lectures", description = "Timetable queries"),
        (name = "Calendar", description = "Per-day session aggregation"),
        (name = "Users", description = "User administration (superadmin only)"),
    )
)]
pub struct ApiDoc;
