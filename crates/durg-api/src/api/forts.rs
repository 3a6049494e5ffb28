// Fort catalogue endpoints
// Decision: reads are public, writes require an admin bearer token

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::common::{error_response, ErrorResponse};
use crate::auth::middleware::AdminBearer;
use crate::catalogue::{images, seed};
use crate::storage::models::{CreateFort, FortRow, UpdateFort};
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedItemError {
    pub name: String,
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    pub success: bool,
    pub message: String,
    pub count: usize,
    #[serde(rename = "errorDetails", skip_serializing_if = "Option::is_none")]
    pub error_details: Option<Vec<SeedItemError>>,
}

/// Fort catalogue routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/forts", get(list_forts).post(create_fort))
        .route("/api/forts/seed", post(seed_forts))
        .route(
            "/api/forts/:id",
            get(get_fort).put(update_fort).delete(delete_fort),
        )
        .with_state(state)
}

/// List all forts, sorted by name
#[utoipa::path(
    get,
    path = "/api/forts",
    responses(
        (status = 200, description = "All forts in the catalogue", body = Vec<FortRow>),
    ),
    tag = "forts"
)]
pub(crate) async fn list_forts(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.db.list_forts())
}

/// Fetch a single fort
#[utoipa::path(
    get,
    path = "/api/forts/{id}",
    params(("id" = Uuid, Path, description = "Fort id")),
    responses(
        (status = 200, description = "The fort", body = FortRow),
        (status = 404, description = "No fort with this id"),
    ),
    tag = "forts"
)]
pub(crate) async fn get_fort(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FortRow>, ApiError> {
    state
        .db
        .get_fort(id)
        .map(Json)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "Fort not found"))
}

/// Create a fort (admin only)
#[utoipa::path(
    post,
    path = "/api/forts",
    request_body = CreateFort,
    responses(
        (status = 201, description = "Fort created", body = FortRow),
        (status = 400, description = "A fort with this name already exists"),
        (status = 401, description = "Missing or non-admin token"),
    ),
    security(("bearer" = [])),
    tag = "forts"
)]
pub(crate) async fn create_fort(
    State(state): State<AppState>,
    _admin: AdminBearer,
    Json(mut input): Json<CreateFort>,
) -> Result<impl IntoResponse, ApiError> {
    if input.image_url.as_deref().unwrap_or("").is_empty() {
        input.image_url = Some(images::search_image(&input.name).to_string());
    }

    let fort = state
        .db
        .create_fort(input)
        .map_err(|e| {
            tracing::error!("failed to create fort: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
        })?
        .ok_or_else(|| {
            error_response(StatusCode::BAD_REQUEST, "Fort with this name already exists")
        })?;

    Ok((StatusCode::CREATED, Json(fort)))
}

/// Update a fort (admin only)
#[utoipa::path(
    put,
    path = "/api/forts/{id}",
    params(("id" = Uuid, Path, description = "Fort id")),
    request_body = UpdateFort,
    responses(
        (status = 200, description = "Updated fort", body = FortRow),
        (status = 401, description = "Missing or non-admin token"),
        (status = 404, description = "No fort with this id"),
    ),
    security(("bearer" = [])),
    tag = "forts"
)]
pub(crate) async fn update_fort(
    State(state): State<AppState>,
    _admin: AdminBearer,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdateFort>,
) -> Result<Json<FortRow>, ApiError> {
    state
        .db
        .update_fort(id, update)
        .map(Json)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "Fort not found"))
}

/// Delete a fort (admin only)
#[utoipa::path(
    delete,
    path = "/api/forts/{id}",
    params(("id" = Uuid, Path, description = "Fort id")),
    responses(
        (status = 200, description = "Fort deleted", body = DeleteResponse),
        (status = 401, description = "Missing or non-admin token"),
        (status = 404, description = "No fort with this id"),
    ),
    security(("bearer" = [])),
    tag = "forts"
)]
pub(crate) async fn delete_fort(
    State(state): State<AppState>,
    _admin: AdminBearer,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if state.db.delete_fort(id) {
        Ok(Json(DeleteResponse {
            message: "Fort deleted successfully".to_string(),
        }))
    } else {
        Err(error_response(StatusCode::NOT_FOUND, "Fort not found"))
    }
}

/// Seed the catalogue with the starter dataset.
///
/// Idempotent: existing forts are updated in place, keeping any image URL
/// already on record. Per-item failures are collected and reported, not
/// aborted on.
#[utoipa::path(
    post,
    path = "/api/forts/seed",
    responses(
        (status = 200, description = "Seeding result", body = SeedResponse),
    ),
    tag = "forts"
)]
pub(crate) async fn seed_forts(State(state): State<AppState>) -> Json<SeedResponse> {
    tracing::info!("seeding fort catalogue");

    let mut success_count = 0;
    let mut errors = Vec::new();

    for fort in seed::INITIAL_FORTS {
        let image_url = images::search_image(fort.name).to_string();
        let input = CreateFort {
            name: fort.name.to_string(),
            description: fort.description.to_string(),
            location: fort.location.to_string(),
            district: fort.district.to_string(),
            history: fort.history.to_string(),
            image_url: Some(image_url),
        };

        match state.db.upsert_fort_by_name(input) {
            Ok(row) => {
                tracing::debug!(name = %row.name, "seeded fort");
                success_count += 1;
            }
            Err(e) => {
                tracing::error!(name = fort.name, "failed to seed fort: {}", e);
                errors.push(SeedItemError {
                    name: fort.name.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    let error_count = errors.len();
    tracing::info!(
        "fort seeding completed: {} seeded, {} errors",
        success_count,
        error_count
    );

    Json(SeedResponse {
        success: true,
        message: format!(
            "Forts data seeded successfully. Processed: {}, Errors: {}",
            success_count, error_count
        ),
        count: success_count,
        error_details: (!errors.is_empty()).then_some(errors),
    })
}
