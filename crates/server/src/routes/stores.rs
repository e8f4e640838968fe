use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use models::store::NewStore;
use tracing::{info, warn};

use crate::{dto::StoreDto, errors::ApiError, state::ServerState};

/// Base path the store routes are nested under.
pub const BASE_PATH: &str = "/api/store";

/// Missing or malformed JSON is a bare 400; anything else (oversized body,
/// broken stream) keeps the status axum assigns it.
fn reject_body(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::MissingJsonContentType(_) => {
            warn!(error = %rejection.body_text(), "store payload rejected");
            ApiError::BadRequest(None)
        }
        other => {
            warn!(status = %other.status(), error = %other.body_text(), "store payload unreadable");
            ApiError::Rejected(other)
        }
    }
}

#[utoipa::path(
    get, path = "/api/store/all", tag = "store",
    responses(
        (status = 200, description = "All stores", body = [crate::openapi::StoreDtoDoc]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<StoreDto>>, ApiError> {
    let stores = state.stores.list().await?;
    Ok(Json(stores.into_iter().map(StoreDto::from).collect()))
}

#[utoipa::path(
    get, path = "/api/store/{id}", tag = "store",
    params(("id" = i32, Path, description = "Store id")),
    responses(
        (status = 200, description = "Store found", body = crate::openapi::StoreDtoDoc),
        (status = 400, description = "Id must be positive"),
        (status = 404, description = "No store with this id"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<StoreDto>, ApiError> {
    if id <= 0 {
        return Err(ApiError::BadRequest(None));
    }
    match state.stores.get_by_id(id).await? {
        Some(store) => Ok(Json(store.into())),
        None => Err(ApiError::NotFound(Some(format!("The store with id {id} not found")))),
    }
}

#[utoipa::path(
    post, path = "/api/store/add", tag = "store",
    request_body = crate::openapi::StoreDtoDoc,
    responses(
        (status = 201, description = "Created; Location points at the new store", body = crate::openapi::StoreDtoDoc),
        (status = 400, description = "Missing or invalid body"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<StoreDto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(mut dto) = payload.map_err(reject_body)?;

    let created = state.stores.create(NewStore::from(dto.clone())).await?;
    dto.id = created.id;

    let location = format!("{BASE_PATH}/{}", dto.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dto)))
}

#[utoipa::path(
    put, path = "/api/store/update", tag = "store",
    request_body = crate::openapi::StoreDtoDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StoreDtoDoc),
        (status = 400, description = "Missing or invalid body"),
        (status = 404, description = "No store with this id"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    payload: Result<Json<StoreDto>, JsonRejection>,
) -> Result<Json<StoreDto>, ApiError> {
    let Json(dto) = payload.map_err(reject_body)?;
    let updated = state.stores.update(dto.into()).await?;
    Ok(Json(updated.into()))
}

// Missing store answers 400 here, unlike the 404 from GET.
#[utoipa::path(
    delete, path = "/api/store/{id}/delete", tag = "store",
    params(("id" = i32, Path, description = "Store id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Id must be positive, or no store with this id"),
        (status = 404, description = "Store vanished before it could be deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if id <= 0 {
        return Err(ApiError::BadRequest(None));
    }
    if state.stores.get_by_id(id).await?.is_none() {
        return Err(ApiError::BadRequest(Some(format!("The store with Id {id} not found"))));
    }
    if !state.stores.delete(id).await? {
        info!(id, "store disappeared before delete");
        return Err(ApiError::NotFound(None));
    }
    Ok(StatusCode::NO_CONTENT)
}
