use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use super::schemas::DeleteRoomResponse;
use crate::models::rooms::{NewRoom, Room, RoomPatch};
use crate::routes::AppState;
use crate::utils::error::AppError;

/// POST /rooms
#[instrument(name = "create_room", skip_all)]
pub async fn create_room(
    State(state): State<AppState>,
    payload: Result<Json<NewRoom>, JsonRejection>,
) -> Result<(StatusCode, Json<Room>), AppError> {
    let Json(room) = payload?;
    let room = state
        .rooms
        .create(room)
        .await
        .map_err(|e| AppError::from_store(e, "Failed to create room"))?;

    info!(room_id = ?room.id, name = %room.name, "Room created");
    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /rooms
#[instrument(name = "get_rooms", skip_all)]
pub async fn get_rooms(State(state): State<AppState>) -> Result<Json<Vec<Room>>, AppError> {
    let rooms = state
        .rooms
        .find_all()
        .await
        .map_err(|e| AppError::from_store(e, "Failed to fetch rooms"))?;

    Ok(Json(rooms))
}

/// GET /rooms/:id
#[instrument(name = "get_room", skip_all, fields(room_id = %id))]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Room>, AppError> {
    state
        .rooms
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::from_store(e, "Failed to fetch room"))?
        .map(Json)
        .ok_or_else(AppError::not_found)
}

/// PUT or PATCH /rooms/:id
#[instrument(name = "update_room", skip_all, fields(room_id = %id))]
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RoomPatch>, JsonRejection>,
) -> Result<Json<Room>, AppError> {
    let Json(patch) = payload?;
    let room = state
        .rooms
        .find_by_id_and_update(&id, patch)
        .await
        .map_err(|e| AppError::from_store(e, "Failed to update room"))?
        .ok_or_else(AppError::not_found)?;

    info!("Room updated");
    Ok(Json(room))
}

/// DELETE /rooms/:id
#[instrument(name = "delete_room", skip_all, fields(room_id = %id))]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteRoomResponse>, AppError> {
    state
        .rooms
        .find_by_id_and_delete(&id)
        .await
        .map_err(|e| AppError::from_store(e, "Failed to delete room"))?
        .ok_or_else(AppError::not_found)?;

    info!("Room deleted");
    Ok(Json(DeleteRoomResponse::deleted()))
}
