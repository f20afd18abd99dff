use std::sync::Arc;

use axum::Router;
use rooms::room_router;

use crate::store::RoomStore;

pub mod rooms;

/// Dependencies shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<dyn RoomStore>,
}

impl AppState {
    pub fn new(rooms: Arc<dyn RoomStore>) -> Self {
        Self { rooms }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new().merge(room_router()).with_state(state)
}
