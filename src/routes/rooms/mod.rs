use axum::{routing::get, Router};

use super::AppState;

mod handlers;
mod schemas;

pub fn room_router() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::get_rooms).post(handlers::create_room))
        .route(
            "/rooms/:id",
            get(handlers::get_room)
                .put(handlers::update_room)
                .patch(handlers::update_room)
                .delete(handlers::delete_room),
        )
}
