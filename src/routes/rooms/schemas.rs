use serde::{Deserialize, Serialize};

pub const ROOM_DELETED: &str = "Room deleted successfully";

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteRoomResponse {
    pub message: String,
}

impl DeleteRoomResponse {
    pub fn deleted() -> Self {
        Self {
            message: ROOM_DELETED.to_string(),
        }
    }
}
