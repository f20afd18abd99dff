use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::models::rooms::{NewRoom, Room, RoomPatch};

pub mod memory;
pub mod mongo;

pub use memory::InMemoryRoomStore;
pub use mongo::MongoRoomStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("invalid room id: {0}")]
    InvalidId(String),

    #[error("database error: {0}")]
    Database(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// Persistence operations behind the room routes.
///
/// Lookups by id return `Ok(None)` when no room matches; an id that is not a
/// valid object id fails with [`StoreError::InvalidId`] instead.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Validates the payload, assigns an id and persists the room.
    async fn create(&self, room: NewRoom) -> Result<Room, StoreError>;

    /// All rooms in creation order.
    async fn find_all(&self) -> Result<Vec<Room>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, StoreError>;

    /// Validates the patch, merges it and returns the room as it is after
    /// the update.
    async fn find_by_id_and_update(
        &self,
        id: &str,
        patch: RoomPatch,
    ) -> Result<Option<Room>, StoreError>;

    /// Removes the room and returns what was stored.
    async fn find_by_id_and_delete(&self, id: &str) -> Result<Option<Room>, StoreError>;
}

pub fn parse_room_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_room_id() {
        let id = ObjectId::new();
        assert_eq!(parse_room_id(&id.to_hex()).unwrap(), id);

        assert!(matches!(
            parse_room_id("not-an-id"),
            Err(StoreError::InvalidId(raw)) if raw == "not-an-id"
        ));
        assert!(parse_room_id("").is_err());
    }
}
