use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tracing::{debug, instrument};

use super::{parse_room_id, RoomStore, StoreError};
use crate::models::rooms::{NewRoom, Room, RoomPatch};

/// Process-local room store for development and tests.
///
/// Rooms live in insertion order and are lost when the process exits.
#[derive(Default)]
pub struct InMemoryRoomStore {
    rooms: Mutex<Vec<Room>>,
}

impl InMemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Room>> {
        self.rooms.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn position(rooms: &[Room], id: ObjectId) -> Option<usize> {
    rooms.iter().position(|room| room.id == Some(id))
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    #[instrument(skip(self, room))]
    async fn create(&self, room: NewRoom) -> Result<Room, StoreError> {
        let mut room = room.into_room(Utc::now())?;
        room.id = Some(ObjectId::new());

        debug!(name = %room.name, status = %room.status, "Creating room in memory");
        self.lock().push(room.clone());
        Ok(room)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Room>, StoreError> {
        let rooms = self.lock().clone();
        debug!(room_count = rooms.len(), "Listing rooms from memory");
        Ok(rooms)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, StoreError> {
        let id = parse_room_id(id)?;
        let rooms = self.lock();
        Ok(position(&rooms, id).map(|i| rooms[i].clone()))
    }

    #[instrument(skip(self, patch))]
    async fn find_by_id_and_update(
        &self,
        id: &str,
        patch: RoomPatch,
    ) -> Result<Option<Room>, StoreError> {
        let id = parse_room_id(id)?;
        let patch = patch.normalized()?;

        let mut rooms = self.lock();
        let Some(i) = position(&rooms, id) else {
            debug!("Room not found for update in memory");
            return Ok(None);
        };
        patch.apply_to(&mut rooms[i], Utc::now());
        Ok(Some(rooms[i].clone()))
    }

    #[instrument(skip(self))]
    async fn find_by_id_and_delete(&self, id: &str) -> Result<Option<Room>, StoreError> {
        let id = parse_room_id(id)?;
        let mut rooms = self.lock();
        Ok(position(&rooms, id).map(|i| rooms.remove(i)))
    }
}
