use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{self, doc};
use mongodb::options::ReturnDocument;
use mongodb::Collection;
use tracing::{debug, instrument};

use super::{parse_room_id, RoomStore, StoreError};
use crate::databases::mongo::MongoDb;
use crate::models::rooms::{NewRoom, Room, RoomPatch};

const COLLECTION: &str = "rooms";

#[derive(Clone)]
pub struct MongoRoomStore {
    collection: Collection<Room>,
}

impl MongoRoomStore {
    pub fn new(mongo: &MongoDb) -> Self {
        Self {
            collection: mongo.db.collection::<Room>(COLLECTION),
        }
    }
}

fn to_bson<T: serde::Serialize>(value: &T) -> Result<bson::Bson, StoreError> {
    bson::to_bson(value).map_err(|e| StoreError::Database(e.to_string()))
}

#[async_trait]
impl RoomStore for MongoRoomStore {
    #[instrument(skip(self, room))]
    async fn create(&self, room: NewRoom) -> Result<Room, StoreError> {
        let mut room = room.into_room(Utc::now())?;
        let result = self.collection.insert_one(&room).await?;
        room.id = result.inserted_id.as_object_id();

        debug!(room_id = ?room.id, name = %room.name, "Room inserted");
        Ok(room)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Room>, StoreError> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let rooms: Vec<Room> = cursor.try_collect().await?;

        debug!(room_count = rooms.len(), "Rooms fetched");
        Ok(rooms)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, StoreError> {
        let id = parse_room_id(id)?;
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    #[instrument(skip(self, patch))]
    async fn find_by_id_and_update(
        &self,
        id: &str,
        patch: RoomPatch,
    ) -> Result<Option<Room>, StoreError> {
        let id = parse_room_id(id)?;
        let patch = patch.normalized()?;

        let mut set =
            bson::to_document(&patch).map_err(|e| StoreError::Database(e.to_string()))?;
        set.insert("updatedAt", to_bson(&Utc::now())?);
        debug!(fields = ?set.keys().collect::<Vec<_>>(), "Updating room");

        let room = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(room)
    }

    #[instrument(skip(self))]
    async fn find_by_id_and_delete(&self, id: &str) -> Result<Option<Room>, StoreError> {
        let id = parse_room_id(id)?;
        Ok(self.collection.find_one_and_delete(doc! { "_id": id }).await?)
    }
}
