use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::Display;

use crate::store::StoreError;
use crate::utils::serializer::serialize_option_object_id;

const MAX_NAME_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 500;

#[derive(Debug, Clone, Copy, Default, Display, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    #[serde(rename = "_id", serialize_with = "serialize_option_object_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub capacity: u32,
    pub floor: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub status: RoomStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Body of a create request. The store assigns the id and timestamps.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRoom {
    pub name: String,
    pub capacity: u32,
    pub floor: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub status: RoomStatus,
}

/// Partial update. `None` leaves the stored field as it is.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoomPatch {
    pub name: Option<String>,
    pub capacity: Option<u32>,
    pub floor: Option<i32>,
    pub description: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub status: Option<RoomStatus>,
}

/// Collects rule violations so a single response can report all of them.
#[derive(Default)]
struct Violations(Vec<String>);

impl Violations {
    fn check_name(&mut self, name: &str) {
        if name.is_empty() {
            self.0.push("name is required".to_string());
        } else if name.chars().count() > MAX_NAME_LEN {
            self.0
                .push(format!("name must be at most {} characters", MAX_NAME_LEN));
        }
    }

    fn check_capacity(&mut self, capacity: u32) {
        if capacity < 1 {
            self.0.push("capacity must be at least 1".to_string());
        }
    }

    fn check_description(&mut self, description: Option<&str>) {
        if description.is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LEN) {
            self.0.push(format!(
                "description must be at most {} characters",
                MAX_DESCRIPTION_LEN
            ));
        }
    }

    fn check_amenities(&mut self, amenities: &[String]) {
        if amenities.iter().any(|a| a.is_empty()) {
            self.0.push("amenities must not contain empty entries".to_string());
        }
    }

    fn finish(self) -> Result<(), StoreError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation(format!(
                "Room validation failed: {}",
                self.0.join(", ")
            )))
        }
    }
}

fn trim_owned(value: String) -> String {
    value.trim().to_string()
}

fn trim_all(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(trim_owned).collect()
}

impl NewRoom {
    /// Normalizes and validates the payload, producing a room without an id.
    pub fn into_room(self, now: DateTime<Utc>) -> Result<Room, StoreError> {
        let room = Room {
            id: None,
            name: trim_owned(self.name),
            capacity: self.capacity,
            floor: self.floor,
            description: self.description.map(trim_owned),
            amenities: trim_all(self.amenities),
            status: self.status,
            created_at: now,
            updated_at: now,
        };

        let mut violations = Violations::default();
        violations.check_name(&room.name);
        violations.check_capacity(room.capacity);
        violations.check_description(room.description.as_deref());
        violations.check_amenities(&room.amenities);
        violations.finish()?;

        Ok(room)
    }
}

impl RoomPatch {
    /// Trims string fields and validates every field that is present.
    pub fn normalized(self) -> Result<RoomPatch, StoreError> {
        let patch = RoomPatch {
            name: self.name.map(trim_owned),
            capacity: self.capacity,
            floor: self.floor,
            description: self.description.map(trim_owned),
            amenities: self.amenities.map(trim_all),
            status: self.status,
        };

        let mut violations = Violations::default();
        if let Some(name) = &patch.name {
            violations.check_name(name);
        }
        if let Some(capacity) = patch.capacity {
            violations.check_capacity(capacity);
        }
        violations.check_description(patch.description.as_deref());
        if let Some(amenities) = &patch.amenities {
            violations.check_amenities(amenities);
        }
        violations.finish()?;

        Ok(patch)
    }

    pub fn apply_to(self, room: &mut Room, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            room.name = name;
        }
        if let Some(capacity) = self.capacity {
            room.capacity = capacity;
        }
        if let Some(floor) = self.floor {
            room.floor = Some(floor);
        }
        if let Some(description) = self.description {
            room.description = Some(description);
        }
        if let Some(amenities) = self.amenities {
            room.amenities = amenities;
        }
        if let Some(status) = self.status {
            room.status = status;
        }
        room.updated_at = now;
    }
}
