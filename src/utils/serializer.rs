use mongodb::bson::oid::ObjectId;
use serde::Serializer;

/// Renders an object id as its 24-character hex form instead of `{"$oid": ...}`.
pub fn serialize_option_object_id<S>(
    id: &Option<ObjectId>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => serializer.serialize_str(&id.to_hex()),
        None => serializer.serialize_none(),
    }
}
