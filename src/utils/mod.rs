pub mod error;
pub mod serializer;
