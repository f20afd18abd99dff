use mongodb::bson::doc;
use mongodb::{Client, Database};
use tracing::info;

use crate::config::Config;

pub struct MongoDb {
    pub client: Client,
    pub db: Database,
}

impl MongoDb {
    /// Connects to the configured deployment and pings it so a bad URI
    /// fails at start-up rather than on the first request.
    pub async fn connect(config: &Config) -> Result<Self, mongodb::error::Error> {
        let uri = config.mongodb_uri.as_deref().unwrap_or_default();
        info!(database = %config.mongodb_database, "Connecting to MongoDB");

        let client = Client::with_uri_str(uri).await?;
        let db = client.database(&config.mongodb_database);
        db.run_command(doc! { "ping": 1 }).await?;

        info!("Connected to MongoDB");
        Ok(MongoDb { client, db })
    }
}
