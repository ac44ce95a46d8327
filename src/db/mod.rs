use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::{config::Config, errors::AppResult};

const APP_NAME: &str = "quizzotic-server";
const MAX_POOL_SIZE: u32 = 10;
const MIN_POOL_SIZE: u32 = 2;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Pooled MongoDB handle shared by the repositories.
#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let options = Self::client_options(&config.mongo_conn_string).await?;
        let database = Self {
            client: Client::with_options(options)?,
            db_name: config.mongo_db_name.clone(),
        };

        database.ping().await?;
        log::info!("Connected to MongoDB database '{}'", database.db_name);

        Ok(database)
    }

    async fn client_options(conn_string: &str) -> AppResult<ClientOptions> {
        let mut options = ClientOptions::parse(conn_string).await?;

        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        options.app_name = Some(APP_NAME.to_string());
        options.max_pool_size = Some(MAX_POOL_SIZE);
        options.min_pool_size = Some(MIN_POOL_SIZE);
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);

        Ok(options)
    }

    async fn ping(&self) -> AppResult<()> {
        self.client
            .database(&self.db_name)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client
            .database(&self.db_name)
            .collection(collection_name)
    }

    /// Pings the configured database and describes the result for the health
    /// endpoint.
    pub async fn health_check(&self) -> AppResult<String> {
        self.ping().await.inspect_err(|e| {
            log::error!("MongoDB health check failed: {}", e);
        })?;

        Ok(healthy_status(&self.db_name))
    }
}

fn healthy_status(db_name: &str) -> String {
    format!("database '{}' is reachable", db_name)
}
