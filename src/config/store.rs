use std::env;

use crate::error::AppError;

/// Which persistence backend to run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Mongo,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub mongo_uri: String,
    pub mongo_db: String,
}

impl StoreConfig {
    /// Reads the store configuration from the environment.
    ///
    /// `STORE_KIND` selects the backend (`memory` or `mongo`, default
    /// `memory`). `MONGODB_URI` and `MONGODB_DB` are only consulted when
    /// the mongo backend is selected.
    pub fn from_env() -> Result<Self, AppError> {
        let kind = match env::var("STORE_KIND").as_deref() {
            Ok("mongo") => StoreKind::Mongo,
            Ok("memory") | Err(_) => StoreKind::Memory,
            Ok(other) => {
                return Err(AppError::config(format!(
                    "unsupported STORE_KIND '{other}' (expected 'memory' or 'mongo')"
                )))
            }
        };
        let mongo_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let mongo_db = env::var("MONGODB_DB").unwrap_or_else(|_| "sketchline".to_string());
        Ok(Self {
            kind,
            mongo_uri,
            mongo_db,
        })
    }
}
