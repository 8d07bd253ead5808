use lrsctl_store::StoreConfig;

/// Required process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string (`MONGODB_URI`).
    pub mongodb_uri: String,
    /// Database name (`MONGODB_DB`).
    pub mongodb_db: String,
    /// Statement collection name (`LRS_COLLECTION`).
    pub collection: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
}

impl Config {
    /// Read configuration from the environment. Any missing variable aborts
    /// startup before a command runs.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            mongodb_uri: require("MONGODB_URI")?,
            mongodb_db: require("MONGODB_DB")?,
            collection: require("LRS_COLLECTION")?,
        })
    }

    /// Connection settings for one store instance.
    pub fn store(&self) -> StoreConfig {
        StoreConfig {
            uri: self.mongodb_uri.clone(),
            database: self.mongodb_db.clone(),
            collection: self.collection.clone(),
        }
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_names_the_variable() {
        let err = ConfigError::Missing("MONGODB_URI");
        assert!(err.to_string().contains("MONGODB_URI"));
    }
}
