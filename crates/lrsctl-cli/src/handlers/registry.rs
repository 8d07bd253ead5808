//! Vocabulary registration. Registration documents live in the statement
//! collection with a `registrationType` discriminator.

use crate::config::Config;
use anyhow::{Context, Result};
use bson::doc;
use lrsctl_store::StatementStore;
use serde_json::Value;

/// `register-verb`: store a verb registration with its display map.
pub async fn verb(config: &Config, id: &str, display: &str) -> Result<()> {
    let display: Value =
        serde_json::from_str(display).context("display argument is not valid JSON")?;
    if !display.is_object() {
        anyhow::bail!("display must be a JSON object mapping language tags to text");
    }
    let display = bson::to_bson(&display)?;

    let document = doc! {
        "registrationType": "verb",
        "id": id,
        "display": display,
    };

    let store = StatementStore::connect(&config.store()).await?;
    let result = store.insert_one(document).await;
    store.disconnect().await;
    result?;

    println!("Registered verb {}", id);
    Ok(())
}

/// `register-activity-type`: store an activity-type registration.
pub async fn activity_type(config: &Config, id: &str, name: &str) -> Result<()> {
    let document = doc! {
        "registrationType": "activityType",
        "id": id,
        "name": name,
    };

    let store = StatementStore::connect(&config.store()).await?;
    let result = store.insert_one(document).await;
    store.disconnect().await;
    result?;

    println!("Registered activity type {}", id);
    Ok(())
}
