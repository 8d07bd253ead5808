use crate::config::Config;
use crate::handlers::prompt;
use anyhow::{Context, Result};
use bson::{doc, oid::ObjectId, Bson};
use lrsctl_store::StatementStore;
use serde_json::Value;
use std::path::Path;

/// `check-health`: storage size and document count, one `collStats` call.
pub async fn check_health(config: &Config) -> Result<()> {
    let store = StatementStore::connect(&config.store()).await?;
    let result = store.stats_summary().await;
    store.disconnect().await;
    let stats = result?;

    println!("Statement store is reachable");
    println!("  collection: {}.{}", config.mongodb_db, config.collection);
    println!("  documents: {}", stats.document_count);
    println!("  storage size: {} bytes", stats.storage_size_bytes);
    Ok(())
}

/// `reset-db`: unconditional delete of every statement, behind a
/// default-no confirmation. Cancelling never touches the store.
pub async fn reset(config: &Config, skip_confirmation: bool) -> Result<()> {
    let confirmed = skip_confirmation
        || prompt::confirm("This will delete ALL statements in the collection. Continue?")?;

    if !confirmed {
        println!("Reset cancelled");
        return Ok(());
    }

    let store = StatementStore::connect(&config.store()).await?;
    let result = store.delete_all().await;
    store.disconnect().await;

    println!("Deleted {} statement(s)", result?);
    Ok(())
}

/// `set-statement-authority`: patch one statement's authority field by id.
///
/// Zero matches is reported as a success with a count of 0; whether that was
/// expected is the operator's call.
pub async fn set_authority(config: &Config, id: &str, authority: &str) -> Result<()> {
    let authority: Value =
        serde_json::from_str(authority).context("authority argument is not valid JSON")?;
    let authority = bson::to_bson(&authority).context("authority could not be encoded as BSON")?;

    // Imported statements may carry either an ObjectId or a string _id.
    let id_value = match ObjectId::parse_str(id) {
        Ok(oid) => Bson::ObjectId(oid),
        Err(_) => Bson::String(id.to_string()),
    };

    let store = StatementStore::connect(&config.store()).await?;
    let result = store
        .update_one(doc! { "_id": id_value }, doc! { "$set": { "authority": authority } })
        .await;
    store.disconnect().await;

    println!("Authority updated ({} statement matched)", result?);
    Ok(())
}

/// `backup`: shell out to mongodump with an argument array. Paths and the
/// connection string are never concatenated into a shell command line.
pub async fn backup(config: &Config, dir: &Path) -> Result<()> {
    let status = tokio::process::Command::new("mongodump")
        .arg("--uri")
        .arg(&config.mongodb_uri)
        .arg("--db")
        .arg(&config.mongodb_db)
        .arg("--out")
        .arg(dir)
        .status()
        .await
        .context("failed to run mongodump; is it installed?")?;

    if !status.success() {
        anyhow::bail!("mongodump exited with {}", status);
    }
    println!("Backup written to {}", dir.display());
    Ok(())
}

/// `restore`: shell out to mongorestore with an argument array.
pub async fn restore(config: &Config, dir: &Path) -> Result<()> {
    let status = tokio::process::Command::new("mongorestore")
        .arg("--uri")
        .arg(&config.mongodb_uri)
        .arg("--nsInclude")
        .arg(format!("{}.*", config.mongodb_db))
        .arg("--dir")
        .arg(dir)
        .status()
        .await
        .context("failed to run mongorestore; is it installed?")?;

    if !status.success() {
        anyhow::bail!("mongorestore exited with {}", status);
    }
    println!("Restored from {}", dir.display());
    Ok(())
}
