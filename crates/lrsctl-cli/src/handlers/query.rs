use crate::config::Config;
use crate::output;
use anyhow::{Context, Result};
use bson::{doc, Document};
use lrsctl_store::StatementStore;
use serde_json::Value;

/// `query`: find with a verbatim filter given as JSON on the command line.
pub async fn handle(config: &Config, filter: &str) -> Result<()> {
    let filter: Value = serde_json::from_str(filter).context("filter argument is not valid JSON")?;
    let filter = bson::to_document(&filter).context("filter must be a JSON object")?;

    let docs = find(config, filter).await?;
    output::print_documents(&docs)?;
    println!("{} statement(s) matched", docs.len());
    Ok(())
}

/// `search-statements`: equality match on one field path.
pub async fn search(config: &Config, field: &str, value: &str) -> Result<()> {
    let docs = find(config, doc! { field: value }).await?;
    output::print_documents(&docs)?;
    println!("{} statement(s) matched", docs.len());
    Ok(())
}

/// `get-statements-by-duration`: range match on the ISO-8601 duration field.
/// ISO-8601 durations of the same unit order compare lexically, which is the
/// comparison the store applies to strings.
pub async fn by_duration(config: &Config, min: &str, max: &str) -> Result<()> {
    let docs = find(config, doc! { "duration": { "$gte": min, "$lte": max } }).await?;
    output::print_documents(&docs)?;
    println!("{} statement(s) in range", docs.len());
    Ok(())
}

/// `check-profile`: every statement for one actor mbox, with a verb summary.
pub async fn check_profile(config: &Config, mbox: &str) -> Result<()> {
    let docs = find(config, doc! { "actor.mbox": mbox }).await?;

    if docs.is_empty() {
        println!("No statements recorded for {}", mbox);
        return Ok(());
    }

    println!("Profile for {}: {} statement(s)", mbox, docs.len());
    for doc in &docs {
        let verb = doc
            .get_document("verb")
            .ok()
            .and_then(|v| v.get_str("id").ok())
            .unwrap_or("<no verb>");
        let when = doc.get_str("timestamp").unwrap_or("<no timestamp>");
        println!("  {}  {}", when, verb);
    }
    Ok(())
}

async fn find(config: &Config, filter: Document) -> Result<Vec<Document>> {
    let store = StatementStore::connect(&config.store()).await?;
    let result = store.find(filter).await;
    store.disconnect().await;
    Ok(result?)
}
