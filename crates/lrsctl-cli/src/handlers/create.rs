use crate::config::Config;
use anyhow::{Context, Result};
use lrsctl_store::StatementStore;
use lrsctl_types::validate;
use serde_json::Value;

/// `create`: parse, validate (reject on any violation), store one statement.
pub async fn handle(config: &Config, statement: &str) -> Result<()> {
    let record: Value =
        serde_json::from_str(statement).context("statement argument is not valid JSON")?;

    let report = validate(&record);
    if !report.valid {
        println!("Statement rejected ({} violations):", report.errors.len());
        for violation in &report.errors {
            println!("  - {}", violation);
        }
        anyhow::bail!("statement failed validation with {} violation(s)", report.errors.len());
    }

    let document = bson::to_document(&record).context("statement could not be encoded as BSON")?;

    let store = StatementStore::connect(&config.store()).await?;
    let result = store.insert_one(document).await;
    store.disconnect().await;

    let inserted = result?;
    println!("Stored {} statement", inserted);
    Ok(())
}
