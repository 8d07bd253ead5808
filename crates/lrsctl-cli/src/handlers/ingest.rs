use crate::config::Config;
use anyhow::{Context, Result};
use lrsctl_store::StatementStore;
use lrsctl_types::partition_storable;
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// `bulkImport` / `import-statements`: read a JSON array of statements from a
/// file and store the storable subset. `strip_ids` drops `_id` fields so a
/// previously exported file can be re-imported without key collisions.
pub async fn from_file(config: &Config, path: &Path, strip_ids: bool) -> Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    ingest(config, &raw, strip_ids).await
}

/// `bulk-store`: same semantics, array given inline on the command line.
pub async fn inline(config: &Config, statements: &str) -> Result<()> {
    ingest(config, statements, false).await
}

/// Filter-on-failure bulk ingestion: invalid records are dropped (each one
/// logged with its violations), the batch proceeds if at least one record
/// survives, and fails only when zero survive.
async fn ingest(config: &Config, raw: &str, strip_ids: bool) -> Result<()> {
    let parsed: Value = serde_json::from_str(raw).context("input is not valid JSON")?;
    let records = match parsed {
        Value::Array(records) => records,
        _ => anyhow::bail!("input must be a JSON array of statements"),
    };

    let total = records.len();
    let (storable, rejected) = partition_storable(records);

    for (record, report) in &rejected {
        let summary: Vec<String> = report.errors.iter().map(|v| v.to_string()).collect();
        warn!(
            record = %record,
            "dropping statement from batch: {}",
            summary.join("; ")
        );
    }

    if storable.is_empty() {
        anyhow::bail!(
            "no storable statements in batch of {} ({} rejected by validation)",
            total,
            rejected.len()
        );
    }

    let mut documents = Vec::with_capacity(storable.len());
    for record in &storable {
        let mut doc = bson::to_document(record).context("statement could not be encoded as BSON")?;
        if strip_ids {
            doc.remove("_id");
        }
        documents.push(doc);
    }

    let store = StatementStore::connect(&config.store()).await?;
    let result = store.insert_many(documents).await;
    store.disconnect().await;

    let inserted = result?;
    println!(
        "Stored {} of {} statements ({} rejected by validation)",
        inserted,
        total,
        rejected.len()
    );
    Ok(())
}
