//! Aggregation-backed report commands. Each report is exactly one pipeline
//! round trip; anything that looks multi-step is folded into pipeline stages.

use crate::config::Config;
use crate::output;
use anyhow::{Context, Result};
use bson::{doc, Document};
use lrsctl_store::StatementStore;
use serde_json::Value;

/// `aggregate`: run a caller-supplied pipeline verbatim.
pub async fn aggregate(config: &Config, pipeline: &str) -> Result<()> {
    let parsed: Value =
        serde_json::from_str(pipeline).context("pipeline argument is not valid JSON")?;
    let stages = match parsed {
        Value::Array(stages) => stages,
        _ => anyhow::bail!("pipeline must be a JSON array of stages"),
    };

    let mut pipeline = Vec::with_capacity(stages.len());
    for stage in &stages {
        pipeline.push(bson::to_document(stage).context("each pipeline stage must be an object")?);
    }

    let rows = run(config, pipeline).await?;
    output::print_documents(&rows)?;
    Ok(())
}

/// `lrsStats`: statement total plus distinct actor and verb counts, one
/// `$group`/`$addToSet` pipeline.
pub async fn lrs_stats(config: &Config) -> Result<()> {
    let pipeline = vec![
        doc! { "$group": {
            "_id": null,
            "total": { "$sum": 1 },
            "actors": { "$addToSet": "$actor.name" },
            "verbs": { "$addToSet": "$verb.id" },
        } },
        doc! { "$project": {
            "_id": 0,
            "total": 1,
            "actor_count": { "$size": "$actors" },
            "verb_count": { "$size": "$verbs" },
        } },
    ];

    let rows = run(config, pipeline).await?;
    match rows.first() {
        None => println!("The store is empty"),
        Some(row) => {
            println!("LRS statistics:");
            println!("  statements: {}", get_i64(row, "total"));
            println!("  distinct actors: {}", get_i64(row, "actor_count"));
            println!("  distinct verbs: {}", get_i64(row, "verb_count"));
        }
    }
    Ok(())
}

/// `groupByDate`: statement counts per calendar date. Timestamps are stored
/// as ISO-8601 strings, so the date is their first ten bytes.
pub async fn group_by_date(config: &Config) -> Result<()> {
    let pipeline = vec![
        doc! { "$match": { "timestamp": { "$type": "string" } } },
        doc! { "$group": {
            "_id": { "$substrBytes": ["$timestamp", 0, 10] },
            "count": { "$sum": 1 },
        } },
        doc! { "$sort": { "_id": 1 } },
    ];

    let rows = run(config, pipeline).await?;
    if rows.is_empty() {
        println!("No dated statements recorded");
        return Ok(());
    }

    println!("Statements by date:");
    for row in &rows {
        println!("  {}  {}", row.get_str("_id").unwrap_or("?"), get_i64(row, "count"));
    }
    Ok(())
}

/// `analyzeActivity`: verb breakdown for one activity name.
pub async fn analyze_activity(config: &Config, activity: &str) -> Result<()> {
    let pipeline = vec![
        doc! { "$match": { "object.name": activity } },
        doc! { "$group": { "_id": "$verb.id", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
    ];

    let rows = run(config, pipeline).await?;
    if rows.is_empty() {
        println!("No statements recorded for activity '{}'", activity);
        return Ok(());
    }

    println!("Activity '{}':", activity);
    for row in &rows {
        println!("  {}  {}", row.get_str("_id").unwrap_or("?"), get_i64(row, "count"));
    }
    Ok(())
}

/// `avgScoreByActivity`: mean scaled score per activity, best first.
pub async fn avg_score_by_activity(config: &Config) -> Result<()> {
    let pipeline = vec![
        doc! { "$match": { "result.score.scaled": { "$exists": true } } },
        doc! { "$group": {
            "_id": "$object.name",
            "avg_score": { "$avg": "$result.score.scaled" },
            "attempts": { "$sum": 1 },
        } },
        doc! { "$sort": { "avg_score": -1 } },
    ];

    let rows = run(config, pipeline).await?;
    if rows.is_empty() {
        println!("No scored statements recorded");
        return Ok(());
    }

    println!("Average scaled score by activity:");
    for row in &rows {
        println!(
            "  {:.3}  {} ({} attempt(s))",
            row.get_f64("avg_score").unwrap_or(0.0),
            row.get_str("_id").unwrap_or("<unnamed>"),
            get_i64(row, "attempts"),
        );
    }
    Ok(())
}

/// `most-active-actors`: actors ranked by statement count.
pub async fn most_active_actors(config: &Config, limit: i64) -> Result<()> {
    let pipeline = vec![
        doc! { "$group": { "_id": "$actor.name", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
        doc! { "$limit": limit.max(1) },
    ];

    let rows = run(config, pipeline).await?;
    if rows.is_empty() {
        println!("No statements recorded");
        return Ok(());
    }

    println!("Most active actors:");
    for (rank, row) in rows.iter().enumerate() {
        println!(
            "  {}. {}  ({} statement(s))",
            rank + 1,
            row.get_str("_id").unwrap_or("<unnamed>"),
            get_i64(row, "count"),
        );
    }
    Ok(())
}

async fn run(config: &Config, pipeline: Vec<Document>) -> Result<Vec<Document>> {
    let store = StatementStore::connect(&config.store()).await?;
    let result = store.aggregate(pipeline).await;
    store.disconnect().await;
    Ok(result?)
}

// $sum produces int32 or int64 depending on volume.
fn get_i64(row: &Document, key: &str) -> i64 {
    row.get_i64(key)
        .or_else(|_| row.get_i32(key).map(i64::from))
        .unwrap_or(0)
}
