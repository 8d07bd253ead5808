//! Text-rendered views of stored data. Each view is one aggregation; chart
//! drawing stays in the terminal, with no graphical rendering.

use crate::config::Config;
use crate::output;
use anyhow::Result;
use bson::{doc, Document};
use lrsctl_store::StatementStore;

/// `visualizeData`: statement volume per activity as a bar chart.
pub async fn activity_volume(config: &Config) -> Result<()> {
    let pipeline = vec![
        doc! { "$group": { "_id": "$object.name", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
    ];

    let rows = run(config, pipeline).await?;
    if rows.is_empty() {
        println!("No statements recorded");
        return Ok(());
    }

    println!("Statement volume by activity:");
    print!("{}", output::bar_chart(&count_rows(&rows, "<unnamed>")));
    Ok(())
}

/// `visualize-verb-usage`: verb usage counts as a bar chart.
pub async fn verb_usage(config: &Config) -> Result<()> {
    let pipeline = vec![
        doc! { "$group": { "_id": "$verb.id", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
    ];

    let rows = run(config, pipeline).await?;
    if rows.is_empty() {
        println!("No statements recorded");
        return Ok(());
    }

    println!("Verb usage:");
    print!("{}", output::bar_chart(&count_rows(&rows, "<no verb>")));
    Ok(())
}

/// `visualize-actor-progress`: one actor's scaled scores in timestamp order.
pub async fn actor_progress(config: &Config, actor: &str) -> Result<()> {
    let pipeline = vec![
        doc! { "$match": {
            "actor.name": actor,
            "result.score.scaled": { "$exists": true },
        } },
        doc! { "$sort": { "timestamp": 1 } },
        doc! { "$project": {
            "_id": 0,
            "timestamp": 1,
            "activity": "$object.name",
            "score": "$result.score.scaled",
        } },
    ];

    let rows = run(config, pipeline).await?;
    if rows.is_empty() {
        println!("No scored statements recorded for '{}'", actor);
        return Ok(());
    }

    println!("Progress for '{}':", actor);
    let scaled: Vec<(String, i64)> = rows
        .iter()
        .map(|row| {
            let when = row.get_str("timestamp").unwrap_or("<no timestamp>");
            let activity = row.get_str("activity").unwrap_or("<unnamed>");
            let score = row.get_f64("score").unwrap_or(0.0);
            // Scores live in [-1, 1] by convention; chart the percentage.
            (format!("{} {}", when, activity), (score * 100.0).round() as i64)
        })
        .collect();
    print!("{}", output::bar_chart(&scaled));
    println!("(bar lengths are scaled scores x100)");
    Ok(())
}

async fn run(config: &Config, pipeline: Vec<Document>) -> Result<Vec<Document>> {
    let store = StatementStore::connect(&config.store()).await?;
    let result = store.aggregate(pipeline).await;
    store.disconnect().await;
    Ok(result?)
}

fn count_rows(rows: &[Document], fallback: &str) -> Vec<(String, i64)> {
    rows.iter()
        .map(|row| {
            let label = row.get_str("_id").unwrap_or(fallback).to_string();
            let count = row
                .get_i64("count")
                .or_else(|_| row.get_i32("count").map(i64::from))
                .unwrap_or(0);
            (label, count)
        })
        .collect()
}
