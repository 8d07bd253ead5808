use crate::config::Config;
use crate::output;
use anyhow::Result;
use bson::doc;
use lrsctl_store::StatementStore;

/// `listVerbs` / `listActors` / `list-object-types`: one distinct call on a
/// fixed field path.
pub async fn distinct(config: &Config, field_path: &str, label: &str) -> Result<()> {
    let store = StatementStore::connect(&config.store()).await?;
    let result = store.distinct(field_path).await;
    store.disconnect().await;
    let values = result?;

    if values.is_empty() {
        println!("No {} recorded", label);
        return Ok(());
    }

    println!("{} distinct {}:", values.len(), label);
    for value in &values {
        println!("  {}", output::bson_scalar(value));
    }
    Ok(())
}

/// `list-all-extensions`: distinct extension keys across stored objects.
/// One aggregation: unfold each `object.extensions` map into its keys.
pub async fn extensions(config: &Config) -> Result<()> {
    let pipeline = vec![
        doc! { "$match": { "object.extensions": { "$exists": true } } },
        doc! { "$project": { "kv": { "$objectToArray": "$object.extensions" } } },
        doc! { "$unwind": "$kv" },
        doc! { "$group": { "_id": "$kv.k" } },
        doc! { "$sort": { "_id": 1 } },
    ];

    let store = StatementStore::connect(&config.store()).await?;
    let result = store.aggregate(pipeline).await;
    store.disconnect().await;
    let rows = result?;

    if rows.is_empty() {
        println!("No extensions recorded");
        return Ok(());
    }

    println!("{} distinct extension keys:", rows.len());
    for row in &rows {
        if let Ok(key) = row.get_str("_id") {
            println!("  {}", key);
        }
    }
    Ok(())
}
