use crate::args::ExportFormat;
use crate::config::Config;
use crate::output;
use anyhow::{Context, Result};
use bson::doc;
use lrsctl_store::StatementStore;

const CSV_FILE: &str = "exported_statements.csv";
const JSON_FILE: &str = "exported_statements.json";

/// `export-statements`: write every statement to a deterministically named
/// file in the working directory, overwriting any previous export.
pub async fn handle(config: &Config, format: ExportFormat) -> Result<()> {
    let store = StatementStore::connect(&config.store()).await?;
    let result = store.find(doc! {}).await;
    store.disconnect().await;
    let docs = result?;

    let file_name = match format {
        ExportFormat::Json => {
            let json = output::documents_json(&docs)?;
            std::fs::write(JSON_FILE, json).with_context(|| format!("failed to write {}", JSON_FILE))?;
            JSON_FILE
        }
        ExportFormat::Csv => {
            let mut writer =
                csv::Writer::from_path(CSV_FILE).with_context(|| format!("failed to write {}", CSV_FILE))?;
            writer.write_record(output::CSV_HEADER)?;
            for doc in &docs {
                writer.write_record(output::csv_row(doc))?;
            }
            writer.flush()?;
            CSV_FILE
        }
    };

    println!("Exported {} statements to {}", docs.len(), file_name);
    Ok(())
}
