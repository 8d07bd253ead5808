use anyhow::{Context, Result};
use lrsctl_types::validate;
use serde_json::Value;

/// `validate`: run the schema check only; no store call.
pub fn handle(statement: &str) -> Result<()> {
    let record: Value =
        serde_json::from_str(statement).context("statement argument is not valid JSON")?;

    let report = validate(&record);
    if report.valid {
        println!("Statement is valid");
    } else {
        println!("Statement is invalid ({} violations):", report.errors.len());
        for violation in &report.errors {
            println!("  - {}", violation);
        }
    }
    Ok(())
}
