use anyhow::Result;
use lrsctl_types::Statement;

/// `generate-template`: print a skeleton statement; no store call.
pub fn handle() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Statement::template())?);
    Ok(())
}
