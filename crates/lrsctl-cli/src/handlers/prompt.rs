//! Line-oriented stdin prompting shared by `reset-db` and interactive mode.

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Print a prompt and read one trimmed line. `None` on EOF.
pub fn ask(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Yes/no confirmation that defaults to "no": only an explicit `y`/`yes`
/// (case-insensitive) proceeds. Bare enter and EOF both cancel.
pub fn confirm(question: &str) -> Result<bool> {
    let answer = ask(&format!("{} [y/N]: ", question))?;
    Ok(matches!(
        answer.as_deref().map(str::to_ascii_lowercase).as_deref(),
        Some("y") | Some("yes")
    ))
}
