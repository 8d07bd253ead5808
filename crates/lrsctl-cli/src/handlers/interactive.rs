//! `interactive-mode`: a single linear loop, menu -> action -> menu,
//! terminating only on the explicit Exit choice (or EOF on stdin).

use crate::config::Config;
use crate::handlers::prompt;
use anyhow::Result;
use lrsctl_store::StatementStore;
use lrsctl_types::Statement;
use tracing::error;

pub async fn handle(config: &Config) -> Result<()> {
    loop {
        println!();
        println!("lrsctl interactive mode");
        println!("  1) Record a new statement");
        println!("  2) Show statement count");
        println!("  3) Reset the store");
        println!("  4) Exit");

        let Some(choice) = prompt::ask("Choice: ")? else {
            // EOF ends the session like Exit does.
            return Ok(());
        };

        let outcome = match choice.as_str() {
            "1" => record_statement(config).await,
            "2" => show_count(config).await,
            "3" => reset_store(config).await,
            "4" | "exit" | "quit" => return Ok(()),
            "" => continue,
            other => {
                println!("Unrecognized choice: {}", other);
                continue;
            }
        };

        // A failed action is reported and the menu comes back; only errors in
        // the loop itself (stdin, stdout) escape to main.
        if let Err(e) = outcome {
            error!(command = "interactive-mode", "action failed: {:#}", e);
            println!("Operation failed: {}", e);
        }
    }
}

/// Fixed prompt order matching the statement shape. The assembled record is
/// shown before storing, without a validation pass.
async fn record_statement(config: &Config) -> Result<()> {
    let answers = [
        "Actor name: ",
        "Actor mbox (mailto:...): ",
        "Verb id (URI): ",
        "Verb display (English): ",
        "Object type: ",
        "Object name: ",
    ];

    let mut collected = Vec::with_capacity(answers.len());
    for label in answers {
        match prompt::ask(label)? {
            Some(answer) => collected.push(answer),
            None => return Ok(()),
        }
    }

    let statement = Statement::from_answers(
        &collected[0],
        &collected[1],
        &collected[2],
        &collected[3],
        &collected[4],
        &collected[5],
    );

    println!("{}", serde_json::to_string_pretty(&statement)?);

    let document = bson::to_document(&statement)?;
    let store = StatementStore::connect(&config.store()).await?;
    let result = store.insert_one(document).await;
    store.disconnect().await;
    result?;

    println!("Statement stored");
    Ok(())
}

async fn show_count(config: &Config) -> Result<()> {
    let store = StatementStore::connect(&config.store()).await?;
    let result = store.count_all().await;
    store.disconnect().await;

    println!("{} statement(s) stored", result?);
    Ok(())
}

async fn reset_store(config: &Config) -> Result<()> {
    if !prompt::confirm("This will delete ALL statements in the collection. Continue?")? {
        println!("Reset cancelled");
        return Ok(());
    }

    let store = StatementStore::connect(&config.store()).await?;
    let result = store.delete_all().await;
    store.disconnect().await;

    println!("Deleted {} statement(s)", result?);
    Ok(())
}
