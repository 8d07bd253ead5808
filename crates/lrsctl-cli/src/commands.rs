use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;
use anyhow::Result;
use tracing::error;

/// Dispatch one parsed invocation.
///
/// This is the error boundary: every handler failure is logged with the
/// command name and then swallowed, so the process still exits 0. The two
/// exceptions are missing configuration (rejected before dispatch) and an
/// error escaping the interactive loop itself, which propagates to main.
/// Swallowed exit codes are a preserved behavior of this tool, not an
/// accident; see DESIGN.md before changing it.
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let name = cli.command.name();

    if let Commands::InteractiveMode = cli.command {
        return handlers::interactive::handle(&config).await;
    }

    match execute(cli.command, &config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!(command = name, "command failed: {:#}", e);
            Ok(())
        }
    }
}

async fn execute(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Create { statement } => handlers::create::handle(config, &statement).await,

        Commands::Query { filter } => handlers::query::handle(config, &filter).await,

        Commands::BulkImport { path } => handlers::ingest::from_file(config, &path, false).await,

        Commands::BulkStore { statements } => handlers::ingest::inline(config, &statements).await,

        Commands::ImportStatements { path } => handlers::ingest::from_file(config, &path, true).await,

        Commands::ExportStatements { format } => handlers::export::handle(config, format).await,

        Commands::ListVerbs => handlers::listing::distinct(config, "verb.id", "verbs").await,

        Commands::ListActors => handlers::listing::distinct(config, "actor.name", "actors").await,

        Commands::ListObjectTypes => {
            handlers::listing::distinct(config, "object.objectType", "object types").await
        }

        Commands::ListAllExtensions => handlers::listing::extensions(config).await,

        Commands::Aggregate { pipeline } => handlers::reports::aggregate(config, &pipeline).await,

        Commands::LrsStats => handlers::reports::lrs_stats(config).await,

        Commands::GroupByDate => handlers::reports::group_by_date(config).await,

        Commands::AnalyzeActivity { activity } => {
            handlers::reports::analyze_activity(config, &activity).await
        }

        Commands::AvgScoreByActivity => handlers::reports::avg_score_by_activity(config).await,

        Commands::MostActiveActors { limit } => {
            handlers::reports::most_active_actors(config, limit).await
        }

        Commands::GetStatementsByDuration { min, max } => {
            handlers::query::by_duration(config, &min, &max).await
        }

        Commands::SearchStatements { field, value } => {
            handlers::query::search(config, &field, &value).await
        }

        Commands::CheckProfile { mbox } => handlers::query::check_profile(config, &mbox).await,

        Commands::VisualizeData => handlers::visualize::activity_volume(config).await,

        Commands::VisualizeActorProgress { actor } => {
            handlers::visualize::actor_progress(config, &actor).await
        }

        Commands::VisualizeVerbUsage => handlers::visualize::verb_usage(config).await,

        Commands::CheckHealth => handlers::admin::check_health(config).await,

        Commands::Backup { dir } => handlers::admin::backup(config, &dir).await,

        Commands::Restore { dir } => handlers::admin::restore(config, &dir).await,

        Commands::ResetDb { yes } => handlers::admin::reset(config, yes).await,

        Commands::SetStatementAuthority { id, authority } => {
            handlers::admin::set_authority(config, &id, &authority).await
        }

        Commands::Validate { statement } => handlers::validate::handle(&statement),

        Commands::RegisterVerb { id, display } => {
            handlers::registry::verb(config, &id, &display).await
        }

        Commands::RegisterActivityType { id, name } => {
            handlers::registry::activity_type(config, &id, &name).await
        }

        Commands::GenerateTemplate => handlers::template::handle(),

        // Routed before execute(); unreachable here.
        Commands::InteractiveMode => unreachable!("interactive-mode is dispatched in run()"),
    }
}
