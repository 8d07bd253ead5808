use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lrsctl")]
#[command(about = "Store, query, and analyze xAPI statements in a MongoDB-backed LRS", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

// Command names keep the surface the tool has always had, which is why a few
// of them carry explicit camelCase names instead of clap's kebab-case default.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate one statement (JSON argument) and store it
    Create { statement: String },

    /// Find statements with a verbatim MongoDB filter (JSON argument)
    Query { filter: String },

    /// Read a JSON array of statements from a file and store the valid ones
    #[command(name = "bulkImport")]
    BulkImport { path: PathBuf },

    /// Store the valid statements of an inline JSON array
    BulkStore { statements: String },

    /// Read a JSON array of statements from a file and store the valid ones
    ImportStatements { path: PathBuf },

    /// Write every statement to exported_statements.csv or .json
    ExportStatements {
        #[arg(long, default_value = "json")]
        format: ExportFormat,
    },

    /// Distinct verb identifiers in the store
    #[command(name = "listVerbs")]
    ListVerbs,

    /// Distinct actor names in the store
    #[command(name = "listActors")]
    ListActors,

    /// Distinct object types in the store
    ListObjectTypes,

    /// Distinct extension keys used across stored objects
    ListAllExtensions,

    /// Run a verbatim aggregation pipeline (JSON array argument)
    Aggregate { pipeline: String },

    /// Statement totals and distinct actor/verb counts
    #[command(name = "lrsStats")]
    LrsStats,

    /// Statement counts grouped by calendar date
    #[command(name = "groupByDate")]
    GroupByDate,

    /// Verb breakdown for one activity name
    #[command(name = "analyzeActivity")]
    AnalyzeActivity { activity: String },

    /// Average scaled score per activity
    #[command(name = "avgScoreByActivity")]
    AvgScoreByActivity,

    /// Actors ranked by statement count
    MostActiveActors {
        #[arg(default_value = "10")]
        limit: i64,
    },

    /// Statements whose ISO-8601 duration falls in a range
    GetStatementsByDuration { min: String, max: String },

    /// Find statements where one field equals a value
    SearchStatements { field: String, value: String },

    /// Activity summary for one actor mbox
    CheckProfile { mbox: String },

    /// Text chart of statement volume per activity
    #[command(name = "visualizeData")]
    VisualizeData,

    /// Text chart of one actor's scores over time
    VisualizeActorProgress { actor: String },

    /// Text chart of verb usage counts
    VisualizeVerbUsage,

    /// Storage size and document count for the collection
    CheckHealth,

    /// Dump the database to a directory with mongodump
    Backup { dir: PathBuf },

    /// Restore a mongodump directory with mongorestore
    Restore { dir: PathBuf },

    /// Delete every statement (asks for confirmation)
    ResetDb {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Set the authority field on one statement by id
    SetStatementAuthority { id: String, authority: String },

    /// Run the validator against a statement (JSON argument); no store call
    Validate { statement: String },

    /// Store a verb registration document
    RegisterVerb { id: String, display: String },

    /// Store an activity-type registration document
    RegisterActivityType { id: String, name: String },

    /// Print a skeleton statement
    GenerateTemplate,

    /// Menu-driven prompt loop
    InteractiveMode,
}

impl Commands {
    /// Stable command name for log context.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Create { .. } => "create",
            Commands::Query { .. } => "query",
            Commands::BulkImport { .. } => "bulkImport",
            Commands::BulkStore { .. } => "bulk-store",
            Commands::ImportStatements { .. } => "import-statements",
            Commands::ExportStatements { .. } => "export-statements",
            Commands::ListVerbs => "listVerbs",
            Commands::ListActors => "listActors",
            Commands::ListObjectTypes => "list-object-types",
            Commands::ListAllExtensions => "list-all-extensions",
            Commands::Aggregate { .. } => "aggregate",
            Commands::LrsStats => "lrsStats",
            Commands::GroupByDate => "groupByDate",
            Commands::AnalyzeActivity { .. } => "analyzeActivity",
            Commands::AvgScoreByActivity => "avgScoreByActivity",
            Commands::MostActiveActors { .. } => "most-active-actors",
            Commands::GetStatementsByDuration { .. } => "get-statements-by-duration",
            Commands::SearchStatements { .. } => "search-statements",
            Commands::CheckProfile { .. } => "check-profile",
            Commands::VisualizeData => "visualizeData",
            Commands::VisualizeActorProgress { .. } => "visualize-actor-progress",
            Commands::VisualizeVerbUsage => "visualize-verb-usage",
            Commands::CheckHealth => "check-health",
            Commands::Backup { .. } => "backup",
            Commands::Restore { .. } => "restore",
            Commands::ResetDb { .. } => "reset-db",
            Commands::SetStatementAuthority { .. } => "set-statement-authority",
            Commands::Validate { .. } => "validate",
            Commands::RegisterVerb { .. } => "register-verb",
            Commands::RegisterActivityType { .. } => "register-activity-type",
            Commands::GenerateTemplate => "generate-template",
            Commands::InteractiveMode => "interactive-mode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
