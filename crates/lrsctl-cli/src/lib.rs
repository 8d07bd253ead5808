// NOTE: lrsctl Architecture
//
// Every command is "parse arguments, optionally validate, perform one store
// operation, render the result". The structure follows from that:
//
// - args.rs        clap surface, one variant per command name
// - commands.rs    dispatch; the swallow-and-log error boundary lives here
// - config.rs      required environment variables, fatal if absent
// - handlers/      one file per command family; a handler owns the connect /
//                  operate / disconnect lifecycle for its single operation
// - output/        stdout rendering: pretty JSON, text bar charts, CSV rows
//
// Validation lives in lrsctl-types, the MongoDB gateway in lrsctl-store.

mod args;
mod commands;
pub mod config;
mod handlers;
mod output;

pub use args::{Cli, Commands, ExportFormat};
pub use commands::run;
