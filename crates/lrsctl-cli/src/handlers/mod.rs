mod prompt;

pub mod admin;
pub mod create;
pub mod export;
pub mod ingest;
pub mod interactive;
pub mod listing;
pub mod query;
pub mod registry;
pub mod reports;
pub mod template;
pub mod validate;
pub mod visualize;
