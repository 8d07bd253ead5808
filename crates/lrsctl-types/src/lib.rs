pub mod statement;
pub mod validate;

pub use statement::{Actor, Statement, Verb};
pub use validate::{validate, partition_storable, ValidationReport, Violation, ViolationKind};
