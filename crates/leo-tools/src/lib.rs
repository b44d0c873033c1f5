//! # leo-tools
//!
//! One-off maintenance for the club site: moving bundled images into object
//! storage, seeding and fixing content tables, and read-only diagnostics.
//!
//! Table commands talk to Postgres through `leo-db`; storage commands use the
//! platform HTTP clients from `leo-platform`.

pub mod cli;
pub mod commands;
pub mod context;
pub mod report;
pub mod seed;

pub use cli::{Cli, Command, GlobalArgs};
pub use commands::run;
pub use context::{SetupError, ToolContext};
pub use report::MigrationReport;
