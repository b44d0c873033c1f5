//! Command-line interface definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "leo-tools",
    version,
    about = "Image migration, seeding and diagnostics for the club website"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Env files to read credentials from, in order of precedence
    #[arg(long = "env-file", value_name = "PATH", global = true, default_values = [".env", ".env.local"])]
    pub env_files: Vec<PathBuf>,

    /// Platform project URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Service-role key (bypasses row level security)
    #[arg(long, global = true)]
    pub service_key: Option<String>,

    /// Anon key
    #[arg(long, global = true)]
    pub anon_key: Option<String>,

    /// PostgreSQL connection string for table commands
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Upload into an in-memory bucket and print table writes instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload images from the site's public directory into the bucket
    MigrateImages {
        #[arg(long, value_name = "DIR")]
        public_dir: PathBuf,

        /// Where to write the JSON migration report
        #[arg(long, value_name = "FILE", default_value = "migration-report.json")]
        report: PathBuf,
    },

    /// Delete local files that a migration report lists as uploaded
    Cleanup {
        #[arg(long, value_name = "FILE")]
        report: PathBuf,
    },

    /// Replace local image paths in a JSON file with uploaded URLs
    RewriteUrls {
        #[arg(long, value_name = "FILE")]
        report: PathBuf,

        #[arg(long, value_name = "FILE")]
        input: PathBuf,

        /// Defaults to rewriting the input in place
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Insert projects from a seed file
    SeedProjects {
        #[arg(long, value_name = "FILE", default_value = "seed/projects.json")]
        file: PathBuf,
    },

    /// Insert homepage content from a seed file
    SeedContent {
        #[arg(long, value_name = "FILE", default_value = "seed/content.json")]
        file: PathBuf,

        /// Empty the content tables first
        #[arg(long)]
        clear: bool,
    },

    /// Delete every project
    ClearProjects,

    /// Keep the first rows of the services and feature cards tables
    TrimContent {
        #[arg(long, default_value_t = 4)]
        services: usize,

        #[arg(long, default_value_t = 2)]
        feature_cards: usize,
    },

    /// Apply image and settings fixes from a fixes file
    FixImages {
        #[arg(long, value_name = "FILE", default_value = "seed/fixes.json")]
        file: PathBuf,
    },

    /// Read-only dump of a table group
    Check {
        #[arg(value_enum)]
        target: CheckTarget,
    },

    /// Detailed per-project dump
    VerifyProjects,

    /// Check that the bucket exists, is public, and list its folders
    CheckStorage,

    /// Run the SQL migrations
    Schema {
        #[arg(long, value_name = "DIR", default_value = leo_db::DEFAULT_MIGRATIONS_DIR)]
        dir: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckTarget {
    Projects,
    Services,
    Images,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_env_files() {
        let cli = Cli::try_parse_from(["leo-tools", "clear-projects"]).unwrap();
        assert_eq!(
            cli.global.env_files,
            vec![PathBuf::from(".env"), PathBuf::from(".env.local")]
        );
        assert!(!cli.global.dry_run);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "leo-tools",
            "migrate-images",
            "--public-dir",
            "public",
            "--dry-run",
            "--url",
            "https://demo.supabase.co",
        ])
        .unwrap();
        assert!(cli.global.dry_run);
        assert_eq!(cli.global.url.as_deref(), Some("https://demo.supabase.co"));
        assert!(matches!(cli.command, Command::MigrateImages { .. }));
    }

    #[test]
    fn test_check_target() {
        let cli = Cli::try_parse_from(["leo-tools", "check", "services"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Check {
                target: CheckTarget::Services
            }
        ));
        assert!(Cli::try_parse_from(["leo-tools", "check", "members"]).is_err());
    }

    #[test]
    fn test_trim_defaults() {
        let cli = Cli::try_parse_from(["leo-tools", "trim-content"]).unwrap();
        match cli.command {
            Command::TrimContent {
                services,
                feature_cards,
            } => {
                assert_eq!(services, 4);
                assert_eq!(feature_cards, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
