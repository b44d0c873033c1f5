//! Maintenance CLI entry point
//!
//! ```bash
//! cargo run -p leo-tools -- --help
//! ```

use clap::Parser;
use leo_common::{try_init_tracing_with_config, TracingConfig};
use leo_tools::{Cli, SetupError};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing_with_config(TracingConfig::cli()) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let cli = Cli::parse();
    if let Err(e) = leo_tools::run(cli).await {
        match e.downcast_ref::<SetupError>() {
            Some(setup) => eprintln!("Error: {setup}\n\n{}", setup.instructions()),
            None => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}
