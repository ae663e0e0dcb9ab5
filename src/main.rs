use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use rust_sqldialect::{
    render_split, resolve_dialect, split_scripts, Dialect, DialectSummary, SplitOptions, Version,
};

#[derive(Parser)]
#[command(name = "sqldialect")]
#[command(author, about = "Resolve database dialects, parse column types and split SQL scripts")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dialect profile chosen for a product and version
    Resolve {
        /// Product name as reported by the server (e.g. "DB2/LINUXX8664")
        #[arg(short, long)]
        product: String,

        /// Server version (e.g. "10.5", "11.1.4", "16")
        #[arg(long = "version", value_name = "VERSION")]
        server_version: Version,
    },

    /// Parse native column type strings into canonical types
    ParseType {
        #[arg(short, long)]
        product: String,

        #[arg(long = "version", value_name = "VERSION")]
        server_version: Version,

        /// Raw type strings (e.g. "VARCHAR(40)")
        #[arg(required = true)]
        types: Vec<String>,
    },

    /// Split SQL scripts into statements, comments and directives
    Split {
        #[arg(short, long)]
        product: String,

        #[arg(long = "version", value_name = "VERSION")]
        server_version: Version,

        /// Print segments as JSON
        #[arg(long)]
        json: bool,

        /// Script files, or directories to search for *.sql
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve {
            product,
            server_version,
        } => {
            let dialect = resolve(&product, server_version);
            let summary = DialectSummary::new(&dialect);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::ParseType {
            product,
            server_version,
            types,
        } => {
            let dialect = resolve(&product, server_version);
            for raw in &types {
                let parsed = dialect.parse_type(raw)?;
                println!("{raw}\t{}\t{parsed}", parsed.canonical);
            }
        }
        Commands::Split {
            product,
            server_version,
            json,
            paths,
        } => {
            let options = SplitOptions {
                product,
                version: server_version,
                paths,
                json,
            };

            let files = split_scripts(&options)?;
            print!("{}", render_split(&files, options.json)?);
        }
    }

    Ok(())
}

fn resolve(product: &str, version: Version) -> Arc<Dialect> {
    resolve_dialect(product, version.major, version.minor, Some(version.revision))
}
