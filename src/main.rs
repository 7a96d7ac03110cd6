//! class-names: prints the class display name table.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use class_names::table::{self, OutputFormat};
use classes::Class;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "class-names")]
#[command(about = "Look up class display names")]
#[command(version)]
struct Args {
    /// Class id or name to look up (prints the whole table if omitted)
    query: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_tracing(args.verbose);

    let classes = match args.query.as_deref() {
        Some(query) => {
            let class = table::resolve(query)
                .map_err(|e| anyhow!(error::describe_error(&e)))
                .with_context(|| format!("Failed to look up class {query:?}"))?;
            debug!(%class, id = class.id(), "resolved query");
            vec![class]
        }
        None => Class::ALL.to_vec(),
    };

    info!(rows = classes.len(), format = ?args.format, "rendering class table");
    print!("{}", table::render(&classes, args.format)?);

    Ok(())
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("class_names=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
