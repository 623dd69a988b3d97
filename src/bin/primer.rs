use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use primer::{ExecutionContext, Playground};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about = "Run small language-feature demonstrations")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log snippet progress at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run the catalogue top to bottom
    Run {
        /// Only run the named snippets (repeatable)
        #[arg(long)]
        only: Vec<String>,
    },
    /// List snippet names with a one-line summary
    List,
    /// Run a single snippet
    Show { name: String },
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    match args.command.unwrap_or(Command::Run { only: Vec::new() }) {
        Command::Run { only } => {
            let playground = Playground::with_context(ExecutionContext { echo: true, only });
            playground.run().context("playground run failed")?;
        }
        Command::List => {
            let playground = Playground::new();
            for snippet in playground.snippets() {
                println!("{:<18} {}", snippet.name, snippet.summary);
            }
        }
        Command::Show { name } => {
            let playground = Playground::with_context(ExecutionContext {
                echo: true,
                only: Vec::new(),
            });
            playground
                .run_snippet(&name)
                .with_context(|| format!("could not run `{name}`"))?;
        }
    }
    Ok(())
}

fn setup_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}
