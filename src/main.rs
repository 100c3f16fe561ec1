use clap::Parser;
use retag::application::{RetagOptions, RetagService};
use retag::cli::{format_report, Cli};
use retag::error::RetagError;
use retag::infrastructure::FileSystemWorkspace;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), RetagError> {
    let workspace = FileSystemWorkspace::discover()?;
    let service = RetagService::new(workspace);

    let options = RetagOptions {
        dry_run: cli.dry_run,
    };

    let report = service.execute(&cli.tags, &options)?;
    print!("{}", format_report(&report));

    // Per-file failures don't fail the run
    if cli.git_tag && !cli.dry_run {
        service.tag(&report)?;
        println!("Created git tag {}", report.pair.new_tag());
    }

    Ok(())
}
