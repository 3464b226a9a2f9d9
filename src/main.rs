use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use uia_issues::cli::{self, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("uia_issues=debug")
    } else {
        EnvFilter::new("uia_issues=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan(args) => cli::scan::execute(args),
        Commands::Merge(args) => cli::merge::execute(args),
        Commands::Report(args) => cli::report::execute(args),
        Commands::Reset(args) => cli::reset::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
