use crate::cli::MergeArgs;
use crate::config::Config;
use crate::discovery::discover_results_files;
use crate::state::Session;
use crate::store::{merge_issues_from_store, OutputFileIssueStore};
use tracing::{info, warn};

pub fn execute(args: MergeArgs) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(results_dir) = args.results_dir {
        config.results_dir = results_dir;
    }
    if let Some(session_dir) = args.session_dir {
        config.session_dir = session_dir;
    }

    config.validate()?;

    let files = if !args.files.is_empty() {
        args.files
    } else {
        info!("Scanning {:?} for results files", config.results_dir);
        discover_results_files(&config.results_dir, &config.include, &config.exclude)?
    };

    if files.is_empty() {
        println!("No results files to merge");
        return Ok(());
    }

    let mut session = Session::load(&config.session_dir)?;
    info!(
        "Session holds {} issues before merge",
        session.store.len()
    );

    let mut total = 0;
    let mut errors = 0;

    for path in &files {
        let source = match OutputFileIssueStore::load(path) {
            Ok(source) => source,
            Err(e) => {
                warn!("Skipping {:?}: {}", path, e);
                errors += 1;
                continue;
            }
        };

        let merged = merge_issues_from_store(&*session.store, &source)?;
        let first_time = session.merged_files.insert(source.source().to_path_buf());
        println!(
            "Merged {} of {} issues from {}{}",
            merged,
            source.len(),
            path.display(),
            if first_time { "" } else { " (merged before)" }
        );
        total += merged;
    }

    println!(
        "Total: {} issues merged, {} issues in session",
        total,
        session.store.len()
    );

    if args.dry_run {
        info!("DRY RUN - session not saved");
    } else {
        let path = session.save(&config.session_dir)?;
        info!("Saved session to {:?}", path);
    }

    if errors > 0 {
        anyhow::bail!("{} results files could not be read", errors);
    }

    Ok(())
}
