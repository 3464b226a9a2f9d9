use crate::cli::ReportArgs;
use crate::config::Config;
use crate::output::write_issue_report;
use crate::state::Session;
use tracing::info;

pub fn execute(args: ReportArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let session_dir = args.session_dir.unwrap_or(config.session_dir);
    let report_dir = args.report_dir.unwrap_or(config.report_dir);

    let session = Session::load(&session_dir)?;
    if let Some(saved_at) = session.saved_at {
        info!("Session last saved at {}", saved_at.to_rfc3339());
    }

    let summary = write_issue_report(&report_dir, &*session.store)?;
    println!(
        "Wrote {} issues to {}",
        summary.issue_count,
        report_dir.display()
    );
    println!("Locations: {}", summary.location_count);
    for (issue_type, count) in &summary.by_type {
        println!("  {}: {}", issue_type, count);
    }
    Ok(())
}
