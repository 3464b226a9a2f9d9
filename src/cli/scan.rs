use crate::cli::ScanArgs;
use crate::store::{IssueStore, OutputFileIssueStore};
use tracing::info;

pub fn execute(args: ScanArgs) -> anyhow::Result<()> {
    info!("Extracting issues from {:?}", args.file);
    let store = OutputFileIssueStore::load(&args.file)?;

    let mut issues = store.issues();
    issues.sort_by(|a, b| {
        a.issue_type()
            .cmp(b.issue_type())
            .then_with(|| a.fingerprint().cmp(b.fingerprint()))
    });

    for issue in &issues {
        println!(
            "{}  {}  ({} locations)",
            issue.fingerprint().short_id(),
            issue.issue_type(),
            issue.locations().len()
        );
        for location in issue.locations() {
            println!("    - {}", location);
        }
        if args.contributions {
            for contribution in issue.fingerprint().contributions() {
                println!("    {}", contribution);
            }
        }
    }

    println!("{} issues in {}", issues.len(), args.file.display());
    Ok(())
}
