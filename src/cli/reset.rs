use crate::cli::ResetArgs;
use crate::config::Config;
use crate::state::Session;
use tracing::info;

pub fn execute(args: ResetArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let session_dir = args.session_dir.unwrap_or(config.session_dir);

    if Session::reset(&session_dir)? {
        info!("Removed {:?}", Session::session_path(&session_dir));
        println!("Session reset");
    } else {
        println!("No session to reset");
    }
    Ok(())
}
