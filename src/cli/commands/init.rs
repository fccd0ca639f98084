use crate::config::Config;
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::ui::messages;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty results file
pub fn handle(cli: &Cli) -> AppResult<()> {
    let results_path = if let Some(custom) = &cli.store {
        Config::init_all(Some(custom.clone()), cli.test)?
    } else {
        Config::init_all(None, cli.test)?
    };

    println!("⚙️  Initializing oarlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Results    : {}", results_path.display());

    let store = JsonStore::new(&results_path);
    store.init()?;

    messages::success(format!("Results file ready at {}", results_path.display()));
    Ok(())
}
