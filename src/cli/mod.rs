pub mod accounts;
mod console;
pub mod ledger;

pub use accounts::AccountsCli;
pub use console::*;
pub use ledger::LedgerCli;

use log::LevelFilter;

/// Separator line framing each menu.
pub const DIVIDER: &str = "--------------------------------";

/// Printed once when a menu loop ends.
pub const FAREWELL: &str = "Exiting the program. Goodbye!";

/// Set up stderr logging. Verbose runs log at debug level, others only warnings.
///
/// The filter is fixed here and `RUST_LOG` is not consulted.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .try_init();
}
