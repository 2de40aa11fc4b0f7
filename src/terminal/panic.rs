//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Restore the terminal before the default hook prints the panic.
///
/// Install before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
