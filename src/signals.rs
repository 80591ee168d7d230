use core::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

static SIGINT: AtomicBool = AtomicBool::new(false);

pub fn received_ctrl_c() -> bool {
    SIGINT.load(Ordering::SeqCst)
}

/// Installs a handler that only records the signal; the clique enumeration
/// checks the flag between two root vertices.
pub fn initialize() {
    ctrlc::set_handler(|| {
        SIGINT.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
}
