use env_logger::Builder;
use std::io::Write;

/// Log lines are prefixed with `c` so they read as comments next to the
/// DIMACS-like result lines.
pub fn build_logger() {
    let mut builder = Builder::from_default_env();
    builder
        .format(|buf, record| writeln!(buf, "c {} - {}", record.level(), record.args()))
        .init();
}
