/// Version string printed by `nextkit version`.
pub fn version_string() -> String {
    format!("V {}", env!("CARGO_PKG_VERSION"))
}

/// Write the version string to stderr.
pub fn run() {
    eprintln!("{}", version_string());
}
