// src/main.rs
// Prints the vector report. Diagnostics go to stderr via RUST_LOG.

fn main() -> vector_patterns::Result<()> {
    env_logger::init();
    vector_patterns::demo::run()
}
