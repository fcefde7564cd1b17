// installs the json subscriber used by the library service; later calls are no-ops so
// tests can call it freely
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .try_init();
}
