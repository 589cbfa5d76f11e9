/// Subscriber for the Lambda binaries. CloudWatch adds the ingestion time.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}

/// Subscriber for the terminal frontend; stdout is reserved for the view.
pub fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
