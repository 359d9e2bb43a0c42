use tracing_subscriber::EnvFilter;

fn main() {
    // stdout carries only the confirmation line; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    library_index::app::cli::run();
}
