//! Test vectors and helpers for the dchacha integration tests
pub mod vectors;

/// Install a log subscriber when `RUST_LOG` is set
pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}
