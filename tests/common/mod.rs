use tracing_subscriber::EnvFilter;

// Subscriber for the whole test binary; RUST_LOG=dnum=trace shows index builds and parse misses.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
