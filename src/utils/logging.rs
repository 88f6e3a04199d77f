//! Logging utilities for the playback binary

/// Initialize the logger with default settings.
/// Uses INFO level by default; the RUST_LOG environment variable can
/// override the default level.
pub fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
