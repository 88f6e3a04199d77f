/// Platform abstraction for audio output
/// This module provides a unified interface for audio playback so the
/// generator core stays independent of the backend (native CPAL today).

/// Trait for platform-specific audio output implementations
pub trait AudioOutput {
    /// Initialize the audio output with the given sample rate
    fn initialize(&mut self, sample_rate: f32) -> Result<(), anyhow::Error>;

    /// Start the audio stream
    fn start(&mut self) -> Result<(), anyhow::Error>;

    /// Stop the audio stream
    fn stop(&mut self) -> Result<(), anyhow::Error>;

    /// Get the current sample rate
    fn sample_rate(&self) -> f32;

    /// Check if the audio output is active
    fn is_active(&self) -> bool;
}

// Platform-specific implementations
#[cfg(feature = "native")]
pub mod cpal_output;

// Re-export platform-specific types
#[cfg(feature = "native")]
pub use self::cpal_output::CpalOutput;
