//! Fixed sine + sawtooth tone playback through the default audio output

pub mod gen;

// Platform abstraction layer
pub mod platform;

pub mod utils;
