//! Mixed oscillator - free-running sine + sawtooth generator
//!
//! Produces a fixed equal blend of a sine wave and a sawtooth wave,
//! one mono sample per call. Both waveforms run continuously; there is
//! no trigger or envelope stage.

/// Sine frequency at the default sample rate (base increment scaled by 300)
pub const SINE_FREQUENCY_HZ: f32 = 300.0;

/// Sawtooth frequency at the default sample rate (base increment scaled by 800)
pub const SAW_FREQUENCY_HZ: f32 = 800.0;

/// Free-running dual oscillator with a fixed 50/50 sine/saw mix
///
/// Each waveform is driven by its own phase accumulator in [0, 1),
/// advanced by `frequency / sample_rate` per sample and wrapped by
/// subtracting 1.0. Phases are never reset, so pausing the pull and
/// resuming later continues the waveform where it left off.
pub struct MixedOscillator {
    pub sample_rate: f32,
    pub sine_phase: f32,
    pub saw_phase: f32,
    pub sine_increment: f32,
    pub saw_increment: f32,
}

impl MixedOscillator {
    pub const DEFAULT_SAMPLE_RATE: f32 = 44100.0;

    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            sine_phase: 0.0,
            saw_phase: 0.0,
            sine_increment: SINE_FREQUENCY_HZ / sample_rate,
            saw_increment: SAW_FREQUENCY_HZ / sample_rate,
        }
    }

    /// Generate one mono sample and advance both phase accumulators.
    ///
    /// Call exactly once per output frame, in order; skipping or
    /// repeating frames breaks phase continuity.
    pub fn next_sample(&mut self) -> f32 {
        let two_pi = 2.0 * std::f32::consts::PI;

        let sine = (two_pi * self.sine_phase).sin();
        self.sine_phase += self.sine_increment;
        if self.sine_phase >= 1.0 {
            self.sine_phase -= 1.0;
        }

        // Maps [0, 1) to [-1, 1)
        let saw = 2.0 * self.saw_phase - 1.0;
        self.saw_phase += self.saw_increment;
        if self.saw_phase >= 1.0 {
            self.saw_phase -= 1.0;
        }

        0.5 * sine + 0.5 * saw
    }

    /// Fill a mono buffer, one generated sample per slot.
    pub fn fill(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

impl Default for MixedOscillator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SAMPLE_RATE)
    }
}
