use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    Device, FromSample, SizedSample, Stream, StreamConfig,
};

use super::AudioOutput;
use crate::gen::MixedOscillator;

/// CPAL-backed audio output
///
/// Owns the output stream and the Stopped/Running toggle. The oscillator
/// is moved into the render callback when the stream is created, so the
/// callback works on plain owned state with no locking; pausing the
/// stream keeps the callback (and the oscillator phases) alive, which is
/// what makes a later start resume the waveform instead of restarting it.
pub struct CpalOutput {
    stream: Option<Stream>,
    device: Option<Device>,
    config: Option<StreamConfig>,
    sample_rate: f32,
    is_active: bool,
}

impl CpalOutput {
    pub fn new() -> Self {
        Self {
            stream: None,
            device: None,
            config: None,
            sample_rate: MixedOscillator::DEFAULT_SAMPLE_RATE,
            is_active: false,
        }
    }

    /// Create the output stream, handing the oscillator to the audio thread
    pub fn create_stream(&mut self, osc: MixedOscillator) -> Result<(), anyhow::Error> {
        let device = self
            .device
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Device not initialized"))?;
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Config not initialized"))?;

        let supported_config = device.default_output_config()?;

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::I8 => Self::make_stream::<i8>(device, config, osc)?,
            cpal::SampleFormat::I16 => Self::make_stream::<i16>(device, config, osc)?,
            cpal::SampleFormat::I32 => Self::make_stream::<i32>(device, config, osc)?,
            cpal::SampleFormat::I64 => Self::make_stream::<i64>(device, config, osc)?,
            cpal::SampleFormat::U8 => Self::make_stream::<u8>(device, config, osc)?,
            cpal::SampleFormat::U16 => Self::make_stream::<u16>(device, config, osc)?,
            cpal::SampleFormat::U32 => Self::make_stream::<u32>(device, config, osc)?,
            cpal::SampleFormat::U64 => Self::make_stream::<u64>(device, config, osc)?,
            cpal::SampleFormat::F32 => Self::make_stream::<f32>(device, config, osc)?,
            cpal::SampleFormat::F64 => Self::make_stream::<f64>(device, config, osc)?,
            sample_format => {
                return Err(anyhow::anyhow!(
                    "Unsupported sample format '{}'",
                    sample_format
                ))
            }
        };

        self.stream = Some(stream);
        Ok(())
    }

    /// Setup the CPAL host and device
    fn setup_host_device(&mut self) -> Result<(), anyhow::Error> {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow::anyhow!("Default output device is not available"))?;

        log::info!("Output device: {}", device.name()?);

        let config = device.default_output_config()?;
        log::info!("Default output config: {:?}", config);

        self.sample_rate = config.sample_rate().0 as f32;
        self.device = Some(device);
        self.config = Some(config.into());

        Ok(())
    }

    /// Create a typed stream for the given sample format
    fn make_stream<T>(
        device: &Device,
        config: &StreamConfig,
        mut osc: MixedOscillator,
    ) -> Result<Stream, anyhow::Error>
    where
        T: SizedSample + FromSample<f32>,
    {
        let num_channels = config.channels as usize;

        let err_fn = |err| log::error!("Error in output sound stream: {}", err);

        let stream = device.build_output_stream(
            config,
            move |output: &mut [T], _: &cpal::OutputCallbackInfo| {
                // One oscillator sample per frame, duplicated to all channels
                for frame in output.chunks_mut(num_channels) {
                    let value: T = T::from_sample(osc.next_sample());
                    for sample in frame.iter_mut() {
                        *sample = value;
                    }
                }
            },
            err_fn,
            None,
        )?;

        Ok(stream)
    }
}

impl Default for CpalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for CpalOutput {
    fn initialize(&mut self, sample_rate: f32) -> Result<(), anyhow::Error> {
        self.sample_rate = sample_rate;
        self.setup_host_device()?;
        Ok(())
    }

    fn start(&mut self) -> Result<(), anyhow::Error> {
        if let Some(stream) = &self.stream {
            stream.play()?;
            self.is_active = true;
            log::info!("Audio stream started at sample rate: {}", self.sample_rate);
        } else {
            return Err(anyhow::anyhow!(
                "Stream not created. Call create_stream first."
            ));
        }

        Ok(())
    }

    fn stop(&mut self) -> Result<(), anyhow::Error> {
        if let Some(stream) = &self.stream {
            stream.pause()?;
            self.is_active = false;
            log::info!("Audio stream stopped");
        }

        Ok(())
    }

    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
