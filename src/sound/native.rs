use super::Tone;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use std::time::Duration;
use thiserror::Error;

/// Margen tras el pitido antes de soltar el stream.
const TAIL_SECONDS: f32 = 0.05;

#[derive(Debug, Error)]
enum SoundError {
    #[error("no output device available")]
    NoDevice,
    #[error("output config unavailable: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),
    #[error("could not build output stream: {0}")]
    Build(#[from] cpal::BuildStreamError),
    #[error("could not start output stream: {0}")]
    Play(#[from] cpal::PlayStreamError),
    #[error("unsupported sample format {0:?}")]
    Format(cpal::SampleFormat),
}

/// Pitidos por la salida por defecto, cada uno en su propio hilo.
#[derive(Default)]
pub struct Beeper;

impl Beeper {
    pub fn play(&mut self, tone: Tone) {
        let spawned = std::thread::Builder::new()
            .name("beep".into())
            .spawn(move || {
                if let Err(e) = play_blocking(tone) {
                    log::warn!("Could not play tone: {e}");
                }
            });
        if let Err(e) = spawned {
            log::warn!("Could not start audio thread: {e}");
        }
    }
}

fn play_blocking(tone: Tone) -> Result<(), SoundError> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(SoundError::NoDevice)?;
    let supported = device.default_output_config()?;
    let format = supported.sample_format();
    let config: cpal::StreamConfig = supported.into();

    let stream = match format {
        cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, tone)?,
        cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, tone)?,
        cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, tone)?,
        other => return Err(SoundError::Format(other)),
    };
    stream.play()?;
    // Suena mientras el stream siga vivo
    std::thread::sleep(Duration::from_secs_f32(tone.seconds + TAIL_SECONDS));
    Ok(())
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    tone: Tone,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    let rate = config.sample_rate.0 as f32;
    let channels = usize::from(config.channels).max(1);
    let mut frame_index: u64 = 0;
    device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            for frame in data.chunks_mut(channels) {
                let value = T::from_sample(tone.level_at(frame_index as f32 / rate));
                frame.fill(value);
                frame_index += 1;
            }
        },
        |err| log::warn!("Audio stream error: {err}"),
        None,
    )
}
