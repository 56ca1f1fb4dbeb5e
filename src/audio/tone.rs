// SPDX-License-Identifier: MPL-2.0
//! Cue output using cpal.
//!
//! Cues are synthesized as short frequency sweeps with a decaying envelope.
//! The output stream lives on a dedicated thread; the UI thread only pushes
//! commands into an unbounded channel, so [`TonePlayer::play`] never blocks.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::collections::VecDeque;
use std::f32::consts::TAU;
use std::sync::{mpsc as std_mpsc, Arc, Mutex};
use std::thread;
use tokio::sync::mpsc;

use super::{Cue, CuePlayer};
use crate::error::{Error, Result};

/// Pitch sweep and length of a synthesized cue.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ToneShape {
    start_hz: f32,
    end_hz: f32,
    duration_ms: u32,
}

fn shape_for(cue: Cue) -> ToneShape {
    let (start_hz, end_hz, duration_ms) = match cue {
        Cue::Click => (1800.0, 1200.0, 25),
        Cue::Hover => (500.0, 900.0, 60),
        Cue::Pop => (400.0, 1100.0, 70),
        Cue::Ding => (1760.0, 1760.0, 350),
        Cue::Whoosh => (1200.0, 250.0, 220),
        Cue::Flash => (2500.0, 1500.0, 90),
        Cue::Zoom => (600.0, 1400.0, 120),
        Cue::Game => (440.0, 880.0, 180),
        Cue::Close => (900.0, 300.0, 150),
        Cue::Back => (700.0, 350.0, 140),
    };
    ToneShape {
        start_hz,
        end_hz,
        duration_ms,
    }
}

/// Renders `shape` as interleaved f32 samples.
fn synthesize(shape: ToneShape, gain: f32, sample_rate: u32, channels: u16) -> Vec<f32> {
    let gain = gain.clamp(0.0, 1.0);
    let frames = (u64::from(sample_rate) * u64::from(shape.duration_ms) / 1000) as usize;
    let channels = usize::from(channels.max(1));
    let mut samples = Vec::with_capacity(frames * channels);
    let mut phase = 0.0_f32;

    for i in 0..frames {
        let t = i as f32 / frames as f32;
        let freq = shape.start_hz + (shape.end_hz - shape.start_hz) * t;
        phase = (phase + TAU * freq / sample_rate as f32) % TAU;

        let attack = (t * 20.0).min(1.0);
        let envelope = attack * (1.0 - t) * (1.0 - t);
        let value = phase.sin() * envelope * gain;

        samples.extend(std::iter::repeat(value).take(channels));
    }

    samples
}

#[derive(Debug)]
enum ToneCommand {
    Play { cue: Cue, volume: f32 },
}

/// Cue player backed by the default audio output device.
#[derive(Debug)]
pub struct TonePlayer {
    command_tx: mpsc::UnboundedSender<ToneCommand>,
}

impl TonePlayer {
    /// Opens the default output device on a background thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned, no output device is
    /// found, or the stream fails to start.
    pub fn new(master_volume: f32) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::unbounded_channel::<ToneCommand>();
        let (ready_tx, ready_rx) = std_mpsc::sync_channel::<Result<()>>(1);

        thread::Builder::new()
            .name("cue-output".to_string())
            .spawn(move || run_output(command_rx, &ready_tx, master_volume))
            .map_err(|e| Error::Audio(format!("Failed to spawn cue thread: {e}")))?;

        ready_rx
            .recv()
            .map_err(|_| Error::Audio("Cue thread exited during startup".to_string()))??;

        Ok(Self { command_tx })
    }
}

impl CuePlayer for TonePlayer {
    fn play(&self, cue: Cue, volume: f32) {
        if self
            .command_tx
            .send(ToneCommand::Play { cue, volume })
            .is_err()
        {
            tracing::debug!(?cue, "cue dropped: output thread stopped");
        }
    }
}

struct Output {
    buffer: Arc<Mutex<VecDeque<f32>>>,
    sample_rate: u32,
    channels: u16,
    _stream: cpal::Stream,
}

fn run_output(
    mut command_rx: mpsc::UnboundedReceiver<ToneCommand>,
    ready_tx: &std_mpsc::SyncSender<Result<()>>,
    master_volume: f32,
) {
    let output = match open_output() {
        Ok(output) => output,
        Err(err) => {
            let _ = ready_tx.send(Err(err));
            return;
        }
    };
    let _ = ready_tx.send(Ok(()));

    // Runs until the player is dropped and the channel closes.
    while let Some(command) = command_rx.blocking_recv() {
        match command {
            ToneCommand::Play { cue, volume } => {
                let samples = synthesize(
                    shape_for(cue),
                    volume * master_volume,
                    output.sample_rate,
                    output.channels,
                );
                // A new cue restarts playback from its beginning.
                if let Ok(mut buffer) = output.buffer.lock() {
                    buffer.clear();
                    buffer.extend(samples);
                }
            }
        }
    }
}

fn open_output() -> Result<Output> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| Error::Audio("No audio output device found".to_string()))?;

    let supported_config = device
        .default_output_config()
        .map_err(|e| Error::Audio(format!("Failed to get audio config: {e}")))?;

    let sample_rate = supported_config.sample_rate();
    let channels = supported_config.channels();
    let sample_format = supported_config.sample_format();
    let stream_config: cpal::StreamConfig = supported_config.into();

    let buffer = Arc::new(Mutex::new(VecDeque::new()));
    let stream = match sample_format {
        cpal::SampleFormat::F32 => {
            build_stream::<f32>(&device, &stream_config, Arc::clone(&buffer))?
        }
        cpal::SampleFormat::I16 => {
            build_stream::<i16>(&device, &stream_config, Arc::clone(&buffer))?
        }
        cpal::SampleFormat::U16 => {
            build_stream::<u16>(&device, &stream_config, Arc::clone(&buffer))?
        }
        _ => return Err(Error::Audio("Unsupported audio sample format".to_string())),
    };

    stream
        .play()
        .map_err(|e| Error::Audio(format!("Failed to start audio stream: {e}")))?;

    Ok(Output {
        buffer,
        sample_rate,
        channels,
        _stream: stream,
    })
}

fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    buffer: Arc<Mutex<VecDeque<f32>>>,
) -> Result<cpal::Stream> {
    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                let Ok(mut buf) = buffer.lock() else {
                    for sample in data.iter_mut() {
                        *sample = T::from_sample(0.0f32);
                    }
                    return;
                };

                for sample in data.iter_mut() {
                    let value = buf.pop_front().unwrap_or(0.0).clamp(-1.0, 0.999_999_9);
                    *sample = T::from_sample(value);
                }
            },
            |err| {
                tracing::debug!("cue output error: {err}");
            },
            None,
        )
        .map_err(|e| Error::Audio(format!("Failed to build audio stream: {e}")))
}
