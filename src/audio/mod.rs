// SPDX-License-Identifier: MPL-2.0
//! Interaction cues.
//!
//! Components never talk to an audio backend directly. They hold a
//! [`SharedCuePlayer`] and fire cues through [`CuePlayer::play`], which must
//! not block and must not fail: a cue that cannot be played is dropped.

mod tone;

pub use tone::TonePlayer;

use crate::config::{Config, DEFAULT_CUE_VOLUME};
use std::fmt;
use std::sync::{Arc, Mutex};

/// Short feedback sounds triggered by user interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Click,
    Hover,
    Pop,
    Ding,
    Whoosh,
    Flash,
    Zoom,
    Game,
    Close,
    Back,
}

impl Cue {
    pub const ALL: [Cue; 10] = [
        Cue::Click,
        Cue::Hover,
        Cue::Pop,
        Cue::Ding,
        Cue::Whoosh,
        Cue::Flash,
        Cue::Zoom,
        Cue::Game,
        Cue::Close,
        Cue::Back,
    ];
}

/// Fire-and-forget cue playback.
pub trait CuePlayer: fmt::Debug + Send + Sync {
    /// Plays `cue` at `volume` (0.0 to 1.0). Never blocks, never fails.
    fn play(&self, cue: Cue, volume: f32);

    /// Plays `cue` at [`DEFAULT_CUE_VOLUME`].
    fn play_default(&self, cue: Cue) {
        self.play(cue, DEFAULT_CUE_VOLUME);
    }
}

/// Cue player shared between components.
pub type SharedCuePlayer = Arc<dyn CuePlayer>;

/// Player that discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCuePlayer;

impl CuePlayer for SilentCuePlayer {
    fn play(&self, _cue: Cue, _volume: f32) {}
}

/// Player that remembers every cue it was asked to play.
///
/// Used by tests to observe which feedback an interaction produced.
#[derive(Debug, Default)]
pub struct RecordingCuePlayer {
    played: Mutex<Vec<(Cue, f32)>>,
}

impl RecordingCuePlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues played so far, oldest first.
    #[must_use]
    pub fn played(&self) -> Vec<(Cue, f32)> {
        self.played
            .lock()
            .map(|played| played.clone())
            .unwrap_or_default()
    }

    /// Just the cue identifiers played so far.
    #[must_use]
    pub fn cues(&self) -> Vec<Cue> {
        self.played().into_iter().map(|(cue, _)| cue).collect()
    }
}

impl CuePlayer for RecordingCuePlayer {
    fn play(&self, cue: Cue, volume: f32) {
        if let Ok(mut played) = self.played.lock() {
            played.push((cue, volume));
        }
    }
}

/// Builds the cue player described by `config`.
///
/// Falls back to [`SilentCuePlayer`] when cues are disabled, muted from the
/// command line, or no output device is available.
pub fn create_player(config: &Config, muted: bool) -> SharedCuePlayer {
    if muted || !config.audio.enabled.unwrap_or(true) {
        tracing::info!("interaction cues disabled");
        return Arc::new(SilentCuePlayer);
    }

    match TonePlayer::new(config.master_volume()) {
        Ok(player) => Arc::new(player),
        Err(err) => {
            tracing::warn!("falling back to silent cues: {err}");
            Arc::new(SilentCuePlayer)
        }
    }
}
