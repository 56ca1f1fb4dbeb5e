// SPDX-License-Identifier: MPL-2.0
//! Advertisement carousel shown between a folder click and the folder.
//!
//! Every slide change bumps a generation counter and schedules one delayed
//! [`Message::Advance`] tagged with it. Stale timers carry an old generation
//! and are ignored, which is how a pending advance is cancelled.

use super::{AdKind, Advertisement, SlideDurations};
use crate::audio::{Cue, SharedCuePlayer};
use crate::catalog::media::{normalize_reference, LoadedImage, MediaLibrary};
use crate::catalog::FolderId;
use crate::ui::state::{ScrollLock, ScrollLockGuard};
use iced::Task;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

const CONTINUE_CUE_VOLUME: f32 = 0.6;
const ADVANCE_CUE_VOLUME: f32 = 0.3;
const CONTINUE_HOVER_VOLUME: f32 = 0.4;

#[derive(Debug, Clone)]
pub enum Message {
    Continue,
    ContinueHovered,
    /// Timer fired for the slide shown at `generation`.
    Advance { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The carousel is done; open this folder.
    Navigate(FolderId),
}

/// One advertisement prepared for display.
#[derive(Debug, Clone)]
pub struct Slide {
    pub ad: Advertisement,
    /// Decoded image for image ads. `None` if it failed to load or the ad
    /// is a video.
    pub image: Option<LoadedImage>,
}

impl Slide {
    #[must_use]
    pub fn failed(&self) -> bool {
        self.ad.kind == AdKind::Image && self.image.is_none()
    }
}

#[derive(Debug)]
struct Session {
    slides: Vec<Slide>,
    index: usize,
    target: FolderId,
    _scroll_guard: ScrollLockGuard,
}

#[derive(Debug)]
pub struct AdCarousel {
    cues: SharedCuePlayer,
    scroll_lock: ScrollLock,
    durations: SlideDurations,
    enabled: bool,
    generation: u64,
    session: Option<Session>,
}

impl AdCarousel {
    #[must_use]
    pub fn new(
        cues: SharedCuePlayer,
        scroll_lock: ScrollLock,
        durations: SlideDurations,
        enabled: bool,
    ) -> Self {
        Self {
            cues,
            scroll_lock,
            durations,
            enabled,
            generation: 0,
            session: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Slide on screen.
    #[must_use]
    pub fn current(&self) -> Option<&Slide> {
        self.session
            .as_ref()
            .and_then(|session| session.slides.get(session.index))
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.session.as_ref().map_or(0, |session| session.index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.session.as_ref().map_or(0, |session| session.slides.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Opens the carousel in front of `target` with the active ads shuffled.
    ///
    /// With no active ads (or ads disabled) nothing is shown and the folder
    /// opens immediately.
    pub fn open(
        &mut self,
        target: FolderId,
        ads: &[Advertisement],
        media: &mut MediaLibrary,
    ) -> (Event, Task<Message>) {
        self.open_with_rng(target, ads, media, &mut rand::thread_rng())
    }

    pub fn open_with_rng<R: Rng + ?Sized>(
        &mut self,
        target: FolderId,
        ads: &[Advertisement],
        media: &mut MediaLibrary,
        rng: &mut R,
    ) -> (Event, Task<Message>) {
        self.session = None;

        let mut active: Vec<Advertisement> = if self.enabled {
            ads.iter().filter(|ad| ad.active).cloned().collect()
        } else {
            Vec::new()
        };

        if active.is_empty() {
            tracing::debug!(?target, "no advertisements to show");
            return (Event::Navigate(target), Task::none());
        }

        active.shuffle(rng);

        let slides = active
            .into_iter()
            .map(|mut ad| {
                ad.source = normalize_reference(&ad.source).to_string();
                let image = match ad.kind {
                    AdKind::Image => media.load(&ad.source),
                    AdKind::Video => None,
                };
                Slide { ad, image }
            })
            .collect();

        self.session = Some(Session {
            slides,
            index: 0,
            target,
            _scroll_guard: self.scroll_lock.acquire(),
        });
        self.cues.play_default(Cue::Pop);

        (Event::None, self.schedule())
    }

    /// Resets to the empty state.
    pub fn close(&mut self) {
        self.session = None;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn handle(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::Continue => {
                let Some(session) = self.session.as_ref() else {
                    return (Event::None, Task::none());
                };
                let target = session.target;
                self.cues.play(Cue::Click, CONTINUE_CUE_VOLUME);
                self.close();
                (Event::Navigate(target), Task::none())
            }
            Message::ContinueHovered => {
                if self.is_open() {
                    self.cues.play(Cue::Hover, CONTINUE_HOVER_VOLUME);
                }
                (Event::None, Task::none())
            }
            Message::Advance { generation } => {
                if generation != self.generation {
                    return (Event::None, Task::none());
                }
                (Event::None, self.advance())
            }
        }
    }

    /// Moves to the next slide, wrapping around. No-op with one slide.
    fn advance(&mut self) -> Task<Message> {
        let Some(session) = self.session.as_mut() else {
            return Task::none();
        };
        if session.slides.len() <= 1 {
            return Task::none();
        }
        session.index = (session.index + 1) % session.slides.len();
        self.cues.play(Cue::Pop, ADVANCE_CUE_VOLUME);
        self.schedule()
    }

    /// Starts the timer for the current slide and invalidates older ones.
    fn schedule(&mut self) -> Task<Message> {
        self.generation = self.generation.wrapping_add(1);
        let Some(session) = self.session.as_ref() else {
            return Task::none();
        };
        if session.slides.len() <= 1 {
            return Task::none();
        }
        let Some(slide) = session.slides.get(session.index) else {
            return Task::none();
        };

        let delay = if slide.failed() {
            tracing::warn!(source = %slide.ad.source, "advertisement media failed to load");
            // Skip quickly unless nothing in the rotation can be shown.
            if session.slides.iter().all(Slide::failed) {
                self.durations.for_kind(slide.ad.kind)
            } else {
                Duration::ZERO
            }
        } else {
            self.durations.for_kind(slide.ad.kind)
        };

        let generation = self.generation;
        Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::Advance { generation },
        )
    }
}
