//! Scoped offline render contexts.
//!
//! A [`RenderHost`] stands for the platform's offline rendering facility. Each
//! mix acquires one [`RenderContext`] from it; the context is released when
//! dropped, whether the mix succeeded or failed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::buffer::AudioBuffer;
use crate::error::MixingError;
use crate::mixer::{Mixer, Track};
use crate::resample::resample_buffer;

/// Hands out render contexts and tracks how many are live.
#[derive(Debug, Clone, Default)]
pub struct RenderHost {
    live: Arc<AtomicUsize>,
    capacity: Option<usize>,
}

impl RenderHost {
    /// Creates a host with no limit on concurrent contexts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host that allows at most `capacity` live contexts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            live: Arc::new(AtomicUsize::new(0)),
            capacity: Some(capacity),
        }
    }

    /// Number of contexts currently acquired and not yet dropped.
    pub fn live_contexts(&self) -> usize {
        self.live.load(Ordering::Acquire)
    }

    /// Acquires a context rendering at `sample_rate`.
    pub fn acquire(&self, sample_rate: u32) -> Result<RenderContext, MixingError> {
        if sample_rate == 0 {
            return Err(MixingError::ContextUnavailable {
                reason: "sample rate must be positive".to_string(),
            });
        }

        let capacity = self.capacity.unwrap_or(usize::MAX);
        self.live
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < capacity).then_some(n + 1)
            })
            .map_err(|n| MixingError::ContextUnavailable {
                reason: format!("{n} of {capacity} contexts in use"),
            })?;

        debug!(sample_rate, "acquired render context");
        Ok(RenderContext {
            sample_rate,
            live: Arc::clone(&self.live),
        })
    }
}

/// An acquired render context. Released on drop.
#[derive(Debug)]
pub struct RenderContext {
    sample_rate: u32,
    live: Arc<AtomicUsize>,
}

impl RenderContext {
    /// The rate every rendered buffer is produced at.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Brings a buffer to the context's rate.
    pub fn conform(&self, buffer: &AudioBuffer) -> AudioBuffer {
        if buffer.sample_rate() != self.sample_rate {
            debug!(
                from = buffer.sample_rate(),
                to = self.sample_rate,
                "resampling input"
            );
        }
        resample_buffer(buffer, self.sample_rate)
    }

    /// Renders `num_samples` of stereo output from the given tracks.
    ///
    /// Tracks must already be at the context's rate (see [`conform`](Self::conform)).
    pub fn render(&self, num_samples: usize, tracks: Vec<Track>) -> AudioBuffer {
        let mut mixer = Mixer::new(num_samples, self.sample_rate);
        for track in tracks {
            mixer.add_track(track);
        }
        mixer.render()
    }
}

impl Drop for RenderContext {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::AcqRel);
        debug!(sample_rate = self.sample_rate, "released render context");
    }
}
