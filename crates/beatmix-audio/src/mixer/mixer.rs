//! Audio mixer for combining gained tracks.

use crate::buffer::AudioBuffer;

use super::processing::hard_clip_buffer;
use super::types::Track;

/// Sums tracks into a clipped stereo buffer of fixed length.
#[derive(Debug)]
pub struct Mixer {
    /// Output sample length.
    num_samples: usize,
    /// Sample rate.
    sample_rate: u32,
    /// Accumulated tracks.
    tracks: Vec<Track>,
}

impl Mixer {
    /// Creates a new mixer.
    ///
    /// # Arguments
    /// * `num_samples` - Number of output samples per channel
    /// * `sample_rate` - Audio sample rate in Hz (must be positive)
    pub fn new(num_samples: usize, sample_rate: u32) -> Self {
        Self {
            num_samples,
            sample_rate,
            tracks: Vec::new(),
        }
    }

    /// Adds a track to the mix.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Number of tracks added so far.
    pub fn num_tracks(&self) -> usize {
        self.tracks.len()
    }

    /// Mixes all tracks to stereo and hard clips the result.
    pub fn render(&self) -> AudioBuffer {
        let mut left = vec![0.0_f32; self.num_samples];
        let mut right = vec![0.0_f32; self.num_samples];

        for track in &self.tracks {
            self.mix_track(track, &mut left, &mut right);
        }

        hard_clip_buffer(&mut left);
        hard_clip_buffer(&mut right);

        AudioBuffer::from_parts(self.sample_rate, vec![left, right])
    }

    /// Accumulates one track into the output channels.
    fn mix_track(&self, track: &Track, left: &mut [f32], right: &mut [f32]) {
        let Some((src_left, src_right)) = track.stereo_sources() else {
            return;
        };
        let gain = track.gain.value();
        let len = src_left.len().min(self.num_samples);

        for i in 0..len {
            left[i] += src_left[i] * gain;
            right[i] += src_right[i] * gain;
        }
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the number of output samples.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }
}
