//! Basic tests for Mixer construction and track management.

use super::*;
use crate::buffer::AudioBuffer;
use crate::gain::Gain;

fn mono(samples: Vec<f32>) -> AudioBuffer {
    AudioBuffer::mono(44100, samples).unwrap()
}

#[test]
fn test_mixer_new() {
    let mixer = Mixer::new(1000, 48000);
    assert_eq!(mixer.num_samples(), 1000);
    assert_eq!(mixer.sample_rate(), 48000);
    assert_eq!(mixer.num_tracks(), 0);
}

#[test]
fn test_mixer_add_track() {
    let mut mixer = Mixer::new(100, 44100);
    mixer.add_track(Track::unity(mono(vec![0.5; 50])));
    mixer.add_track(Track::new(mono(vec![0.5; 50]), Gain::SILENT));
    assert_eq!(mixer.num_tracks(), 2);
}

#[test]
fn test_empty_mixer_renders_silence() {
    let mixer = Mixer::new(64, 44100);
    let output = mixer.render();
    assert_eq!(output.num_channels(), OUTPUT_CHANNELS);
    assert_eq!(output.len(), 64);
    assert!(output.channels().iter().flatten().all(|&s| s == 0.0));
}

#[test]
fn test_zero_length_mixer() {
    let mut mixer = Mixer::new(0, 44100);
    mixer.add_track(Track::unity(mono(vec![0.5; 10])));
    let output = mixer.render();
    assert_eq!(output.num_channels(), 2);
    assert!(output.is_empty());
}

#[test]
fn test_track_stereo_sources_mono_duplicates() {
    let track = Track::unity(mono(vec![0.1, 0.2]));
    let (l, r) = track.stereo_sources().unwrap();
    assert_eq!(l, r);
}

#[test]
fn test_track_stereo_sources_ignores_extra_channels() {
    let buffer =
        AudioBuffer::from_channels(44100, vec![vec![0.1], vec![0.2], vec![0.3], vec![0.4]]).unwrap();
    let track = Track::unity(buffer);
    let (l, r) = track.stereo_sources().unwrap();
    assert_eq!(l, &[0.1]);
    assert_eq!(r, &[0.2]);
}

#[test]
fn test_track_without_channels_has_no_sources() {
    let buffer = AudioBuffer::from_channels(44100, Vec::new()).unwrap();
    let track = Track::unity(buffer);
    assert!(track.stereo_sources().is_none());
    assert!(track.buffer.is_empty());
}
