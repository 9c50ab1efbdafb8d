//! Tests for summing, channel mapping and clipping in the mixer.

use super::*;
use crate::buffer::AudioBuffer;
use crate::gain::Gain;

fn gain(value: f32) -> Gain {
    Gain::new(value).unwrap()
}

// ============================================================================
// Summation
// ============================================================================

#[test]
fn test_single_mono_track() {
    let mut mixer = Mixer::new(100, 44100);
    mixer.add_track(Track::unity(AudioBuffer::mono(44100, vec![0.5; 100]).unwrap()));

    let output = mixer.render();
    for channel in output.channels() {
        assert!(channel.iter().all(|&s| (s - 0.5).abs() < 1e-6));
    }
}

#[test]
fn test_single_track_with_gain() {
    let mut mixer = Mixer::new(100, 44100);
    mixer.add_track(Track::new(
        AudioBuffer::mono(44100, vec![1.0; 100]).unwrap(),
        gain(0.5),
    ));

    let output = mixer.render();
    assert!(output.channel(0).unwrap().iter().all(|&s| (s - 0.5).abs() < 1e-6));
}

#[test]
fn test_two_tracks_sum() {
    let mut mixer = Mixer::new(100, 44100);
    mixer.add_track(Track::new(
        AudioBuffer::mono(44100, vec![0.4; 100]).unwrap(),
        gain(1.0),
    ));
    mixer.add_track(Track::new(
        AudioBuffer::mono(44100, vec![0.4; 100]).unwrap(),
        gain(0.5),
    ));

    let output = mixer.render();
    // 0.4 + 0.4 * 0.5 = 0.6
    assert!(output.channel(1).unwrap().iter().all(|&s| (s - 0.6).abs() < 1e-6));
}

#[test]
fn test_opposite_phase_cancels() {
    let mut mixer = Mixer::new(10, 44100);
    mixer.add_track(Track::unity(AudioBuffer::mono(44100, vec![0.3; 10]).unwrap()));
    mixer.add_track(Track::unity(AudioBuffer::mono(44100, vec![-0.3; 10]).unwrap()));

    let output = mixer.render();
    assert!(output.channels().iter().flatten().all(|&s| s.abs() < 1e-6));
}

// ============================================================================
// Length handling
// ============================================================================

#[test]
fn test_shorter_track_padded_with_silence() {
    let mut mixer = Mixer::new(100, 44100);
    mixer.add_track(Track::unity(AudioBuffer::mono(44100, vec![0.5; 40]).unwrap()));

    let output = mixer.render();
    let left = output.channel(0).unwrap();
    assert!((left[39] - 0.5).abs() < 1e-6);
    assert!(left[40..].iter().all(|&s| s == 0.0));
}

#[test]
fn test_shorter_track_not_looped() {
    let mut mixer = Mixer::new(6, 44100);
    mixer.add_track(Track::unity(
        AudioBuffer::mono(44100, vec![0.1, 0.2, 0.3]).unwrap(),
    ));

    let output = mixer.render();
    assert_eq!(output.channel(0).unwrap(), &[0.1, 0.2, 0.3, 0.0, 0.0, 0.0]);
}

#[test]
fn test_longer_track_truncated_to_output_length() {
    let mut mixer = Mixer::new(10, 44100);
    mixer.add_track(Track::unity(AudioBuffer::mono(44100, vec![0.5; 50]).unwrap()));

    let output = mixer.render();
    assert_eq!(output.len(), 10);
}

// ============================================================================
// Channel mapping
// ============================================================================

#[test]
fn test_stereo_track_keeps_sides() {
    let mut mixer = Mixer::new(4, 44100);
    mixer.add_track(Track::unity(
        AudioBuffer::stereo(44100, vec![0.5; 4], vec![-0.25; 4]).unwrap(),
    ));

    let output = mixer.render();
    assert!(output.channel(0).unwrap().iter().all(|&s| s == 0.5));
    assert!(output.channel(1).unwrap().iter().all(|&s| s == -0.25));
}

#[test]
fn test_mono_plus_stereo() {
    let mut mixer = Mixer::new(4, 44100);
    mixer.add_track(Track::unity(AudioBuffer::mono(44100, vec![0.25; 4]).unwrap()));
    mixer.add_track(Track::unity(
        AudioBuffer::stereo(44100, vec![0.5; 4], vec![0.0; 4]).unwrap(),
    ));

    let output = mixer.render();
    assert!(output.channel(0).unwrap().iter().all(|&s| s == 0.75));
    assert!(output.channel(1).unwrap().iter().all(|&s| s == 0.25));
}

#[test]
fn test_extra_channels_ignored() {
    let buffer = AudioBuffer::from_channels(
        44100,
        vec![vec![0.1; 4], vec![0.2; 4], vec![0.9; 4], vec![0.9; 4]],
    )
    .unwrap();
    let mut mixer = Mixer::new(4, 44100);
    mixer.add_track(Track::unity(buffer));

    let output = mixer.render();
    assert_eq!(output.num_channels(), 2);
    assert!(output.channel(0).unwrap().iter().all(|&s| s == 0.1));
    assert!(output.channel(1).unwrap().iter().all(|&s| s == 0.2));
}

// ============================================================================
// Clipping
// ============================================================================

#[test]
fn test_full_scale_in_phase_clips_to_unity() {
    let mut mixer = Mixer::new(8, 44100);
    mixer.add_track(Track::unity(
        AudioBuffer::mono(44100, vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0]).unwrap(),
    ));
    mixer.add_track(Track::unity(
        AudioBuffer::mono(44100, vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0]).unwrap(),
    ));

    let output = mixer.render();
    for channel in output.channels() {
        for (i, &s) in channel.iter().enumerate() {
            let expected = if i % 2 == 0 { 1.0 } else { -1.0 };
            assert_eq!(s, expected);
        }
    }
}

#[test]
fn test_high_gain_clips() {
    let mut mixer = Mixer::new(4, 44100);
    mixer.add_track(Track::new(
        AudioBuffer::mono(44100, vec![0.8; 4]).unwrap(),
        gain(1.5),
    ));

    let output = mixer.render();
    assert!(output.channels().iter().flatten().all(|&s| s == 1.0));
}

#[test]
fn test_inputs_not_mutated() {
    let buffer = AudioBuffer::mono(44100, vec![0.9; 4]).unwrap();
    let track = Track::new(buffer.clone(), gain(1.5));
    let mut mixer = Mixer::new(4, 44100);
    mixer.add_track(track.clone());
    let _ = mixer.render();
    assert_eq!(track.buffer, buffer);
}
