//! Tests for clipping, normalization and fades.

use super::*;
use crate::buffer::AudioBuffer;

#[test]
fn test_hard_clip_range() {
    assert_eq!(hard_clip(0.5), 0.5);
    assert_eq!(hard_clip(1.0), 1.0);
    assert_eq!(hard_clip(1.7), 1.0);
    assert_eq!(hard_clip(-1.0), -1.0);
    assert_eq!(hard_clip(-3.0), -1.0);
}

#[test]
fn test_hard_clip_buffer() {
    let mut samples = vec![2.0, -2.0, 0.25];
    hard_clip_buffer(&mut samples);
    assert_eq!(samples, vec![1.0, -1.0, 0.25]);
}

#[test]
fn test_normalize_to_target() {
    let mut buffer = AudioBuffer::stereo(44100, vec![0.5, -0.3], vec![0.2, -0.25]).unwrap();
    normalize(&mut buffer, DEFAULT_NORMALIZE_TARGET);
    assert!((buffer.peak() - 0.9).abs() < 1e-6);
    // Relative levels are preserved
    let left = buffer.channel(0).unwrap();
    assert!((left[1] / left[0] + 0.6).abs() < 1e-5);
}

#[test]
fn test_normalize_silent_buffer_unchanged() {
    let mut buffer = AudioBuffer::silence(44100, 2, 16).unwrap();
    normalize(&mut buffer, 0.9);
    assert!(buffer.channels().iter().flatten().all(|&s| s == 0.0));
}

#[test]
fn test_normalize_target_clamped() {
    let mut buffer = AudioBuffer::mono(44100, vec![0.1, -0.2]).unwrap();
    normalize(&mut buffer, 5.0);
    assert!((buffer.peak() - 1.0).abs() < 1e-6);
}

#[test]
fn test_fade_in_and_out() {
    let mut buffer = AudioBuffer::mono(44100, vec![1.0; 8]).unwrap();
    apply_fade(&mut buffer, 4, 4);
    let samples = buffer.channel(0).unwrap();
    assert_eq!(samples, &[0.0, 0.25, 0.5, 0.75, 1.0, 0.75, 0.5, 0.25]);
}

#[test]
fn test_fade_longer_than_buffer() {
    let mut buffer = AudioBuffer::mono(44100, vec![1.0; 2]).unwrap();
    apply_fade(&mut buffer, 0, 4);
    // Only the tail of the ramp lands inside the buffer
    assert_eq!(buffer.channel(0).unwrap(), &[0.5, 0.25]);
}

#[test]
fn test_fade_applies_to_every_channel() {
    let mut buffer = AudioBuffer::stereo(44100, vec![1.0; 4], vec![-1.0; 4]).unwrap();
    apply_fade(&mut buffer, 2, 0);
    assert_eq!(buffer.channel(0).unwrap(), &[0.0, 0.5, 1.0, 1.0]);
    assert_eq!(buffer.channel(1).unwrap(), &[0.0, -0.5, -1.0, -1.0]);
}

#[test]
fn test_long_fade_out_on_short_buffer() {
    let mut buffer = AudioBuffer::stereo(44100, vec![1.0; 10], vec![1.0; 10]).unwrap();
    apply_fade(&mut buffer, 0, 800_000_000);
    for channel in buffer.channels() {
        for (idx, &sample) in channel.iter().enumerate() {
            let expected = ((10 - idx) as f64 / 800_000_000.0) as f32;
            assert_eq!(sample, expected);
            assert!(sample > 0.0);
        }
    }

    let mut buffer = AudioBuffer::mono(44100, vec![1.0; 10]).unwrap();
    apply_fade(&mut buffer, usize::MAX, usize::MAX);
    assert!(buffer.channel(0).unwrap().iter().all(|s| s.is_finite() && *s >= 0.0));
}
