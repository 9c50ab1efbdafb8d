//! Tests for the two-input mix entry point.

use super::*;
use crate::buffer::AudioBuffer;
use crate::context::RenderHost;
use crate::error::{InputSlot, MixingError};
use crate::gain::Gain;

fn gain(value: f32) -> Gain {
    Gain::new(value).unwrap()
}

#[test]
fn test_output_length_is_longer_input() {
    let a = AudioBuffer::mono(44100, vec![0.1; 44100]).unwrap();
    let b = AudioBuffer::mono(44100, vec![0.1; 66150]).unwrap();
    let out = mix(&a, Gain::UNITY, &b, Gain::UNITY).unwrap();
    assert_eq!(out.len(), 66150);
    assert_eq!(out.sample_rate(), 44100);

    let out = mix(&b, Gain::UNITY, &a, Gain::UNITY).unwrap();
    assert_eq!(out.len(), 66150);
}

#[test]
fn test_output_always_stereo() {
    let mono = AudioBuffer::mono(8000, vec![0.1; 10]).unwrap();
    let stereo = AudioBuffer::stereo(8000, vec![0.1; 10], vec![0.2; 10]).unwrap();
    let quad = AudioBuffer::silence(8000, 4, 10).unwrap();

    for (a, b) in [(&mono, &mono), (&mono, &stereo), (&stereo, &quad), (&quad, &quad)] {
        let out = mix(a, Gain::UNITY, b, Gain::UNITY).unwrap();
        assert_eq!(out.num_channels(), 2);
    }
}

#[test]
fn test_silent_gain_yields_other_input() {
    let a = AudioBuffer::mono(44100, vec![0.7; 50]).unwrap();
    let b_left: Vec<f32> = (0..100).map(|i| (i as f32 * 0.1).sin() * 0.8).collect();
    let b_right: Vec<f32> = b_left.iter().map(|s| -s).collect();
    let b = AudioBuffer::stereo(44100, b_left.clone(), b_right.clone()).unwrap();

    let out = mix(&a, Gain::SILENT, &b, Gain::UNITY).unwrap();
    assert_eq!(out.len(), 100);
    for (x, y) in out.channel(0).unwrap().iter().zip(&b_left) {
        assert!((x - y).abs() < 1e-6);
    }
    for (x, y) in out.channel(1).unwrap().iter().zip(&b_right) {
        assert!((x - y).abs() < 1e-6);
    }
}

#[test]
fn test_silent_gain_extends_shorter_input_with_silence() {
    let a = AudioBuffer::mono(44100, vec![0.7; 100]).unwrap();
    let b = AudioBuffer::mono(44100, vec![0.3; 60]).unwrap();

    let out = mix(&a, Gain::SILENT, &b, Gain::UNITY).unwrap();
    let left = out.channel(0).unwrap();
    assert_eq!(left.len(), 100);
    assert!(left[..60].iter().all(|&s| (s - 0.3).abs() < 1e-6));
    assert!(left[60..].iter().all(|&s| s == 0.0));
}

#[test]
fn test_full_scale_in_phase_clamps() {
    let a = AudioBuffer::mono(44100, vec![1.0, -1.0, 0.9, -0.9]).unwrap();
    let out = mix(&a, Gain::UNITY, &a, Gain::UNITY).unwrap();
    assert_eq!(out.channel(0).unwrap(), &[1.0, -1.0, 1.0, -1.0]);
    assert!(out.channels().iter().flatten().all(|s| s.abs() <= 1.0));
}

#[test]
fn test_empty_inputs_rejected() {
    let good = AudioBuffer::mono(44100, vec![0.1; 10]).unwrap();
    let empty = AudioBuffer::mono(44100, Vec::new()).unwrap();
    let no_channels = AudioBuffer::from_channels(44100, Vec::new()).unwrap();

    assert_eq!(
        mix(&empty, Gain::UNITY, &good, Gain::UNITY).unwrap_err(),
        MixingError::EmptyInput { slot: InputSlot::A }
    );
    assert_eq!(
        mix(&good, Gain::UNITY, &no_channels, Gain::UNITY).unwrap_err(),
        MixingError::EmptyInput { slot: InputSlot::B }
    );
}

#[test]
fn test_mismatched_rates_resampled_to_higher() {
    let a = AudioBuffer::mono(22050, vec![0.5; 22050]).unwrap();
    let b = AudioBuffer::mono(44100, vec![0.25; 22050]).unwrap();

    let out = mix(&a, Gain::UNITY, &b, Gain::UNITY).unwrap();
    assert_eq!(out.sample_rate(), 44100);
    // a lasts 1 s, b lasts 0.5 s
    assert_eq!(out.len(), 44100);
    let left = out.channel(0).unwrap();
    assert!((left[100] - 0.75).abs() < 1e-5);
    assert!((left[30000] - 0.5).abs() < 1e-5);
}

#[test]
fn test_explicit_output_rate() {
    let engine = MixEngine::new(MixOptions {
        sample_rate: Some(8000),
    });
    let a = AudioBuffer::mono(16000, vec![0.2; 16000]).unwrap();
    let b = AudioBuffer::mono(16000, vec![0.2; 8000]).unwrap();

    let out = engine.mix(&a, gain(0.5), &b, gain(0.5)).unwrap();
    assert_eq!(out.sample_rate(), 8000);
    assert_eq!(out.len(), 8000);
}

#[test]
fn test_context_released_after_success_and_failure() {
    let host = RenderHost::new();
    let engine = MixEngine::with_host(host.clone(), MixOptions::default());
    let a = AudioBuffer::mono(44100, vec![0.1; 10]).unwrap();

    engine.mix(&a, Gain::UNITY, &a, Gain::UNITY).unwrap();
    assert_eq!(host.live_contexts(), 0);

    let zero_rate = MixEngine::with_host(
        host.clone(),
        MixOptions {
            sample_rate: Some(0),
        },
    );
    assert!(matches!(
        zero_rate.mix(&a, Gain::UNITY, &a, Gain::UNITY),
        Err(MixingError::ContextUnavailable { .. })
    ));
    assert_eq!(host.live_contexts(), 0);
}

#[test]
fn test_host_at_capacity_fails() {
    let host = RenderHost::with_capacity(1);
    let _held = host.acquire(44100).unwrap();
    let engine = MixEngine::with_host(host.clone(), MixOptions::default());
    let a = AudioBuffer::mono(44100, vec![0.1; 10]).unwrap();

    assert!(matches!(
        engine.mix(&a, Gain::UNITY, &a, Gain::UNITY),
        Err(MixingError::ContextUnavailable { .. })
    ));
    assert_eq!(host.live_contexts(), 1);
}

#[test]
fn test_mix_is_deterministic() {
    let a = AudioBuffer::mono(44100, (0..500).map(|i| (i as f32 * 0.01).sin()).collect()).unwrap();
    let b = AudioBuffer::mono(44100, (0..300).map(|i| (i as f32 * 0.03).cos()).collect()).unwrap();
    let first = mix(&a, gain(0.8), &b, gain(0.6)).unwrap();
    let second = mix(&a, gain(0.8), &b, gain(0.6)).unwrap();
    assert_eq!(first, second);
}
