//! beatmix CLI library.
//!
//! This crate provides the command implementations behind the `beatmix`
//! binary: mixing two audio files into a WAV, inspecting WAV output, loading
//! mix configuration files and installing the log subscriber.

pub mod commands;
pub mod config;
pub mod logging;
