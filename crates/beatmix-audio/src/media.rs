//! Upload media type checks.

/// MIME types accepted as mix inputs.
pub const SUPPORTED_AUDIO_TYPES: &[&str] = &[
    "audio/webm",
    "audio/mp3",
    "audio/mpeg",
    "audio/wav",
    "audio/wave",
    "audio/ogg",
    "audio/flac",
    "audio/aac",
    "audio/m4a",
];

/// True if `mime_type` names a supported audio type.
///
/// Matches by substring so parameters such as `audio/webm;codecs=opus` pass.
pub fn is_valid_audio_type(mime_type: &str) -> bool {
    let mime = mime_type.to_ascii_lowercase();
    SUPPORTED_AUDIO_TYPES.iter().any(|t| mime.contains(t))
}

/// Maps a file extension to its audio MIME type.
pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
    let mime = match extension.to_ascii_lowercase().as_str() {
        "wav" | "wave" => "audio/wav",
        "mp3" => "audio/mpeg",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "aac" => "audio/aac",
        "m4a" | "mp4" => "audio/m4a",
        "webm" => "audio/webm",
        _ => return None,
    };
    Some(mime)
}
