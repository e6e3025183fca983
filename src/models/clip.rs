use base64::{engine::general_purpose::STANDARD, Engine as _};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::PadError;

/// Fallback MIME type for unknown extensions
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Guess an audio MIME type from a file name's extension
pub fn guess_mime(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("m4a") => "audio/mp4",
        _ => DEFAULT_MIME,
    }
}

/// Reference to the audio bound to a pad.
///
/// Opaque to the mapping store. Clips picked through a file dialog are
/// stored as `data:<mime>;base64,<payload>` URIs so the mapping file is
/// self-contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipRef(String);

impl ClipRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Embed a file's bytes as a base64 data URI
    pub fn from_file(file_name: &str, bytes: &[u8]) -> Self {
        Self(format!(
            "data:{};base64,{}",
            guess_mime(file_name),
            STANDARD.encode(bytes)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type of a data URI, `None` for other references
    pub fn mime(&self) -> Option<&str> {
        let header = self.0.strip_prefix("data:")?.split(',').next()?;
        let mime = header.split(';').next().unwrap_or_default();
        Some(if mime.is_empty() { "text/plain" } else { mime })
    }

    /// Decode a data URI into its MIME type and payload.
    ///
    /// Base64 payloads are decoded; anything else is percent-decoded.
    pub fn decode(&self) -> Result<(String, Vec<u8>), PadError> {
        let rest = self
            .0
            .strip_prefix("data:")
            .ok_or_else(|| PadError::InvalidClip("not a data URI".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| PadError::InvalidClip("data URI has no payload".to_string()))?;

        let mime = self.mime().unwrap_or(DEFAULT_MIME).to_string();
        let bytes = if header.ends_with(";base64") {
            STANDARD
                .decode(payload)
                .map_err(|e| PadError::InvalidClip(e.to_string()))?
        } else {
            percent_decode_str(payload).collect()
        };
        Ok((mime, bytes))
    }
}

impl fmt::Display for ClipRef {
    /// Data URIs are shortened to their MIME type and payload size.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mime() {
            Some(mime) => write!(f, "<{} clip, {} chars>", mime, self.0.len()),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("kick.mp3"), "audio/mpeg");
        assert_eq!(guess_mime("SNARE.WAV"), "audio/wav");
        assert_eq!(guess_mime("pad.ogg"), "audio/ogg");
        assert_eq!(guess_mime("a/b/c.flac"), "audio/flac");
        assert_eq!(guess_mime("loop.m4a"), "audio/mp4");
        assert_eq!(guess_mime("notes.txt"), DEFAULT_MIME);
        assert_eq!(guess_mime("noext"), DEFAULT_MIME);
    }

    #[test]
    fn test_from_file_builds_data_uri() {
        let clip = ClipRef::from_file("kick.mp3", b"ID3");
        assert_eq!(clip.as_str(), "data:audio/mpeg;base64,SUQz");
        assert_eq!(clip.mime(), Some("audio/mpeg"));
    }

    #[test]
    fn test_decode_round_trip() {
        let bytes: Vec<u8> = (0..=255).collect();
        let clip = ClipRef::from_file("tone.wav", &bytes);
        let (mime, decoded) = clip.decode().unwrap();
        assert_eq!(mime, "audio/wav");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_decode_percent_encoded() {
        let clip = ClipRef::new("data:,hello%20world");
        let (mime, decoded) = clip.decode().unwrap();
        assert_eq!(mime, "text/plain");
        assert_eq!(decoded, b"hello world");
    }

    #[test]
    fn test_decode_rejects_plain_reference() {
        let clip = ClipRef::new("samples/kick.mp3");
        assert!(clip.mime().is_none());
        assert!(matches!(clip.decode(), Err(PadError::InvalidClip(_))));
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let clip = ClipRef::new("data:audio/mpeg;base64,!!!");
        assert!(matches!(clip.decode(), Err(PadError::InvalidClip(_))));
    }

    #[test]
    fn test_display_shortens_data_uri() {
        let clip = ClipRef::from_file("kick.mp3", b"ID3");
        assert_eq!(clip.to_string(), "<audio/mpeg clip, 27 chars>");
        assert_eq!(ClipRef::new("x.mp3").to_string(), "x.mp3");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let clip = ClipRef::new("data:,a");
        assert_eq!(serde_json::to_string(&clip).unwrap(), "\"data:,a\"");
    }
}
