use crate::error::PadError;
use crate::models::ClipRef;

/// Plays the clip bound to a pad
pub trait AudioPlayer: Send {
    fn play(&mut self, pad: u8, clip: &ClipRef) -> Result<(), PadError>;
}

/// Player that only logs what would be played.
///
/// Data URI clips are decoded so a corrupt mapping is reported at trigger
/// time, the same moment a real player would fail.
#[derive(Debug, Default)]
pub struct LogPlayer {
    played: usize,
}

impl LogPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of clips played so far
    pub fn played(&self) -> usize {
        self.played
    }
}

impl AudioPlayer for LogPlayer {
    fn play(&mut self, pad: u8, clip: &ClipRef) -> Result<(), PadError> {
        if clip.mime().is_some() {
            let (mime, bytes) = clip.decode()?;
            tracing::info!(pad, %mime, bytes = bytes.len(), "Playing clip");
        } else {
            tracing::info!(pad, clip = clip.as_str(), "Playing clip");
        }
        self.played += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_player_counts() {
        let mut player = LogPlayer::new();
        player
            .play(36, &ClipRef::from_file("kick.mp3", b"ID3"))
            .unwrap();
        player.play(37, &ClipRef::new("samples/snare.wav")).unwrap();
        assert_eq!(player.played(), 2);
    }

    #[test]
    fn test_log_player_rejects_corrupt_clip() {
        let mut player = LogPlayer::new();
        let err = player
            .play(36, &ClipRef::new("data:audio/mpeg;base64,%%%"))
            .unwrap_err();
        assert!(matches!(err, PadError::InvalidClip(_)));
        assert_eq!(player.played(), 0);
    }
}
