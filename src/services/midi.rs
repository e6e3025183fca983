use midly::live::LiveEvent;
use midly::MidiMessage;

/// A pad press decoded from a raw MIDI message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteOn {
    pub channel: u8,
    pub note: u8,
    pub velocity: u8,
}

/// Decode a pad press.
///
/// Returns `None` for anything that is not a note-on with non-zero
/// velocity: other message types, note-on with velocity 0 (a release on
/// controllers that never send note-off), and malformed bytes.
pub fn parse_note_on(raw: &[u8]) -> Option<NoteOn> {
    let event = match LiveEvent::parse(raw) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!(?raw, %e, "Ignoring malformed MIDI message");
            return None;
        }
    };

    match event {
        LiveEvent::Midi {
            channel,
            message: MidiMessage::NoteOn { key, vel },
        } if vel.as_int() > 0 => Some(NoteOn {
            channel: channel.as_int(),
            note: key.as_int(),
            velocity: vel.as_int(),
        }),
        other => {
            tracing::trace!(event = ?other, "Ignoring MIDI event");
            None
        }
    }
}

/// Parse a line of hex bytes such as `90 63 7f`.
///
/// Blank lines and lines starting with `#` yield `None`, as do lines with
/// a token that is not a hex byte.
pub fn parse_hex_line(line: &str) -> Option<Vec<u8>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let token = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            u8::from_str_radix(token, 16).ok()
        })
        .collect()
}
