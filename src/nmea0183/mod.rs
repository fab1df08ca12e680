//! # NMEA 0183 Sentence Framer
//!
//! This module turns a byte stream into validated NMEA 0183 sentences of the form
//! `$HHH,D1,D2,...,Dn*CC`.
//!
//! Bytes are fed one at a time. Printable ASCII is accumulated; everything else, including
//! the `\r\n` terminator, is dropped. A sentence ends at `*`: the two bytes that follow are
//! read as the hexadecimal checksum and compared with the XOR of the sentence body.

use log::{debug, trace};
use nom::{AsBytes, Input, Parser, combinator::all_consuming, number::complete::hex_u32};

use crate::Error;

/// Capacity of the accumulation buffer in bytes.
///
/// A sentence is discarded once it has accumulated `NMEA_MAX_LENGTH - 1` bytes without
/// reaching its checksum.
pub const NMEA_MAX_LENGTH: usize = 512;

/// Defines how the framer treats the `$` start delimiter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FramingMode {
    /// Every printable byte is accumulated, wherever it appears.
    ///
    /// The first accumulated byte is assumed to be the `$` and is left out of the checksum.
    /// Noise before a sentence therefore makes that sentence fail its checksum.
    ///
    /// This is the default.
    #[default]
    Raw,

    /// A `$` always starts a new sentence.
    ///
    /// Any partially accumulated sentence is discarded when a `$` arrives, and bytes received
    /// before the first `$` are ignored. Use this mode on links that may start mid-sentence
    /// or carry noise between sentences.
    Resync,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum FrameState {
    /// Accumulating the sentence body
    #[default]
    Collecting,
    /// `*` seen, waiting for the first checksum digit
    ChecksumHigh,
    /// First checksum digit received
    ChecksumLow { high: u8 },
}

/// Incremental sentence framer.
///
/// The framer owns a fixed 512-byte buffer and never allocates.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::Framer;
///
/// let mut framer = Framer::new();
/// let mut sentence = None;
///
/// for &byte in b"$GPZDA,201530.00,04,07,2002,00,00*60\r\n" {
///     if let Ok(Some(text)) = framer.feed(byte) {
///         sentence = Some(text.to_string());
///     }
/// }
///
/// assert_eq!(sentence.as_deref(), Some("$GPZDA,201530.00,04,07,2002,00,00*"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Framer {
    buffer: heapless::String<NMEA_MAX_LENGTH>,
    state: FrameState,
    complete: bool,
    mode: FramingMode,
}

impl Framer {
    /// Creates a framer in [`FramingMode::Raw`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a framer with the given framing mode.
    pub fn with_mode(mode: FramingMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// The framing mode this framer was created with.
    pub fn mode(&self) -> FramingMode {
        self.mode
    }

    /// Drops any buffered input and returns to the initial state.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = FrameState::Collecting;
        self.complete = false;
    }

    /// Number of bytes accumulated for the sentence in progress.
    pub fn len(&self) -> usize {
        if self.complete { 0 } else { self.buffer.len() }
    }

    /// Whether no bytes are buffered for a sentence in progress.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a validated sentence is waiting to be decoded.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The validated sentence, from `$` up to and including `*`, if one is waiting.
    pub fn sentence(&self) -> Option<&str> {
        self.complete.then_some(self.buffer.as_str())
    }

    /// Marks the waiting sentence as consumed.
    pub fn clear_complete(&mut self) {
        if self.complete {
            self.complete = false;
            self.buffer.clear();
        }
    }

    /// Feeds one byte to the framer.
    ///
    /// Returns:
    /// - `Ok(Some(sentence))` when `byte` was the second checksum digit of a valid sentence
    /// - `Ok(None)` while a sentence is still being accumulated
    /// - `Err(_)` when the sentence in progress had to be discarded
    ///
    /// A sentence that was completed but not consumed with [`Framer::clear_complete`] is
    /// dropped as soon as the next byte arrives.
    pub fn feed(&mut self, byte: u8) -> Result<Option<&str>, Error> {
        if self.complete {
            debug!("Dropping undecoded sentence {:?}", self.buffer.as_str());
            self.clear_complete();
        }

        match self.state {
            FrameState::Collecting => self.collect(byte),
            FrameState::ChecksumHigh | FrameState::ChecksumLow { .. }
                if self.mode == FramingMode::Resync && byte == b'$' =>
            {
                let found = match self.state {
                    FrameState::ChecksumLow { high } => [high, byte],
                    _ => [byte, 0],
                };
                debug!("Sentence restarted before its checksum, discarding");
                self.reset();
                self.collect(byte)?;
                Err(Error::InvalidChecksum { found })
            }
            FrameState::ChecksumHigh => {
                self.state = FrameState::ChecksumLow { high: byte };
                Ok(None)
            }
            FrameState::ChecksumLow { high } => {
                self.state = FrameState::Collecting;
                self.finish([high, byte])
            }
        }
    }

    fn collect(&mut self, byte: u8) -> Result<Option<&str>, Error> {
        if self.mode == FramingMode::Resync {
            if byte == b'$' {
                if !self.buffer.is_empty() {
                    debug!("Sentence restarted, discarding {:?}", self.buffer.as_str());
                }
                self.buffer.clear();
            } else if self.buffer.is_empty() {
                return Ok(None);
            }
        }

        if self.buffer.len() >= NMEA_MAX_LENGTH - 1 {
            debug!("Buffer overflow, discarding {} bytes", self.buffer.len());
            self.reset();
            return Err(Error::BufferOverflow {
                capacity: NMEA_MAX_LENGTH,
            });
        }

        if is_printable(byte) {
            // The overflow check above leaves room for this byte.
            let _ = self.buffer.push(byte as char);
        }

        if byte == b'*' {
            self.state = FrameState::ChecksumHigh;
        }

        Ok(None)
    }

    fn finish(&mut self, digits: [u8; 2]) -> Result<Option<&str>, Error> {
        let Some(found) = parse_checksum(&digits) else {
            debug!("Invalid checksum format {digits:02X?}, discarding current message");
            self.reset();
            return Err(Error::InvalidChecksum { found: digits });
        };

        let body = self.buffer.as_bytes();
        let (_, expected) = checksum(body.get(1..body.len().saturating_sub(1)).unwrap_or_default());

        if expected != found {
            debug!("Invalid checksum (expected {expected:02X}, found {found:02X}), discarding");
            self.reset();
            return Err(Error::ChecksumMismatch { expected, found });
        }

        trace!("Complete NMEA sentence received: {}", self.buffer);
        self.complete = true;
        Ok(Some(self.buffer.as_str()))
    }
}

fn is_printable(byte: u8) -> bool {
    (32..=126).contains(&byte)
}

/// Parses exactly two hexadecimal digits.
fn parse_checksum(digits: &[u8]) -> Option<u8> {
    let parsed: nom::IResult<&[u8], u32> = all_consuming(hex_u32).parse(digits);

    parsed
        .ok()
        .filter(|_| digits.len() == 2)
        .map(|(_, cc)| cc as u8)
}

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The NMEA 0183 checksum is the XOR of all bytes in the message content: everything between
/// the `$` prefix and the `*` checksum delimiter, excluding both.
///
/// # Returns
///
/// A tuple of (input, checksum) where:
/// - `input` is returned unchanged (zero-copy)
/// - `checksum` is the calculated XOR value as a u8
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::checksum;
///
/// let (_, cc) = checksum("GPGGA,123456,data");
/// assert_eq!(cc, 0x41);
///
/// let (_, cc) = checksum(&b"GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,"[..]);
/// assert_eq!(cc, 0x47);
/// ```
pub fn checksum<I>(input: I) -> (I, u8)
where
    I: Input + AsBytes,
{
    let calculated_checksum = input
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte);

    (input, calculated_checksum)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checksum() {
        let cases = [
            (*b"47", Some(0x47)),
            (*b"00", Some(0x00)),
            (*b"ff", Some(0xFF)),
            (*b"Fa", Some(0xFA)),
            (*b"4G", None),
            (*b"\r\n", None),
            (*b"+4", None),
            (*b" 4", None),
        ];

        for (digits, expected) in cases {
            assert_eq!(parse_checksum(&digits), expected, "Failed: {digits:?}");
        }
    }

    #[test]
    fn test_checksum_str_and_bytes_agree() {
        let body = "GPZDA,201530.00,04,07,2002,00,00";
        assert_eq!(checksum(body).1, checksum(body.as_bytes()).1);
        assert_eq!(format_checksum(checksum(body).1), "60");
    }

    #[test]
    fn test_printable_range() {
        assert!(is_printable(b' '));
        assert!(is_printable(b'~'));
        assert!(!is_printable(b'\r'));
        assert!(!is_printable(b'\n'));
        assert!(!is_printable(0x7F));
        assert!(!is_printable(0xFF));
    }
}
