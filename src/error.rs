//! # Error Types
//!
//! This module defines the reasons a sentence can be discarded while it is being framed.
//!
//! None of these errors are fatal: the framer resets itself and carries on with the next
//! sentence. They are reported so callers can count or log dropped input.

use thiserror::Error;

/// Represents all the ways an in-progress sentence can be discarded.
///
/// An unrecognized sentence type is *not* an error: it is decoded as
/// [`SentenceKind::Unknown`](crate::SentenceKind::Unknown) and passed through.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The sentence did not terminate before the accumulation buffer filled up.
    ///
    /// The buffered bytes are dropped and, when the framer is driven by an
    /// [`NmeaParser`](crate::NmeaParser), the fix record is cleared as well.
    #[error("sentence exceeded the {capacity} byte buffer")]
    BufferOverflow {
        /// Capacity of the accumulation buffer in bytes
        capacity: usize,
    },

    /// One of the two bytes following `*` was not a hexadecimal digit.
    ///
    /// Contains both bytes as they were received.
    #[error("invalid checksum digits {found:02X?}")]
    InvalidChecksum {
        /// The raw bytes found after the `*` delimiter
        found: [u8; 2],
    },

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the message content)
    /// and the actual checksum found in the message.
    #[error("checksum mismatch: expected {expected:02X}, found {found:02X}")]
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },
}
