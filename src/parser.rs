//! # Streaming Parser
//!
//! [`NmeaParser`] ties a [`Framer`] to a [`FixRecord`]: bytes go in one at a time, and every
//! validated sentence can be decoded into the record.

use log::trace;

use crate::{ByteSource, Error, FixRecord, Framer, FramingMode, Sentence, nmea_content};

/// Defines what happens to record fields a decoded sentence does not carry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RecordPolicy {
    /// Fields not carried by the sentence keep their previous values.
    ///
    /// The record is a "current fix" assembled from every sentence type seen so far.
    ///
    /// This is the default.
    #[default]
    Accumulate,

    /// The record is cleared before each sentence is merged.
    ///
    /// The satellite list survives a GSV page other than the first, so that a multi-page
    /// group can still be reassembled.
    Fresh,
}

/// A builder for configuring an [`NmeaParser`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{FramingMode, NmeaParserBuilder, RecordPolicy};
///
/// // Defaults: raw framing, accumulating record
/// let parser = NmeaParserBuilder::new().build();
/// assert_eq!(parser.framer().mode(), FramingMode::Raw);
/// assert_eq!(parser.record_policy(), RecordPolicy::Accumulate);
///
/// // Resynchronize on `$` and only keep the values of the last sentence
/// let parser = NmeaParserBuilder::new()
///     .framing_mode(FramingMode::Resync)
///     .record_policy(RecordPolicy::Fresh)
///     .build();
/// assert_eq!(parser.framer().mode(), FramingMode::Resync);
/// assert_eq!(parser.record_policy(), RecordPolicy::Fresh);
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct NmeaParserBuilder {
    /// How the framer treats the `$` start delimiter.
    framing_mode: FramingMode,

    /// What happens to record fields a sentence does not carry.
    record_policy: RecordPolicy,
}

impl NmeaParserBuilder {
    /// Creates a new builder with default settings.
    ///
    /// The default settings are:
    /// - Framing mode: [`FramingMode::Raw`]
    /// - Record policy: [`RecordPolicy::Accumulate`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the framing mode.
    ///
    /// # Arguments
    ///
    /// * `mode` - The desired framing mode:
    ///   - [`FramingMode::Raw`]: every printable byte is accumulated
    ///   - [`FramingMode::Resync`]: a `$` always starts a new sentence
    pub fn framing_mode(mut self, mode: FramingMode) -> Self {
        self.framing_mode = mode;
        self
    }

    /// Sets the record policy.
    ///
    /// # Arguments
    ///
    /// * `policy` - The desired record policy:
    ///   - [`RecordPolicy::Accumulate`]: missing fields keep their previous values
    ///   - [`RecordPolicy::Fresh`]: the record only holds the last sentence
    pub fn record_policy(mut self, policy: RecordPolicy) -> Self {
        self.record_policy = policy;
        self
    }

    /// Builds the parser with the configured settings.
    pub fn build(self) -> NmeaParser {
        NmeaParser {
            framer: Framer::with_mode(self.framing_mode),
            record: FixRecord::new(),
            policy: self.record_policy,
            last_error: None,
        }
    }
}

/// Byte-at-a-time NMEA 0183 parser.
///
/// Each parser owns its own buffer and record, so independent streams need independent
/// parsers.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{NmeaParser, SentenceKind};
///
/// let mut parser = NmeaParser::new();
///
/// for &byte in b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n" {
///     if parser.process_byte(byte) {
///         parser.decode();
///     }
/// }
///
/// let record = parser.record();
/// assert_eq!(record.kind, SentenceKind::GGA);
/// assert_eq!(record.utc_time, "123519");
/// assert_eq!(record.num_satellites, 8);
/// ```
#[derive(Debug, Default, Clone)]
pub struct NmeaParser {
    framer: Framer,
    record: FixRecord,
    policy: RecordPolicy,
    last_error: Option<Error>,
}

impl NmeaParser {
    /// Creates a parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder to configure a parser.
    pub fn builder() -> NmeaParserBuilder {
        NmeaParserBuilder::new()
    }

    /// Drops any buffered input and zeroes the record.
    ///
    /// The configuration is kept.
    pub fn init(&mut self) {
        self.framer.reset();
        self.record.clear();
        self.last_error = None;
    }

    /// Feeds one byte.
    ///
    /// Returns `true` when `byte` completed a sentence with a valid checksum. The sentence can
    /// then be decoded with [`Self::decode`]; it is dropped if another byte is fed first.
    ///
    /// A sentence that overflows the buffer also zeroes the record.
    pub fn process_byte(&mut self, byte: u8) -> bool {
        match self.framer.feed(byte) {
            Ok(sentence) => sentence.is_some(),
            Err(error) => {
                if let Error::BufferOverflow { .. } = error {
                    self.record.clear();
                }
                self.last_error = Some(error);
                false
            }
        }
    }

    /// Whether a validated sentence is waiting to be decoded.
    pub fn is_complete(&self) -> bool {
        self.framer.is_complete()
    }

    /// The validated sentence waiting to be decoded, if any.
    pub fn sentence(&self) -> Option<&str> {
        self.framer.sentence()
    }

    /// Decodes the waiting sentence and merges it into the record.
    ///
    /// Returns [`None`] if no sentence is waiting.
    pub fn decode(&mut self) -> Option<Sentence> {
        let sentence = nmea_content::decode(self.framer.sentence()?);
        trace!("Decoded {:?} sentence", sentence.kind());

        if self.policy == RecordPolicy::Fresh {
            let keep_satellites = matches!(&sentence, Sentence::GSV(gsv) if gsv.now_page != 1);
            let satellites = core::mem::take(&mut self.record.satellite_info);

            self.record.clear();
            if keep_satellites {
                self.record.satellite_info = satellites;
            }
        }

        self.record.apply(&sentence);
        self.framer.clear_complete();

        Some(sentence)
    }

    /// Feeds every byte `source` has available, decoding each completed sentence.
    ///
    /// Returns the number of sentences decoded.
    pub fn read_from<S: ByteSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let mut decoded = 0;

        while source.available() {
            let Some(byte) = source.read() else {
                break;
            };

            if self.process_byte(byte) && self.decode().is_some() {
                decoded += 1;
            }
        }

        decoded
    }

    /// The record assembled from every decoded sentence.
    pub fn record(&self) -> &FixRecord {
        &self.record
    }

    /// The reason the last discarded sentence was dropped, if any.
    pub fn last_error(&self) -> Option<Error> {
        self.last_error
    }

    /// The framer holding the sentence in progress.
    pub fn framer(&self) -> &Framer {
        &self.framer
    }

    /// The record policy this parser was built with.
    pub fn record_policy(&self) -> RecordPolicy {
        self.policy
    }
}
