//! # NMEA 0183 Stream Parser
//!
//! This library turns a byte stream from a GNSS receiver into a decoded position fix. It
//! expects sentences of the form `$HHH,D1,D2,...,Dn*CC\r\n`.
//!
//! The pipeline is split into independent stages:
//! - [`Framer`]: accumulates bytes and validates the `*CC` checksum
//! - [`split`]: breaks a validated sentence into [`Fields`]
//! - [`decode`]: turns the fields into a typed [`Sentence`]
//! - [`FixRecord`]: merges every decoded sentence into one running fix
//!
//! [`NmeaParser`] drives all of them for a single stream.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_stream::{NmeaParser, Sentence, SentenceKind};
//!
//! let mut parser = NmeaParser::new();
//! let input = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
//!
//! for &byte in input {
//!     if parser.process_byte(byte) {
//!         match parser.decode() {
//!             Some(Sentence::GGA(gga)) => assert_eq!(gga.fix_quality, 1),
//!             _ => unreachable!(),
//!         }
//!     }
//! }
//!
//! let record = parser.record();
//! assert_eq!(record.kind, SentenceKind::GGA);
//! assert!((record.latitude - 48.1173).abs() < 1e-4);
//! assert_eq!(record.lat_dir, Some('N'));
//! assert_eq!(record.altitude, 545.4);
//! ```

pub mod error;
mod nmea0183;
pub mod nmea_content;
mod parser;
pub mod parsing;
mod record;
mod source;
pub mod tokenizer;

pub use error::Error;
pub use nmea0183::{Framer, FramingMode, NMEA_MAX_LENGTH, checksum, format_checksum};
pub use nmea_content::{Satellite, Sentence, SentenceKind, decode, decode_into};
pub use parser::{NmeaParser, NmeaParserBuilder, RecordPolicy};
pub use record::{FixRecord, MAX_SATELLITES};
pub use source::{ByteSource, ReadSource};
pub use tokenizer::{Fields, split};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod framer;
    mod gsv;
    mod scenarios;
    mod source;
}
