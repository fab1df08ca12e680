//! # NMEA Content Decoding
//!
//! Turns the text of a validated sentence into a strongly-typed [`Sentence`].
//!
//! The framing step (see [`Framer`](crate::Framer)) guarantees the checksum is correct; this
//! module only looks at the fields. Field extraction is positional and lenient: a missing or
//! malformed field decodes as zero (or empty text) instead of rejecting the sentence, which
//! matches how the decoded values are merged into a running [`FixRecord`](crate::FixRecord).

mod parse;
mod sentences;

pub use parse::{latitude, longitude};
pub use sentences::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FixRecord, parsing::int_field, split, tokenizer::Fields};

/// A trait for sentence types that can be extracted from tokenized fields.
///
/// Field `0` is always the `$` + talker id + sentence id, so the payload starts at field `1`.
pub trait FromFields: Sized {
    /// Builds `Self` from the fields of one sentence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nmea0183_stream::{split, nmea_content::{FromFields, ZDA}};
    ///
    /// let fields = split("$GPZDA,201530.00,04,07,2002,00,00*", '*', ',');
    /// let zda = ZDA::from_fields(&fields);
    /// assert_eq!(zda.utc_time, "201530.00");
    /// ```
    fn from_fields(fields: &Fields) -> Self;
}

macro_rules! sentence_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $id:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            /// Any sentence id not listed below
            #[default]
            Unknown,
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Maps a three-letter sentence id to its kind.
            pub fn from_id(id: &str) -> Self {
                match id {
                    $($id => Self::$variant,)*
                    _ => Self::Unknown,
                }
            }

            /// The three-letter sentence id, or `None` for [`Self::Unknown`].
            pub fn id(&self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($id),)*
                    Self::Unknown => None,
                }
            }
        }
    };
}

sentence_kinds! {
    /// The sentence types this decoder understands.
    pub enum SentenceKind {
        /// Global Positioning System Fix Data
        "GGA" => GGA,
        /// Recommended Minimum Navigation Information
        "RMC" => RMC,
        /// Geographic Position - Latitude/Longitude
        "GLL" => GLL,
        /// GPS DOP and active satellites
        "GSA" => GSA,
        /// Satellites in View
        "GSV" => GSV,
        /// Track made good and Ground speed
        "VTG" => VTG,
        /// Time & Date
        "ZDA" => ZDA,
        /// Text transmission
        "TXT" => TXT,
    }
}

/// The fields decoded from a single sentence, tagged by its kind.
///
/// Unlike [`FixRecord`], a `Sentence` only carries values that were present in the sentence
/// it was decoded from, so nothing in it can be left over from an earlier sentence.
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                              | Fields used                          |
/// |--------------|--------------------------------------------|--------------------------------------|
/// | GGA([`GGA`]) | Global Positioning System Fix Data         | time, position, quality, altitude    |
/// | RMC([`RMC`]) | Recommended Minimum Navigation Information | time, position, speed, course, date  |
/// | GLL([`GLL`]) | Geographic Position - Latitude/Longitude   | raw position, time                   |
/// | GSA([`GSA`]) | GPS DOP and active satellites              | active PRNs, dilution of precision   |
/// | GSV([`GSV`]) | Satellites in View                         | paging, satellites on this page      |
/// | VTG([`VTG`]) | Track made good and Ground speed           | course, speed                        |
/// | ZDA([`ZDA`]) | Time & Date                                | time                                 |
/// | TXT([`TXT`]) | Text transmission                          | message text                         |
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Sentence {
    GGA(GGA),
    RMC(RMC),
    GLL(GLL),
    GSA(GSA),
    GSV(GSV),
    VTG(VTG),
    ZDA(ZDA),
    TXT(TXT),
    /// A well-formed sentence with an id this decoder does not handle
    Unknown,
}

impl Sentence {
    /// The kind tag of this sentence.
    pub fn kind(&self) -> SentenceKind {
        match self {
            Sentence::GGA(_) => SentenceKind::GGA,
            Sentence::RMC(_) => SentenceKind::RMC,
            Sentence::GLL(_) => SentenceKind::GLL,
            Sentence::GSA(_) => SentenceKind::GSA,
            Sentence::GSV(_) => SentenceKind::GSV,
            Sentence::VTG(_) => SentenceKind::VTG,
            Sentence::ZDA(_) => SentenceKind::ZDA,
            Sentence::TXT(_) => SentenceKind::TXT,
            Sentence::Unknown => SentenceKind::Unknown,
        }
    }
}

/// Satellite information used in [`GSV`] sentences and [`FixRecord::satellite_info`]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Satellite {
    /// Satellite PRN number
    pub prn: i32,
    /// Elevation in degrees
    pub elevation: i32,
    /// Azimuth in degrees true
    pub azimuth: i32,
    /// Signal to noise ratio in dB-Hz
    pub snr: i32,
}

impl Satellite {
    /// Reads the four satellite fields starting at `start`.
    pub(crate) fn from_fields_at(fields: &Fields, start: usize) -> Self {
        Self {
            prn: int_field(fields.get(start)),
            elevation: int_field(fields.get(start + 1)),
            azimuth: int_field(fields.get(start + 2)),
            snr: int_field(fields.get(start + 3)),
        }
    }
}

/// Decodes the text of a validated sentence.
///
/// The sentence id is read from bytes 3 to 5 (after `$` and the two-letter talker id), the
/// text is split on `,` with the trailing `*` removed, and the fields are handed to the
/// matching sentence type. Ids that are not recognized produce [`Sentence::Unknown`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{Sentence, decode};
///
/// let sentence = decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*");
/// match sentence {
///     Sentence::VTG(vtg) => {
///         assert_eq!(vtg.course, 54.7);
///         assert_eq!(vtg.speed, 10.2);
///     }
///     _ => unreachable!(),
/// }
///
/// assert_eq!(decode("$GPXYZ,1,2,3*"), Sentence::Unknown);
/// ```
pub fn decode(text: &str) -> Sentence {
    let kind = text
        .get(3..6)
        .map(SentenceKind::from_id)
        .unwrap_or_default();

    if kind == SentenceKind::Unknown {
        return Sentence::Unknown;
    }

    let fields = split(text, '*', ',');

    match kind {
        SentenceKind::GGA => Sentence::GGA(GGA::from_fields(&fields)),
        SentenceKind::RMC => Sentence::RMC(RMC::from_fields(&fields)),
        SentenceKind::GLL => Sentence::GLL(GLL::from_fields(&fields)),
        SentenceKind::GSA => Sentence::GSA(GSA::from_fields(&fields)),
        SentenceKind::GSV => Sentence::GSV(GSV::from_fields(&fields)),
        SentenceKind::VTG => Sentence::VTG(VTG::from_fields(&fields)),
        SentenceKind::ZDA => Sentence::ZDA(ZDA::from_fields(&fields)),
        SentenceKind::TXT => Sentence::TXT(TXT::from_fields(&fields)),
        SentenceKind::Unknown => Sentence::Unknown,
    }
}

/// Decodes the text of a validated sentence and merges it into `record`.
///
/// Returns the kind of the decoded sentence. Fields of `record` that the sentence does not
/// carry keep their previous values.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{FixRecord, SentenceKind, decode_into};
///
/// let mut record = FixRecord::default();
/// let kind = decode_into(&mut record, "$GPZDA,201530.00,04,07,2002,00,00*");
///
/// assert_eq!(kind, SentenceKind::ZDA);
/// assert_eq!(record.utc_time, "201530.00");
/// ```
pub fn decode_into(record: &mut FixRecord, text: &str) -> SentenceKind {
    let sentence = decode(text);
    record.apply(&sentence);
    sentence.kind()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_kind_ids() {
        let cases = [
            ("GGA", SentenceKind::GGA),
            ("RMC", SentenceKind::RMC),
            ("GLL", SentenceKind::GLL),
            ("GSA", SentenceKind::GSA),
            ("GSV", SentenceKind::GSV),
            ("VTG", SentenceKind::VTG),
            ("ZDA", SentenceKind::ZDA),
            ("TXT", SentenceKind::TXT),
            ("DBT", SentenceKind::Unknown),
            ("gga", SentenceKind::Unknown),
            ("", SentenceKind::Unknown),
        ];

        for (id, kind) in cases {
            assert_eq!(SentenceKind::from_id(id), kind, "Failed: {id:?}");
            if kind != SentenceKind::Unknown {
                assert_eq!(kind.id(), Some(id));
            }
        }
        assert_eq!(SentenceKind::Unknown.id(), None);
    }

    #[test]
    fn test_decode_dispatch() {
        let cases = [
            (
                "$GPGGA,092725.00,4717.113,N,00833.915,E,1,08,1.0,499.7,M,48.0,M,,*",
                SentenceKind::GGA,
            ),
            (
                "$GNRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A*",
                SentenceKind::RMC,
            ),
            ("$GPGLL,4916.45,N,12311.12,W,225444,A,A*", SentenceKind::GLL),
            (
                "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*",
                SentenceKind::GSA,
            ),
            ("$GPGSV,1,1,01,01,90,100,50*", SentenceKind::GSV),
            ("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*", SentenceKind::VTG),
            ("$GPZDA,123519,04,07,2025,,*", SentenceKind::ZDA),
            ("$GPTXT,01,01,02,ANTENNA OK*", SentenceKind::TXT),
            ("$GPDBT,12.34,f,3.76,M,2.05,F*", SentenceKind::Unknown),
            ("$GP", SentenceKind::Unknown),
            ("", SentenceKind::Unknown),
        ];

        for (input, kind) in cases {
            assert_eq!(decode(input).kind(), kind, "Failed: {input:?}");
        }
    }

    #[test]
    fn test_decode_into_unknown_keeps_fields() {
        let mut record = FixRecord::default();
        decode_into(&mut record, "$GPZDA,123519,04,07,2025,,*");

        let kind = decode_into(&mut record, "$GPDBT,12.34,f,3.76,M,2.05,F*");
        assert_eq!(kind, SentenceKind::Unknown);
        assert_eq!(record.kind, SentenceKind::Unknown);
        assert_eq!(record.utc_time, "123519");
    }
}
