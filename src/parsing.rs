//! # Parsing Utilities
//!
//! Lenient conversions from raw sentence fields into numbers and characters.
//!
//! Receivers routinely emit empty or partially filled fields, so a malformed field is never
//! an error here: the longest numeric prefix is used and anything unparsable becomes zero.

use core::str::FromStr;

use nom::{character::complete, number::complete::recognize_float};

/// Parses the leading integer of a field, returning `0` when there is none.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::int_field;
///
/// assert_eq!(int_field("08"), 8);
/// assert_eq!(int_field("-12abc"), -12);
/// assert_eq!(int_field(""), 0);
/// assert_eq!(int_field("M"), 0);
/// ```
pub fn int_field(field: &str) -> i32 {
    let parsed: nom::IResult<&str, i32> = complete::i32(field);

    parsed.map(|(_, value)| value).unwrap_or(0)
}

/// Parses the leading floating point number of a field, returning zero when there is none.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::float_field;
///
/// assert_eq!(float_field::<f32>("545.4"), 545.4);
/// assert_eq!(float_field::<f64>("4807.038"), 4807.038);
/// assert_eq!(float_field::<f32>("1.5K"), 1.5);
/// assert_eq!(float_field::<f32>(""), 0.0);
/// ```
pub fn float_field<T>(field: &str) -> T
where
    T: FromStr + Default,
{
    let recognized: nom::IResult<&str, &str> = recognize_float(field);

    recognized
        .ok()
        .and_then(|(_, number)| number.parse().ok())
        .unwrap_or_default()
}

/// Returns the first character of a field, or [`None`] if the field is empty.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::char_field;
///
/// assert_eq!(char_field("N"), Some('N'));
/// assert_eq!(char_field(""), None);
/// ```
pub fn char_field(field: &str) -> Option<char> {
    field.chars().next()
}

/// Copies a field into a bounded string, truncating it to the string's capacity.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::text_field;
///
/// let date: heapless::String<6> = text_field("230394");
/// assert_eq!(date, "230394");
///
/// let date: heapless::String<6> = text_field("23039412");
/// assert_eq!(date, "230394");
/// ```
pub fn text_field<const N: usize>(field: &str) -> heapless::String<N> {
    let mut text = heapless::String::new();
    for c in field.chars() {
        if text.push(c).is_err() {
            break;
        }
    }
    text
}

/// Converts an NMEA `dddmm.mmmm` value into decimal degrees.
///
/// The whole degrees are `floor(value / 100)`, the remaining minutes are divided by 60, and
/// the fractional minutes are added once more scaled by `1/600000`.
///
/// The sign of the raw value is carried through; hemisphere letters are stored separately.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::degrees_minutes;
///
/// let latitude = degrees_minutes(4807.038);
/// assert!((latitude - 48.1173).abs() < 1e-4);
///
/// let longitude = degrees_minutes(1131.0);
/// assert!((longitude - 11.516_666).abs() < 1e-5);
/// ```
pub fn degrees_minutes(value: f64) -> f64 {
    let whole_degrees = (value / 100.0).floor();

    whole_degrees + (value % 100.0) / 60.0 + (value % 1.0) / 600_000.0
}
