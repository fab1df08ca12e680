use crate::parsing::{degrees_minutes, float_field};

/// Converts a `ddmm.mmmm` latitude field to decimal degrees.
///
/// Returns [`None`] when the converted value falls outside `[-90, 90]`. An empty field
/// converts to `0.0`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::nmea_content::latitude;
///
/// assert!((latitude("4807.038").unwrap() - 48.1173).abs() < 1e-4);
/// assert_eq!(latitude(""), Some(0.0));
/// assert_eq!(latitude("9130.000"), None);
/// ```
pub fn latitude(field: &str) -> Option<f64> {
    Some(degrees_minutes(float_field(field))).filter(|lat| (-90.0..=90.0).contains(lat))
}

/// Converts a `dddmm.mmmm` longitude field to decimal degrees.
///
/// Returns [`None`] when the converted value falls outside `[-180, 180]`. An empty field
/// converts to `0.0`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::nmea_content::longitude;
///
/// assert!((longitude("01131.000").unwrap() - 11.5167).abs() < 1e-4);
/// assert_eq!(longitude("18100.000"), None);
/// ```
pub fn longitude(field: &str) -> Option<f64> {
    Some(degrees_minutes(float_field(field))).filter(|lon| (-180.0..=180.0).contains(lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_ranges() {
        let cases = [
            ("0000.000", Some(0.0)),
            ("9000.000", Some(90.0)),
            ("9000.001", None),
            ("-4500.000", Some(-45.0)),
            ("garbage", Some(0.0)),
        ];

        for (input, expected) in cases {
            assert_eq!(latitude(input), expected, "Failed: {input:?}");
        }

        let cases = [
            ("00000.000", Some(0.0)),
            ("18000.000", Some(180.0)),
            ("18000.5", None),
            ("-18030.0", None),
        ];

        for (input, expected) in cases {
            assert_eq!(longitude(input), expected, "Failed: {input:?}");
        }

        assert!(longitude("17959.999").is_some());
    }
}
