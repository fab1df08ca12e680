#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    nmea_content::FromFields,
    parsing::{float_field, int_field},
    tokenizer::Fields,
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GSA {
    /// PRN numbers of the satellites used in the fix, up to 12
    pub active_satellites: heapless::Vec<i32, 12>,
    /// Position Dilution of Precision
    pub pdop: f32,
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    /// Vertical Dilution of Precision
    pub vdop: f32,
}

impl FromFields for GSA {
    fn from_fields(fields: &Fields) -> Self {
        let active_satellites = (3..=14)
            .map(|index| fields.get(index))
            .filter(|prn| !prn.is_empty())
            .map(int_field)
            .collect();

        Self {
            active_satellites,
            pdop: float_field(fields.get(15)),
            hdop: float_field(fields.get(16)),
            vdop: float_field(fields.get(17)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split;

    #[test]
    fn test_gsa_fields() {
        let fields = split(
            "$GPGSA,A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.5,1.0,2.0*",
            '*',
            ',',
        );
        let gsa = GSA::from_fields(&fields);

        assert_eq!(gsa.active_satellites, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(gsa.pdop, 1.5);
        assert_eq!(gsa.hdop, 1.0);
        assert_eq!(gsa.vdop, 2.0);
    }

    #[test]
    fn test_gsa_sparse_prns() {
        let fields = split("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*", '*', ',');
        let gsa = GSA::from_fields(&fields);

        assert_eq!(gsa.active_satellites, [4, 5, 9, 12, 24]);
        assert_eq!(gsa.pdop, 2.5);
        assert_eq!(gsa.hdop, 1.3);
        assert_eq!(gsa.vdop, 2.1);
    }

    #[test]
    fn test_gsa_no_fix() {
        let fields = split("$GPGSA,M,1,,,,,,,,,,,,,99.9,99.9,99.9*", '*', ',');
        let gsa = GSA::from_fields(&fields);

        assert!(gsa.active_satellites.is_empty());
        assert_eq!(gsa.pdop, 99.9);
    }
}
