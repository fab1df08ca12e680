#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    nmea_content::{FromFields, UtcTime},
    parsing::{char_field, float_field, text_field},
    tokenizer::Fields,
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
///
/// Unlike [`GGA`](super::GGA) and [`RMC`](super::RMC), the position is kept in its raw
/// `ddmm.mm` form: no conversion to decimal degrees is applied.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GLL {
    /// Latitude as transmitted (`ddmm.mm`)
    pub latitude: f64,
    /// Latitude hemisphere (N/S)
    pub lat_dir: Option<char>,
    /// Longitude as transmitted (`dddmm.mm`)
    pub longitude: f64,
    /// Longitude hemisphere (E/W)
    pub lon_dir: Option<char>,
    /// Fix time in UTC
    pub utc_time: UtcTime,
}

impl FromFields for GLL {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            latitude: float_field(fields.get(1)),
            lat_dir: char_field(fields.get(2)),
            longitude: float_field(fields.get(3)),
            lon_dir: char_field(fields.get(4)),
            utc_time: text_field(fields.get(5)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::split;

    #[test]
    fn test_gll_fields() {
        let fields = split("$GPGLL,4916.45,N,12311.12,W,225444,A,A*", '*', ',');
        let gll = GLL::from_fields(&fields);

        assert_eq!(gll.latitude, 4916.45);
        assert_eq!(gll.lat_dir, Some('N'));
        assert_eq!(gll.longitude, 12311.12);
        assert_eq!(gll.lon_dir, Some('W'));
        assert_eq!(gll.utc_time, "225444");
    }

    #[test]
    fn test_gll_long_time_truncated() {
        let fields = split("$GPGLL,,,,,225444.000001,A*", '*', ',');
        let gll = GLL::from_fields(&fields);

        assert_eq!(gll.utc_time, "225444.000");
        assert_eq!(gll.latitude, 0.0);
    }
}
