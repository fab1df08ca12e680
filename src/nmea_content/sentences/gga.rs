#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    nmea_content::{FromFields, UtcTime, latitude, longitude},
    parsing::{char_field, float_field, int_field, text_field},
    tokenizer::Fields,
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GGA {
    /// Fix time in UTC
    pub utc_time: UtcTime,
    /// Latitude in decimal degrees, [`None`] if out of range
    pub latitude: Option<f64>,
    /// Latitude hemisphere (N/S)
    pub lat_dir: Option<char>,
    /// Longitude in decimal degrees, [`None`] if out of range
    pub longitude: Option<f64>,
    /// Longitude hemisphere (E/W)
    pub lon_dir: Option<char>,
    /// GPS Quality Indicator
    pub fix_quality: i32,
    /// Number of satellites in use
    pub num_satellites: i32,
    /// Altitude above/below mean sea level
    pub altitude: f32,
    /// Altitude unit, usually `M`
    pub alt_dir: Option<char>,
}

impl FromFields for GGA {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            utc_time: text_field(fields.get(1)),
            latitude: latitude(fields.get(2)),
            lat_dir: char_field(fields.get(3)),
            longitude: longitude(fields.get(4)),
            lon_dir: char_field(fields.get(5)),
            fix_quality: int_field(fields.get(6)),
            num_satellites: int_field(fields.get(7)),
            altitude: float_field(fields.get(9)),
            alt_dir: char_field(fields.get(10)),
        }
    }
}
