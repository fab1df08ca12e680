#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    nmea_content::{FromFields, UtcTime, latitude, longitude},
    parsing::{char_field, float_field, text_field},
    tokenizer::Fields,
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RMC {
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
    /// Speed over ground in knots
    pub speed: f32,
    /// Course over ground in degrees true
    pub course: f32,
    /// Fix date as transmitted (`ddmmyy`)
    pub date: heapless::String<6>,
    /// FAA mode indicator
    pub pos_mode: Option<char>,
}

impl FromFields for RMC {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            utc_time: text_field(fields.get(1)),
            latitude: latitude(fields.get(3)),
            lat_dir: char_field(fields.get(4)),
            longitude: longitude(fields.get(5)),
            lon_dir: char_field(fields.get(6)),
            speed: float_field(fields.get(7)),
            course: float_field(fields.get(8)),
            date: text_field(fields.get(9)),
            pos_mode: char_field(fields.get(12)),
        }
    }
}
