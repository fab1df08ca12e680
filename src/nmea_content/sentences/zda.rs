#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    nmea_content::{FromFields, UtcTime},
    parsing::text_field,
    tokenizer::Fields,
};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
///
/// Only the time of day is decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ZDA {
    /// UTC time
    pub utc_time: UtcTime,
}

impl FromFields for ZDA {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            utc_time: text_field(fields.get(1)),
        }
    }
}
