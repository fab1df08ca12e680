#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{nmea_content::FromFields, parsing::float_field, tokenizer::Fields};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VTG {
    /// Course over ground in degrees true
    pub course: f32,
    /// Speed over ground in km/h
    pub speed: f32,
}

impl FromFields for VTG {
    fn from_fields(fields: &Fields) -> Self {
        Self {
            course: float_field(fields.get(1)),
            speed: float_field(fields.get(7)),
        }
    }
}
