#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    nmea_content::{FromFields, Satellite},
    parsing::int_field,
    tokenizer::Fields,
};

/// Maximum number of satellites carried by a single GSV sentence.
pub const SATELLITES_PER_PAGE: usize = 4;

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// A receiver spreads its satellites over several GSV sentences ("pages") of up to four
/// satellites each. The pages are stitched back together by
/// [`FixRecord::apply`](crate::FixRecord::apply).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GSV {
    /// Total number of GSV sentences to be transmitted in this group
    pub max_page: i32,
    /// Sentence number of this GSV message within current group
    pub now_page: i32,
    /// Total number of satellites in view
    pub num_satellites: i32,
    /// Satellites carried by this page
    pub satellites: heapless::Vec<Satellite, SATELLITES_PER_PAGE>,
}

impl GSV {
    /// Index of this page's first satellite within the whole group, if the page number is
    /// valid.
    ///
    /// Returns [`None`] for pages below 1 and for pages whose index does not fit in a `usize`.
    pub fn first_index(&self) -> Option<usize> {
        usize::try_from(self.now_page)
            .ok()
            .filter(|&page| page >= 1)
            .and_then(|page| (page - 1).checked_mul(SATELLITES_PER_PAGE))
    }
}

/// Number of satellites expected on page `now_page` of a group listing `total` satellites.
///
/// Every page holds four satellites except the last, which holds the remainder. A remainder of
/// zero means the last page is full.
fn satellites_on_page(total: i32, now_page: i32) -> usize {
    let count = if total > now_page.saturating_mul(4) || (total >= 4 && total % 4 == 0) {
        4
    } else {
        total % 4
    };

    usize::try_from(count).unwrap_or(0)
}

impl FromFields for GSV {
    fn from_fields(fields: &Fields) -> Self {
        let max_page = int_field(fields.get(1));
        let now_page = int_field(fields.get(2));
        let num_satellites = int_field(fields.get(3));

        let satellites = (0..satellites_on_page(num_satellites, now_page))
            .map(|i| Satellite::from_fields_at(fields, 4 + i * 4))
            .collect();

        Self {
            max_page,
            now_page,
            num_satellites,
            satellites,
        }
    }
}
