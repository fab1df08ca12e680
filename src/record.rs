//! # Fix Record
//!
//! The running positioning state assembled from every decoded sentence.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::nmea_content::{
    GGA, GLL, GSA, GSV, RMC, Satellite, Sentence, SentenceKind, TXT, UtcTime, VTG, ZDA,
};

/// Maximum number of satellites kept across all pages of a GSV group.
pub const MAX_SATELLITES: usize = 32;

/// The decoded fix, updated in place by every sentence.
///
/// Each sentence type only writes the fields it carries: after an RMC sentence, `altitude`
/// still holds whatever the last GGA sentence reported. This makes the record a "current fix"
/// view assembled from several sentence types. Use the [`Sentence`] returned by
/// [`decode`](crate::decode) when only fresh values are wanted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FixRecord {
    /// Kind of the last decoded sentence
    pub kind: SentenceKind,
    /// UTC time as transmitted (`hhmmss.ss`)
    pub utc_time: UtcTime,
    /// Latitude, in decimal degrees for GGA/RMC and raw `ddmm.mm` for GLL
    pub latitude: f64,
    /// Latitude hemisphere (N/S)
    pub lat_dir: Option<char>,
    /// Longitude, in decimal degrees for GGA/RMC and raw `dddmm.mm` for GLL
    pub longitude: f64,
    /// Longitude hemisphere (E/W)
    pub lon_dir: Option<char>,

    /// GGA: GPS Quality Indicator
    pub fix_quality: i32,
    /// GGA: Number of satellites in use
    pub num_satellites: i32,
    /// GGA: Altitude above mean sea level
    pub altitude: f32,
    /// GGA: Altitude unit
    pub alt_dir: Option<char>,

    /// RMC/VTG: Speed over ground
    pub speed: f32,
    /// RMC/VTG: Course over ground
    pub course: f32,
    /// RMC: Date as transmitted (`ddmmyy`)
    pub date: heapless::String<6>,
    /// RMC: FAA mode indicator
    pub pos_mode: Option<char>,

    /// GSA: Position Dilution of Precision
    pub pdop: f32,
    /// GSA: Horizontal Dilution of Precision
    pub hdop: f32,
    /// GSA: Vertical Dilution of Precision
    pub vdop: f32,
    /// GSA: PRN numbers of the satellites used in the fix
    pub active_satellites: heapless::Vec<i32, 12>,

    /// GSV: Total number of satellites in view
    pub gsv_num_satellites: i32,
    /// GSV: Number of the last page received
    pub now_page: i32,
    /// GSV: Total number of pages in the group
    pub max_page: i32,
    /// GSV: Satellites collected so far, indexed by their position in the group
    pub satellite_info: heapless::Vec<Satellite, MAX_SATELLITES>,

    /// TXT: Message text
    pub txt_message: heapless::String<80>,
}

impl FixRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every field to its zero value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Merges a decoded sentence into the record.
    ///
    /// `kind` is always updated. [`Sentence::Unknown`] touches nothing else.
    pub fn apply(&mut self, sentence: &Sentence) {
        self.kind = sentence.kind();

        match sentence {
            Sentence::GGA(gga) => self.apply_gga(gga),
            Sentence::RMC(rmc) => self.apply_rmc(rmc),
            Sentence::GLL(gll) => self.apply_gll(gll),
            Sentence::GSA(gsa) => self.apply_gsa(gsa),
            Sentence::GSV(gsv) => self.apply_gsv(gsv),
            Sentence::VTG(vtg) => self.apply_vtg(vtg),
            Sentence::ZDA(zda) => self.apply_zda(zda),
            Sentence::TXT(txt) => self.apply_txt(txt),
            Sentence::Unknown => {}
        }
    }

    /// Satellites reported for the current GSV group.
    pub fn satellites(&self) -> &[Satellite] {
        &self.satellite_info
    }

    fn apply_gga(&mut self, gga: &GGA) {
        self.utc_time = gga.utc_time.clone();
        if let Some(latitude) = gga.latitude {
            self.latitude = latitude;
        }
        self.lat_dir = gga.lat_dir;
        if let Some(longitude) = gga.longitude {
            self.longitude = longitude;
        }
        self.lon_dir = gga.lon_dir;
        self.altitude = gga.altitude;
        self.alt_dir = gga.alt_dir;
        self.fix_quality = gga.fix_quality;
        self.num_satellites = gga.num_satellites;
    }

    fn apply_rmc(&mut self, rmc: &RMC) {
        self.utc_time = rmc.utc_time.clone();
        if let Some(latitude) = rmc.latitude {
            self.latitude = latitude;
        }
        self.lat_dir = rmc.lat_dir;
        if let Some(longitude) = rmc.longitude {
            self.longitude = longitude;
        }
        self.lon_dir = rmc.lon_dir;
        self.speed = rmc.speed;
        self.course = rmc.course;
        self.date = rmc.date.clone();
        self.pos_mode = rmc.pos_mode;
    }

    fn apply_gll(&mut self, gll: &GLL) {
        self.latitude = gll.latitude;
        self.lat_dir = gll.lat_dir;
        self.longitude = gll.longitude;
        self.lon_dir = gll.lon_dir;
        self.utc_time = gll.utc_time.clone();
    }

    fn apply_gsa(&mut self, gsa: &GSA) {
        self.active_satellites = gsa.active_satellites.clone();
        self.pdop = gsa.pdop;
        self.hdop = gsa.hdop;
        self.vdop = gsa.vdop;
    }

    fn apply_gsv(&mut self, gsv: &GSV) {
        self.max_page = gsv.max_page;
        self.now_page = gsv.now_page;
        self.gsv_num_satellites = gsv.num_satellites;

        if gsv.now_page == 1 {
            self.satellite_info.clear();
        }

        let Some(first) = gsv.first_index() else {
            log::debug!("GSV page {} is not a valid page number", gsv.now_page);
            return;
        };

        for (offset, satellite) in gsv.satellites.iter().enumerate() {
            let index = first.saturating_add(offset);
            if index >= MAX_SATELLITES {
                break;
            }

            if index >= self.satellite_info.len() {
                // Pages may arrive without their predecessors, leave a gap of empty entries.
                let _ = self.satellite_info.resize(index + 1, Satellite::default());
            }
            self.satellite_info[index] = *satellite;
        }
    }

    fn apply_vtg(&mut self, vtg: &VTG) {
        self.course = vtg.course;
        self.speed = vtg.speed;
    }

    fn apply_zda(&mut self, zda: &ZDA) {
        self.utc_time = zda.utc_time.clone();
    }

    fn apply_txt(&mut self, txt: &TXT) {
        self.txt_message = txt.txt_message.clone();
    }
}

#[cfg(feature = "time")]
impl FixRecord {
    /// Parses [`Self::utc_time`] (`hhmmss[.sss]`) into a time of day.
    ///
    /// Returns [`None`] if the field is empty or not a valid time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_stream::FixRecord;
    ///
    /// let mut record = FixRecord::new();
    /// record.utc_time = "123519.25".try_into().unwrap();
    ///
    /// let time = record.fix_time().unwrap();
    /// assert_eq!(time.hour(), 12);
    /// assert_eq!(time.minute(), 35);
    /// assert_eq!(time.second(), 19);
    /// assert_eq!(time.millisecond(), 250);
    /// ```
    pub fn fix_time(&self) -> Option<time::Time> {
        let utc_time = self.utc_time.as_str();

        let hour = utc_time.get(0..2)?.parse().ok()?;
        let minute = utc_time.get(2..4)?.parse().ok()?;
        let second: f32 = utc_time.get(4..)?.parse().ok()?;

        if second.is_sign_negative() {
            return None;
        }

        let milliseconds = second.fract() * 1000.0;
        let second = second.trunc();

        time::Time::from_hms_milli(hour, minute, second as u8, milliseconds as u16).ok()
    }

    /// Parses [`Self::date`] (`ddmmyy`) into a calendar date.
    ///
    /// Two-digit years from 83 to 99 are placed in the 1900s, all others in the 2000s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_stream::FixRecord;
    ///
    /// let mut record = FixRecord::new();
    /// record.date = "230394".try_into().unwrap();
    ///
    /// let date = record.fix_date().unwrap();
    /// assert_eq!(date.year(), 1994);
    /// assert_eq!(date.month(), time::Month::March);
    /// assert_eq!(date.day(), 23);
    /// ```
    pub fn fix_date(&self) -> Option<time::Date> {
        let date = self.date.as_str();

        let day: u8 = date.get(0..2)?.parse().ok()?;
        let month: u8 = date.get(2..4)?.parse().ok()?;
        let year: i32 = date.get(4..6)?.parse().ok()?;

        let year = match year {
            83..=99 => year + 1900,
            _ => year + 2000,
        };

        time::Date::from_calendar_date(year, month.try_into().ok()?, day).ok()
    }
}
