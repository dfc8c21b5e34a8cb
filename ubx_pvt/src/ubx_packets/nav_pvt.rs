use bitflags::bitflags;

use crate::{constants::UBX_HEADER_LEN, parser::Frame};

/// GNSS fix Type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GnssFixType {
    NoFix,
    DeadReckoningOnly,
    Fix2D,
    Fix3D,
    GPSPlusDeadReckoning,
    TimeOnlyFix,
    /// Value not defined by the protocol
    Reserved(u8),
}

impl From<u8> for GnssFixType {
    fn from(x: u8) -> Self {
        match x {
            0 => Self::NoFix,
            1 => Self::DeadReckoningOnly,
            2 => Self::Fix2D,
            3 => Self::Fix3D,
            4 => Self::GPSPlusDeadReckoning,
            5 => Self::TimeOnlyFix,
            other => Self::Reserved(other),
        }
    }
}

impl From<GnssFixType> for u8 {
    fn from(fix: GnssFixType) -> u8 {
        match fix {
            GnssFixType::NoFix => 0,
            GnssFixType::DeadReckoningOnly => 1,
            GnssFixType::Fix2D => 2,
            GnssFixType::Fix3D => 3,
            GnssFixType::GPSPlusDeadReckoning => 4,
            GnssFixType::TimeOnlyFix => 5,
            GnssFixType::Reserved(x) => x,
        }
    }
}

bitflags! {
    /// Validity flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NavPvtValidFlags: u8 {
        /// 1 = valid UTC Date
        const VALID_DATE = 0x01;
        /// 1 = valid UTC time of day
        const VALID_TIME = 0x02;
        /// 1 = UTC time of day has been fully resolved (no seconds uncertainty).
        /// Cannot be used to check if time is completely solved.
        const FULLY_RESOLVED = 0x04;
        /// 1 = valid magnetic declination
        const VALID_MAG = 0x08;
    }
}

bitflags! {
    /// Fix status flags for `NavPvt`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NavPvtFlags: u8 {
        /// 1 = Position and velocity valid and within DOP and accuracy masks
        const GPS_FIX_OK = 1;
        /// 1 = Differential corrections were applied; DGPS used
        const DIFF_SOLN = 2;
        /// 1 = Heading of vehicle is valid, only set if the receiver is in sensor fusion mode
        const HEAD_VEH_VALID = 0x20;
        /// 1 = Carrier phase range solution with floating ambiguities
        const CARR_SOLN_FLOAT = 0x40;
        /// 1 = Carrier phase range solution with fixed ambiguities
        const CARR_SOLN_FIXED = 0x80;
    }
}

/// Navigation Position Velocity Time Solution (UBX-NAV-PVT, class 0x01, id 0x07)
///
/// Built once from a validated [Frame] and never changed afterwards.
/// Coordinates, headings and pDOP are already scaled, distances and speeds
/// keep their integer millimetre units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavPvt {
    itow: u32,
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    min: u8,
    sec: u8,
    valid: u8,
    time_accuracy: u32,
    nanosec: i32,
    fix_type: u8,
    flags: u8,
    num_satellites: u8,
    lon: f64,
    lat: f64,
    height: i32,
    height_msl: i32,
    h_acc: u32,
    v_acc: u32,
    vel_north: i32,
    vel_east: i32,
    vel_down: i32,
    g_speed: i32,
    head_motion: f64,
    s_acc: u32,
    head_acc: f64,
    pdop: f64,
    timestamp: String,
    raw_hex: String,
}

/// Little-endian reads at fixed payload offsets
struct Payload<'a>(&'a [u8]);

impl Payload<'_> {
    fn u8(&self, off: usize) -> u8 {
        self.0[off]
    }

    fn u16(&self, off: usize) -> u16 {
        u16::from_le_bytes([self.0[off], self.0[off + 1]])
    }

    fn u32(&self, off: usize) -> u32 {
        u32::from_le_bytes([
            self.0[off],
            self.0[off + 1],
            self.0[off + 2],
            self.0[off + 3],
        ])
    }

    fn i32(&self, off: usize) -> i32 {
        self.u32(off) as i32
    }
}

impl NavPvt {
    /// Decode every field of a validated frame.
    ///
    /// `raw_hex` is kept verbatim for display, the drivers pass the hex
    /// of exactly the frame's bytes.
    pub fn decode(frame: &Frame<'_>, raw_hex: String) -> Self {
        // The frame is exactly header + payload + checksum, so every offset
        // below is in bounds.
        let p = Payload(&frame.as_bytes()[UBX_HEADER_LEN..]);

        let year = p.u16(4);
        let month = p.u8(6);
        let day = p.u8(7);
        let hour = p.u8(8);
        let min = p.u8(9);
        let sec = p.u8(10);

        Self {
            itow: p.u32(0),
            year,
            month,
            day,
            hour,
            min,
            sec,
            valid: p.u8(11),
            time_accuracy: p.u32(12),
            nanosec: p.i32(16),
            fix_type: p.u8(20),
            flags: p.u8(21),
            // 22: flags2
            num_satellites: p.u8(23),
            lon: f64::from(p.i32(24)) * 1e-7,
            lat: f64::from(p.i32(28)) * 1e-7,
            height: p.i32(32),
            height_msl: p.i32(36),
            h_acc: p.u32(40),
            v_acc: p.u32(44),
            vel_north: p.i32(48),
            vel_east: p.i32(52),
            vel_down: p.i32(56),
            g_speed: p.i32(60),
            head_motion: f64::from(p.i32(64)) * 1e-5,
            s_acc: p.u32(68),
            head_acc: f64::from(p.u32(72)) * 1e-5,
            pdop: f64::from(p.u16(76)) * 0.01,
            timestamp: format!("{year:04}-{month:02}-{day:02} {hour:02}:{min:02}:{sec:02}"),
            raw_hex,
        }
    }

    /// GPS Millisecond time of week of the navigation epoch.
    ///
    /// Records from one receiver sort by this value.
    pub fn itow(&self) -> u32 {
        self.itow
    }

    /// Year (UTC)
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month, range 1..12 (UTC)
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, range 1..31 (UTC)
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Hour of day, range 0..23 (UTC)
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of hour, range 0..59 (UTC)
    pub fn min(&self) -> u8 {
        self.min
    }

    /// Seconds of minute, range 0..60 (UTC)
    pub fn sec(&self) -> u8 {
        self.sec
    }

    pub fn valid(&self) -> NavPvtValidFlags {
        NavPvtValidFlags::from_bits_retain(self.valid)
    }

    pub fn valid_raw(&self) -> u8 {
        self.valid
    }

    /// Time accuracy estimate in nanoseconds (UTC)
    pub fn time_accuracy(&self) -> u32 {
        self.time_accuracy
    }

    /// Fraction of second, range -1e9 .. 1e9 (UTC)
    pub fn nanosec(&self) -> i32 {
        self.nanosec
    }

    pub fn fix_type(&self) -> GnssFixType {
        GnssFixType::from(self.fix_type)
    }

    pub fn fix_type_raw(&self) -> u8 {
        self.fix_type
    }

    pub fn flags(&self) -> NavPvtFlags {
        NavPvtFlags::from_bits_retain(self.flags)
    }

    pub fn flags_raw(&self) -> u8 {
        self.flags
    }

    /// Number of satellites used in Nav Solution
    pub fn num_satellites(&self) -> u8 {
        self.num_satellites
    }

    /// Longitude in \[deg\]
    pub fn longitude(&self) -> f64 {
        self.lon
    }

    /// Latitude in \[deg\]
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Height above reference ellipsoid in \[mm\]
    pub fn height_above_ellipsoid(&self) -> i32 {
        self.height
    }

    /// Height above Mean Sea Level in \[mm\]
    pub fn height_msl(&self) -> i32 {
        self.height_msl
    }

    /// Horizontal accuracy in \[mm\]
    pub fn horizontal_accuracy(&self) -> u32 {
        self.h_acc
    }

    /// Vertical accuracy in \[mm\]
    pub fn vertical_accuracy(&self) -> u32 {
        self.v_acc
    }

    /// Velocity North component \[mm/s\]
    pub fn vel_north(&self) -> i32 {
        self.vel_north
    }

    /// Velocity East component \[mm/s\]
    pub fn vel_east(&self) -> i32 {
        self.vel_east
    }

    /// Velocity Down component \[mm/s\]
    pub fn vel_down(&self) -> i32 {
        self.vel_down
    }

    /// Ground speed \[mm/s\]
    pub fn ground_speed_2d(&self) -> i32 {
        self.g_speed
    }

    /// Heading of motion 2-D \[deg\]
    pub fn heading_motion(&self) -> f64 {
        self.head_motion
    }

    /// Speed Accuracy Estimate \[mm/s\]
    pub fn speed_accuracy(&self) -> u32 {
        self.s_acc
    }

    /// Heading accuracy estimate \[deg\]
    pub fn heading_accuracy(&self) -> f64 {
        self.head_acc
    }

    /// Position DOP
    pub fn pdop(&self) -> f64 {
        self.pdop
    }

    /// `YYYY-MM-DD HH:MM:SS` built from the calendar fields
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Uppercase hex of the frame this record was decoded from
    pub fn raw_hex(&self) -> &str {
        &self.raw_hex
    }
}
