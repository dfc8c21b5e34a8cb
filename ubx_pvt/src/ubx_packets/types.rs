use super::nav_pvt::NavPvt;
use crate::error::DateTimeError;
use chrono::prelude::*;
use core::convert::TryFrom;

/// Represents a world position, can be constructed from NavPvt records.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Logitude in degrees
    pub lon: f64,

    /// Latitude in degrees
    pub lat: f64,

    /// Altitude above mean sea level in meters
    pub alt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    /// m/s over the ground
    pub speed: f64,

    /// Heading in degrees
    pub heading: f64, // degrees
}

impl From<&NavPvt> for Position {
    fn from(packet: &NavPvt) -> Self {
        Position {
            lon: packet.longitude(),
            lat: packet.latitude(),
            alt: f64::from(packet.height_msl()) * 1e-3,
        }
    }
}

impl From<&NavPvt> for Velocity {
    fn from(packet: &NavPvt) -> Self {
        Velocity {
            speed: f64::from(packet.ground_speed_2d()) * 1e-3,
            heading: packet.heading_motion(),
        }
    }
}

impl TryFrom<&NavPvt> for DateTime<Utc> {
    type Error = DateTimeError;
    fn try_from(sol: &NavPvt) -> Result<Self, Self::Error> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(sol.year()),
            u32::from(sol.month()),
            u32::from(sol.day()),
        )
        .ok_or(DateTimeError::InvalidDate)?;
        let time = NaiveTime::from_hms_opt(
            u32::from(sol.hour()),
            u32::from(sol.min()),
            u32::from(sol.sec()),
        )
        .ok_or(DateTimeError::InvalidTime)?;
        const NANOS_LIM: u32 = 1_000_000_000;
        if sol.nanosec().unsigned_abs() >= NANOS_LIM {
            return Err(DateTimeError::InvalidNanoseconds);
        }

        let dt = NaiveDateTime::new(date, time)
            + chrono::Duration::nanoseconds(i64::from(sol.nanosec()));

        Ok(dt.and_utc())
    }
}
