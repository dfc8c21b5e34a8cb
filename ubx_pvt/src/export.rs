//! Fixed 15-column text export of [NavPvt] records

use crate::ubx_packets::NavPvt;

/// Column names, in row order
pub const CSV_HEADER: [&str; 15] = [
    "iTOW",
    "Timestamp",
    "FixType",
    "NumSV",
    "Lon",
    "Lat",
    "Height_MSL",
    "hAcc",
    "vAcc",
    "VelN",
    "VelE",
    "VelD",
    "GroundSpeed",
    "Heading",
    "pDOP",
];

/// Export fields of one record.
///
/// Longitude and latitude carry 7 decimals, heading and pDOP 2, all other
/// columns are the integers as decoded (mm, mm/s, raw fix type code).
pub fn csv_fields(pvt: &NavPvt) -> [String; 15] {
    [
        pvt.itow().to_string(),
        pvt.timestamp().to_string(),
        pvt.fix_type_raw().to_string(),
        pvt.num_satellites().to_string(),
        format!("{:.7}", pvt.longitude()),
        format!("{:.7}", pvt.latitude()),
        pvt.height_msl().to_string(),
        pvt.horizontal_accuracy().to_string(),
        pvt.vertical_accuracy().to_string(),
        pvt.vel_north().to_string(),
        pvt.vel_east().to_string(),
        pvt.vel_down().to_string(),
        pvt.ground_speed_2d().to_string(),
        fixed2(pvt.heading_motion()),
        fixed2(pvt.pdop()),
    ]
}

/// Two decimals, exact ties rounded away from zero.
///
/// `{:.2}` alone rounds a tie to even. A binary value only sits exactly on a
/// 2-decimal tie when it is an odd multiple of 1/8, and then `x * 100` is
/// exact, so `f64::round` settles it.
fn fixed2(x: f64) -> String {
    let eighths = x * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        format!("{:.2}", (x * 100.0).round() / 100.0)
    } else {
        format!("{x:.2}")
    }
}

/// [csv_fields] joined with `,`, no line terminator
pub fn csv_row(pvt: &NavPvt) -> String {
    csv_fields(pvt).join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{checksum, parse_hex, ubx_packets::FRAME_HEX};

    /// Sample record with another heading of motion
    fn with_heading(head_mot: i32) -> NavPvt {
        let mut bytes = hex::decode(FRAME_HEX).unwrap();
        bytes[70..74].copy_from_slice(&head_mot.to_le_bytes());
        let (ck_a, ck_b) = checksum(&bytes[2..98]);
        bytes[98] = ck_a;
        bytes[99] = ck_b;
        parse_hex(&hex::encode(bytes)).unwrap()
    }

    #[test]
    fn test_header() {
        assert_eq!(
            CSV_HEADER.join(","),
            "iTOW,Timestamp,FixType,NumSV,Lon,Lat,Height_MSL,hAcc,vAcc,VelN,VelE,VelD,GroundSpeed,Heading,pDOP"
        );
    }

    #[test]
    fn test_row() {
        let pvt = parse_hex(FRAME_HEX).unwrap();
        assert_eq!(
            csv_row(&pvt),
            "379286432,2018-05-19 13:05:25,3,8,139.7671248,35.6812362,7890,1500,2300,120,-45,8,128,296.22,1.45"
        );
    }

    #[test]
    fn test_two_decimal_ties_round_away_from_zero() {
        assert_eq!(fixed2(0.125), "0.13");
        assert_eq!(fixed2(0.625), "0.63");
        assert_eq!(fixed2(-347.125), "-347.13");
        assert_eq!(fixed2(2.375), "2.38");
        assert_eq!(fixed2(-0.875), "-0.88");
    }

    #[test]
    fn test_two_decimals_off_tie() {
        assert_eq!(fixed2(296.222_72), "296.22");
        assert_eq!(fixed2(1.45), "1.45");
        assert_eq!(fixed2(0.5), "0.50");
        assert_eq!(fixed2(-12.0), "-12.00");
        // Closest f64 to 1.005 lies below the tie
        assert_eq!(fixed2(1.005), "1.00");
    }

    #[test]
    fn test_heading_column_ties() {
        for (raw, expect) in [
            (12_500, "0.13"),
            (62_500, "0.63"),
            (-34_712_500, "-347.13"),
        ] {
            assert_eq!(csv_fields(&with_heading(raw))[13], expect, "raw {raw}");
        }
    }
}
