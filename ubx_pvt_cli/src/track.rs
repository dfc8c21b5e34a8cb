//! Time-ordered history of parsed records, plus the display quantities derived from them

use ubx_pvt::{NavPvt, Position, Velocity};

/// Metres per degree of latitude, flat-earth approximation
const METERS_PER_DEG_LAT: f64 = 110_574.0;
/// Metres per degree of longitude at the equator
const METERS_PER_DEG_LON: f64 = 111_320.0;

/// All records seen so far, ascending by iTOW.
///
/// Records with equal iTOW keep their arrival order.
#[derive(Debug, Default)]
pub struct Track {
    records: Vec<NavPvt>,
}

impl Track {
    /// Merge new records into the history
    pub fn extend<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = NavPvt>,
    {
        self.records.extend(records);
        self.records.sort_by_key(NavPvt::itow);
    }

    pub fn records(&self) -> &[NavPvt] {
        &self.records
    }

    /// Record with the highest iTOW
    pub fn latest(&self) -> Option<&NavPvt> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// East/north offsets in metres of every record relative to the first one
    pub fn local_offsets(&self) -> Vec<(f64, f64)> {
        let Some(origin) = self.records.first() else {
            return Vec::new();
        };
        let lon_scale = METERS_PER_DEG_LON * origin.latitude().to_radians().cos();
        self.records
            .iter()
            .map(|pvt| {
                (
                    (pvt.longitude() - origin.longitude()) * lon_scale,
                    (pvt.latitude() - origin.latitude()) * METERS_PER_DEG_LAT,
                )
            })
            .collect()
    }
}

/// Ground speed in km/h
pub fn speed_kmh(pvt: &NavPvt) -> f64 {
    Velocity::from(pvt).speed * 3.6
}

/// Height above mean sea level in metres
pub fn altitude_m(pvt: &NavPvt) -> f64 {
    Position::from(pvt).alt
}

/// Combined horizontal and vertical accuracy in mm
pub fn accuracy_3d_mm(pvt: &NavPvt) -> f64 {
    f64::from(pvt.horizontal_accuracy()).hypot(f64::from(pvt.vertical_accuracy()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ubx_pvt::{checksum, normalize_hex, parse_hex};

    /// Bytes of the built-in demonstration frame
    pub(crate) fn sample_frame() -> Vec<u8> {
        hex::decode(normalize_hex(crate::SAMPLE_HEX)).unwrap()
    }

    /// Sample record moved to another iTOW and position
    pub(crate) fn record(itow: u32, lon: i32, lat: i32) -> NavPvt {
        let mut frame = sample_frame();
        frame[6..10].copy_from_slice(&itow.to_le_bytes());
        frame[30..34].copy_from_slice(&lon.to_le_bytes());
        frame[34..38].copy_from_slice(&lat.to_le_bytes());
        let (ck_a, ck_b) = checksum(&frame[2..98]);
        frame[98] = ck_a;
        frame[99] = ck_b;
        parse_hex(&hex::encode(frame)).unwrap()
    }

    #[test]
    fn test_extend_keeps_itow_order() {
        let mut track = Track::default();
        track.extend([record(3, 0, 0), record(1, 0, 0)]);
        track.extend([record(2, 0, 0)]);
        let itows: Vec<u32> = track.records().iter().map(NavPvt::itow).collect();
        assert_eq!(itows, vec![1, 2, 3]);
        assert_eq!(track.latest().map(NavPvt::itow), Some(3));
        assert_eq!(track.len(), 3);
    }

    #[test]
    fn test_extend_is_stable_for_equal_itow() {
        let mut track = Track::default();
        track.extend([record(5, 10, 0), record(5, 20, 0)]);
        assert_eq!(track.records()[0].longitude(), 10.0 * 1e-7);
        assert_eq!(track.records()[1].longitude(), 20.0 * 1e-7);
    }

    #[test]
    fn test_empty_track() {
        let track = Track::default();
        assert!(track.is_empty());
        assert!(track.latest().is_none());
        assert!(track.local_offsets().is_empty());
    }

    #[test]
    fn test_local_offsets() {
        let mut track = Track::default();
        // 0.001 deg east and north of the equator origin
        track.extend([record(1, 0, 0), record(2, 10_000, 10_000)]);
        let offsets = track.local_offsets();
        assert_eq!(offsets[0], (0.0, 0.0));
        assert!((offsets[1].0 - 111.32).abs() < 1e-6);
        assert!((offsets[1].1 - 110.574).abs() < 1e-6);
    }

    #[test]
    fn test_derived_quantities() {
        let pvt = parse_hex(crate::SAMPLE_HEX).unwrap();
        assert!((speed_kmh(&pvt) - 0.4608).abs() < 1e-9);
        assert!((altitude_m(&pvt) - 7.89).abs() < 1e-9);
        assert!((accuracy_3d_mm(&pvt) - 2746.0).abs() < 1.0);
    }
}
