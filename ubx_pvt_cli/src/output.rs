use std::io::Write;

use ubx_pvt::{
    export::{csv_fields, CSV_HEADER},
    GnssFixType, NavPvt,
};

use crate::{
    cli::Format,
    error::Error,
    track::{accuracy_3d_mm, altitude_m, speed_kmh, Track},
};

pub fn write_track<W: Write>(track: &Track, format: Format, out: W) -> Result<(), Error> {
    match format {
        Format::Table => write_table(track, out),
        Format::Csv => write_csv(track, out),
        Format::Json => write_json(track, out),
    }
}

fn fix_label(fix: GnssFixType) -> String {
    match fix {
        GnssFixType::NoFix => "NO FIX".to_string(),
        GnssFixType::DeadReckoningOnly => "DR".to_string(),
        GnssFixType::Fix2D => "2D FIX".to_string(),
        GnssFixType::Fix3D => "3D FIX".to_string(),
        GnssFixType::GPSPlusDeadReckoning => "GNSS+DR".to_string(),
        GnssFixType::TimeOnlyFix => "TIME ONLY".to_string(),
        GnssFixType::Reserved(code) => format!("FIX: {code}"),
    }
}

fn write_table<W: Write>(track: &Track, mut out: W) -> Result<(), Error> {
    if track.is_empty() {
        return Ok(());
    }
    for (pvt, (east, north)) in track.records().iter().zip(track.local_offsets()) {
        writeln!(
            out,
            "{} {:>9} {:>10} lat {:.5} lon {:.5} alt {:.1} m SVs {:>2} speed {:.2} km/h E {:.1} m N {:.1} m",
            pvt.timestamp(),
            fix_label(pvt.fix_type()),
            pvt.itow(),
            pvt.latitude(),
            pvt.longitude(),
            altitude_m(pvt),
            pvt.num_satellites(),
            speed_kmh(pvt),
            east,
            north,
        )?;
    }
    if let Some(latest) = track.latest() {
        write_latest(latest, &mut out)?;
    }
    Ok(())
}

fn write_latest<W: Write>(pvt: &NavPvt, out: &mut W) -> Result<(), Error> {
    writeln!(out)?;
    writeln!(out, "Latest packet ({})", pvt.timestamp())?;
    writeln!(out, "  Latitude       {:.7} deg", pvt.latitude())?;
    writeln!(out, "  Longitude      {:.7} deg", pvt.longitude())?;
    writeln!(out, "  Altitude MSL   {:.2} m", altitude_m(pvt))?;
    writeln!(out, "  Ground speed   {:.2} km/h", speed_kmh(pvt))?;
    writeln!(out, "  Heading        {:.1} deg", pvt.heading_motion())?;
    writeln!(out, "  3D accuracy    {:.0} mm", accuracy_3d_mm(pvt))?;
    writeln!(out, "  pDOP           {:.2}", pvt.pdop())?;
    writeln!(out, "  Raw            {}", pvt.raw_hex())?;
    Ok(())
}

fn write_csv<W: Write>(track: &Track, out: W) -> Result<(), Error> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(CSV_HEADER)?;
    for pvt in track.records() {
        w.write_record(csv_fields(pvt))?;
    }
    w.flush()?;
    Ok(())
}

fn write_json<W: Write>(track: &Track, mut out: W) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut out, track.records())?;
    writeln!(out)?;
    Ok(())
}
