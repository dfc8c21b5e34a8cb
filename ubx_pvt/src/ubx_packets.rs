mod nav_pvt;
mod types;

pub use nav_pvt::{GnssFixType, NavPvt, NavPvtFlags, NavPvtValidFlags};
pub use types::{Position, Velocity};

#[cfg(test)]
pub(crate) use nav_pvt::tests::FRAME_HEX;
