//! Last-modified stamps.
//!
//! Stamps are stored pre-formatted as fixed-width `YYYYMMDDHHMM` (UTC), so
//! comparing two stamps as strings is the same as comparing them in time.

use chrono::{DateTime, Utc};
use std::{fmt, fs, io, path::Path, time::SystemTime};

/// strftime pattern for [`Stamp`].
pub const STAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Width of a formatted stamp.
#[cfg(test)]
const STAMP_LEN: usize = 12;

/// A last-modified stamp with minute precision.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stamp(String);

impl Stamp {
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime.format(STAMP_FORMAT).to_string())
    }

    pub fn from_system_time(time: SystemTime) -> Self {
        Self::from_datetime(time.into())
    }

    /// Read the modification time of a file.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        fs::metadata(path)?.modified().map(Self::from_system_time)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
impl Stamp {
    /// Parse an already formatted `YYYYMMDDHHMM` stamp.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != STAMP_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let field = |range: std::ops::Range<usize>| s[range].parse::<u32>().ok();

        let year = i32::try_from(field(0..4)?).ok()?;
        chrono::NaiveDate::from_ymd_opt(year, field(4..6)?, field(6..8)?)?
            .and_hms_opt(field(8..10)?, field(10..12)?, 0)?;
        Some(Self(s.to_owned()))
    }
}
