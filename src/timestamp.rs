use crate::codec::{self, EncodedTimeStamp};
use crate::error::{out_of_domain, Result};
use crate::field::{Hour, Minute, Second};
use core::fmt::{Display, Formatter};

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// A time of day with second precision.
///
/// Fields are public so a `TimeStamp` can hold any `u8`, but only values with `hour < 24`,
/// `minute < 60` and `second < 60` can be encoded. Out of range fields are rejected, never
/// normalized.
///
/// Ordering is chronological.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStamp {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeStamp {
    /// 00:00:00.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// 23:59:59.
    pub const MAX: Self = Self {
        hour: 23,
        minute: 59,
        second: 59,
    };

    /// Constructs a [`TimeStamp`], returning [`ErrorKind::OutOfDomain`](crate::ErrorKind::OutOfDomain)
    /// if any field is out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        let t = Self {
            hour,
            minute,
            second,
        };
        t.validate()?;
        Ok(t)
    }

    /// Checks every field against its range.
    pub fn validate(&self) -> Result<()> {
        self.fields().map(|_| ())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub(crate) fn fields(&self) -> Result<(Hour, Minute, Second)> {
        Ok((
            Hour::new(self.hour)?,
            Minute::new(self.minute)?,
            Second::new(self.second)?,
        ))
    }

    /// Number of seconds elapsed since 00:00:00.
    ///
    /// Only meaningful for valid timestamps.
    pub fn seconds_since_midnight(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    /// Inverse of [`Self::seconds_since_midnight`]. Returns
    /// [`ErrorKind::OutOfDomain`](crate::ErrorKind::OutOfDomain) if `seconds` is a day or more.
    pub fn from_seconds_since_midnight(seconds: u32) -> Result<Self> {
        if seconds >= SECONDS_PER_DAY {
            return out_of_domain("seconds since midnight out of range");
        }
        Ok(Self::from_seconds_of_day(seconds))
    }

    // seconds < SECONDS_PER_DAY.
    fn from_seconds_of_day(seconds: u32) -> Self {
        Self {
            hour: (seconds / 3600) as u8,
            minute: (seconds / 60 % 60) as u8,
            second: (seconds % 60) as u8,
        }
    }

    /// Reads the system clock and returns the current UTC time of day.
    ///
    /// A clock set before the unix epoch reads as midnight.
    #[cfg(feature = "std")]
    pub fn now_utc() -> Self {
        let since_epoch = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();
        Self::from_seconds_of_day((since_epoch.as_secs() % SECONDS_PER_DAY as u64) as u32)
    }

    /// Shorthand for [`crate::encode`].
    pub fn encode(&self) -> Result<EncodedTimeStamp> {
        codec::encode(self)
    }
}

impl Display for TimeStamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
