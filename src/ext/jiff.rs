use crate::error::{out_of_domain, Error, Result};
use crate::TimeStamp;
use jiff::civil::Time;

/// Drops the fractional second.
impl From<Time> for TimeStamp {
    fn from(value: Time) -> Self {
        // jiff guarantees 0 <= hour < 24 and 0 <= minute, second < 60.
        Self {
            hour: value.hour() as u8,
            minute: value.minute() as u8,
            second: value.second() as u8,
        }
    }
}

impl TryFrom<TimeStamp> for Time {
    type Error = Error;

    fn try_from(value: TimeStamp) -> Result<Self> {
        let (hour, minute, second) = value.fields()?;
        Time::new(hour.get() as i8, minute.get() as i8, second.get() as i8, 0)
            .or_else(|_| out_of_domain("invalid jiff::civil::Time"))
    }
}
