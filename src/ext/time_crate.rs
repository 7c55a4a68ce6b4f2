use crate::error::{out_of_domain, Error, Result};
use crate::TimeStamp;
use time::Time;

/// Drops the fractional second.
impl From<Time> for TimeStamp {
    fn from(value: Time) -> Self {
        let (hour, minute, second) = value.as_hms();
        Self {
            hour,
            minute,
            second,
        }
    }
}

impl TryFrom<TimeStamp> for Time {
    type Error = Error;

    fn try_from(value: TimeStamp) -> Result<Self> {
        let (hour, minute, second) = value.fields()?;
        Time::from_hms(hour.get(), minute.get(), second.get())
            .or_else(|_| out_of_domain("invalid time::Time"))
    }
}
