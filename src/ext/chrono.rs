use crate::error::{out_of_domain, Error, Result};
use crate::TimeStamp;
use chrono::{NaiveTime, Timelike};

/// Drops the fractional second. A leap second reads as second 59.
impl From<NaiveTime> for TimeStamp {
    fn from(value: NaiveTime) -> Self {
        Self {
            hour: value.hour() as u8,
            minute: value.minute() as u8,
            second: value.second() as u8,
        }
    }
}

impl TryFrom<TimeStamp> for NaiveTime {
    type Error = Error;

    fn try_from(value: TimeStamp) -> Result<Self> {
        let (hour, minute, second) = value.fields()?;
        match NaiveTime::from_hms_opt(hour.get() as u32, minute.get() as u32, second.get() as u32) {
            Some(t) => Ok(t),
            None => out_of_domain("invalid chrono::NaiveTime"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, TimeStamp};
    use chrono::{NaiveTime, Timelike};

    #[test]
    fn test_chrono_naive_time() {
        let t = TimeStamp::new(23, 59, 59).unwrap();
        let naive = NaiveTime::try_from(t).unwrap();
        assert_eq!(naive, NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(TimeStamp::from(naive), t);

        for (hour, minute, second) in [(24, 0, 0), (0, 60, 0), (0, 0, 60)] {
            let t = TimeStamp {
                hour,
                minute,
                second,
            };
            assert_eq!(
                NaiveTime::try_from(t).unwrap_err().kind(),
                ErrorKind::OutOfDomain
            );
        }
    }

    #[test]
    fn truncates_fraction() {
        let naive = NaiveTime::from_hms_nano_opt(9, 5, 42, 999_999_999).unwrap();
        assert_eq!(TimeStamp::from(naive), TimeStamp::new(9, 5, 42).unwrap());

        let leap = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        assert_eq!(TimeStamp::from(leap), TimeStamp::MAX);
    }

    #[test]
    fn encode_decode() {
        for (h, m, s) in crate::random_data::<(u8, u8, u8)>(1000) {
            let naive = NaiveTime::from_hms_opt((h % 24) as u32, (m % 60) as u32, (s % 60) as u32)
                .unwrap();
            let decoded = crate::decode(TimeStamp::from(naive).encode().unwrap().as_ref()).unwrap();
            assert_eq!(NaiveTime::try_from(decoded).unwrap(), naive);
            assert_eq!(naive.nanosecond(), 0);
        }
    }
}
