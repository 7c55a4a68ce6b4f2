use crate::error::{error, malformed, ErrorKind, Result};
use crate::field::{Hour, Minute, Second};
use crate::TimeStamp;
use bytemuck::{Pod, Zeroable};

/// Version of the byte layout produced by [`encode`].
///
/// Version 1 is 4 bytes: hour, minute, second, then a reserved byte that must be zero. Each
/// field is one unsigned byte, so byte order is the order above.
pub const FORMAT_VERSION: u8 = 1;

/// Length in bytes of every [`EncodedTimeStamp`].
pub const ENCODED_LEN: usize = 4;

/// The on-the-wire layout of one timestamp.
#[derive(Copy, Clone)]
#[repr(C)]
pub(crate) struct Record {
    hour: u8,
    minute: u8,
    second: u8,
    reserved: u8,
}

// Safety: Record is #[repr(C)] and only contains u8s, so it has no padding and any bit pattern
// is valid.
unsafe impl Zeroable for Record {}
unsafe impl Pod for Record {}

/// The fixed-width byte form of a [`TimeStamp`].
///
/// Always [`ENCODED_LEN`] bytes long. Doesn't borrow from the [`TimeStamp`] it came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EncodedTimeStamp([u8; ENCODED_LEN]);

impl EncodedTimeStamp {
    pub fn as_bytes(&self) -> &[u8; ENCODED_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; ENCODED_LEN] {
        self.0
    }

    /// Shorthand for [`decode`].
    pub fn decode(&self) -> Result<TimeStamp> {
        decode_record(bytemuck::must_cast(self.0))
    }
}

impl AsRef<[u8]> for EncodedTimeStamp {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<EncodedTimeStamp> for [u8; ENCODED_LEN] {
    fn from(value: EncodedTimeStamp) -> Self {
        value.0
    }
}

/// Only checks the length. Contents are checked by [`EncodedTimeStamp::decode`].
impl TryFrom<&[u8]> for EncodedTimeStamp {
    type Error = crate::Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        match <[u8; ENCODED_LEN]>::try_from(bytes) {
            Ok(bytes) => Ok(Self(bytes)),
            Err(_) => malformed("expected 4 bytes"),
        }
    }
}

/// Encodes a [`TimeStamp`] into its fixed-width byte form.
///
/// Returns [`ErrorKind::OutOfDomain`] if any field is out of range.
///
/// ```rust
/// use timecode::TimeStamp;
///
/// let t = TimeStamp::new(9, 5, 42).unwrap();
/// let encoded = timecode::encode(&t).unwrap();
/// assert_eq!(encoded.as_bytes(), &[9, 5, 42, 0]);
/// assert_eq!(timecode::decode(encoded.as_ref()).unwrap(), t);
/// ```
pub fn encode(t: &TimeStamp) -> Result<EncodedTimeStamp> {
    Ok(EncodedTimeStamp(bytemuck::must_cast(encode_record(t)?)))
}

pub(crate) fn encode_record(t: &TimeStamp) -> Result<Record> {
    let (hour, minute, second) = t.fields()?;
    Ok(Record {
        hour: hour.get(),
        minute: minute.get(),
        second: second.get(),
        reserved: 0,
    })
}

/// Decodes a [`TimeStamp`] from exactly [`ENCODED_LEN`] bytes.
///
/// Returns [`ErrorKind::MalformedEncoding`] if the length is wrong, a field is out of range or
/// the reserved byte isn't zero.
pub fn decode(bytes: &[u8]) -> Result<TimeStamp> {
    EncodedTimeStamp::try_from(bytes)?.decode()
}

pub(crate) fn decode_record(record: Record) -> Result<TimeStamp> {
    if record.reserved != 0 {
        return malformed("reserved byte is not zero");
    }
    let hour = Hour::from_bits(record.hour).ok_or_else(|| invalid("invalid hour"))?;
    let minute = Minute::from_bits(record.minute).ok_or_else(|| invalid("invalid minute"))?;
    let second = Second::from_bits(record.second).ok_or_else(|| invalid("invalid second"))?;
    Ok(TimeStamp {
        hour: hour.get(),
        minute: minute.get(),
        second: second.get(),
    })
}

fn invalid(msg: &'static str) -> crate::Error {
    error(ErrorKind::MalformedEncoding, msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario() {
        let t = TimeStamp {
            hour: 9,
            minute: 5,
            second: 42,
        };
        let encoded = encode(&t).unwrap();
        assert_eq!(encoded.into_bytes(), [9, 5, 42, 0]);
        assert_eq!(decode(encoded.as_ref()).unwrap(), t);
    }

    #[test]
    fn boundaries() {
        for t in [TimeStamp::MIDNIGHT, TimeStamp::MAX] {
            let encoded = encode(&t).unwrap();
            assert_eq!(encoded.decode().unwrap(), t);
        }
        assert_eq!(encode(&TimeStamp::MIDNIGHT).unwrap().into_bytes(), [0; 4]);
        assert_eq!(
            encode(&TimeStamp::MAX).unwrap().into_bytes(),
            [23, 59, 59, 0]
        );
    }

    #[test]
    fn every_valid_timestamp() {
        for hour in 0..24 {
            for minute in 0..60 {
                for second in 0..60 {
                    let t = TimeStamp {
                        hour,
                        minute,
                        second,
                    };
                    let encoded = encode(&t).unwrap();
                    assert_eq!(encoded.as_bytes().len(), ENCODED_LEN);
                    assert_eq!(decode(encoded.as_ref()).unwrap(), t);
                }
            }
        }
    }

    #[test]
    fn out_of_domain() {
        for (hour, minute, second) in [(24, 0, 0), (0, 60, 0), (0, 0, 60), (23, 59, 255)] {
            let t = TimeStamp {
                hour,
                minute,
                second,
            };
            assert_eq!(encode(&t).unwrap_err().kind(), ErrorKind::OutOfDomain);
        }
    }

    #[test]
    fn wrong_length() {
        for len in [0, 1, 3, 5, 8] {
            let bytes = alloc::vec![0u8; len];
            assert_eq!(
                decode(&bytes).unwrap_err().kind(),
                ErrorKind::MalformedEncoding
            );
            assert!(EncodedTimeStamp::try_from(bytes.as_slice()).is_err());
        }
    }

    #[test]
    fn invalid_bytes() {
        assert!(decode(&[23, 59, 59, 0]).is_ok());
        for bytes in [
            [24, 59, 59, 0],
            [23, 60, 59, 0],
            [23, 59, 60, 0],
            [23, 59, 59, 1],
            [0, 0, 0, FORMAT_VERSION],
            [255; 4],
        ] {
            assert_eq!(
                decode(&bytes).unwrap_err().kind(),
                ErrorKind::MalformedEncoding
            );
        }
    }

    #[test]
    fn random() {
        for (h, m, s) in crate::random_data::<(u8, u8, u8)>(1000) {
            let t = TimeStamp {
                hour: h,
                minute: m,
                second: s,
            };
            let valid = h < 24 && m < 60 && s < 60;
            assert_eq!(t.is_valid(), valid);
            assert_eq!(encode(&t).is_ok(), valid);
            assert_eq!(decode(&[h, m, s, 0]).is_ok(), valid);
        }
    }
}
