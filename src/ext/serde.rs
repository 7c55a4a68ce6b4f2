use crate::TimeStamp;
use core::fmt::Formatter;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialized as an `(hour, minute, second)` tuple.
impl Serialize for TimeStamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.hour)?;
        tuple.serialize_element(&self.minute)?;
        tuple.serialize_element(&self.second)?;
        tuple.end()
    }
}

/// Rejects out of range fields.
impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(3, TimeStampVisitor)
    }
}

struct TimeStampVisitor;

impl<'de> Visitor<'de> for TimeStampVisitor {
    type Value = TimeStamp;

    fn expecting(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("an (hour, minute, second) tuple")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TimeStamp, A::Error> {
        let hour = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let minute = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let second = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        TimeStamp::new(hour, minute, second).map_err(de::Error::custom)
    }
}
