use crate::codec::{decode_record, encode_record, Record, ENCODED_LEN};
use crate::error::{error, ErrorKind, Result};
use crate::TimeStamp;
use alloc::vec::Vec;

/// A buffer for reusing allocations between calls to [`Buffer::encode`] and/or [`Buffer::decode`].
///
/// Many timestamps are encoded back to back as [`ENCODED_LEN`] byte records in input order.
///
/// ```rust
/// use timecode::{Buffer, TimeStamp};
///
/// let original = [TimeStamp::MIDNIGHT, TimeStamp::new(9, 5, 42).unwrap(), TimeStamp::MAX];
///
/// let mut buffer = Buffer::new();
/// buffer.encode(&original).unwrap();
/// let encoded: &[u8] = buffer.encode(&original).unwrap(); // Won't allocate
/// assert_eq!(encoded.len(), 12);
///
/// let mut buffer = Buffer::new();
/// let decoded: &[TimeStamp] = buffer.decode(&encoded).unwrap();
/// assert_eq!(original.as_slice(), decoded);
/// ```
#[derive(Default)]
pub struct Buffer {
    records: Vec<Record>,
    timestamps: Vec<TimeStamp>,
}

impl Buffer {
    /// Constructs a new buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new buffer with at least the specified capacity in timestamps.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            timestamps: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of timestamps the buffer can encode or decode without reallocating.
    pub fn capacity(&self) -> usize {
        self.records.capacity().min(self.timestamps.capacity())
    }

    /// Encodes `timestamps`, returning `timestamps.len() * ENCODED_LEN` bytes.
    ///
    /// Fails with [`ErrorKind::OutOfDomain`] at the first out of range timestamp.
    pub fn encode(&mut self, timestamps: &[TimeStamp]) -> Result<&[u8]> {
        self.records.clear();
        self.records.reserve(timestamps.len());
        for t in timestamps {
            self.records.push(encode_record(t)?);
        }
        Ok(bytemuck::cast_slice(&self.records))
    }

    /// Decodes a sequence of records produced by [`Buffer::encode`].
    ///
    /// Fails with [`ErrorKind::MalformedEncoding`] if `bytes.len()` isn't a multiple of
    /// [`ENCODED_LEN`] or any record is malformed.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<&[TimeStamp]> {
        let records: &[Record] = bytemuck::try_cast_slice(bytes).map_err(|_| {
            error(
                ErrorKind::MalformedEncoding,
                "length is not a multiple of 4",
            )
        })?;
        self.timestamps.clear();
        self.timestamps.reserve(records.len());
        for &record in records {
            self.timestamps.push(decode_record(record)?);
        }
        Ok(&self.timestamps)
    }
}

/// Encodes `timestamps` into a [`Vec<u8>`]. See [`Buffer::encode`].
pub fn encode_all(timestamps: &[TimeStamp]) -> Result<Vec<u8>> {
    let records = timestamps
        .iter()
        .map(encode_record)
        .collect::<Result<Vec<_>>>()?;
    let mut out = Vec::with_capacity(records.len() * ENCODED_LEN);
    out.extend_from_slice(bytemuck::cast_slice(&records));
    Ok(out)
}

/// Decodes a [`Vec<TimeStamp>`]. See [`Buffer::decode`].
pub fn decode_all(bytes: &[u8]) -> Result<Vec<TimeStamp>> {
    let mut buffer = Buffer::new();
    buffer.decode(bytes)?;
    Ok(buffer.timestamps)
}
