#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod buffer;
mod codec;
mod error;
mod ext;
mod field;
mod timestamp;

pub use crate::buffer::{decode_all, encode_all, Buffer};
pub use crate::codec::{decode, encode, EncodedTimeStamp, ENCODED_LEN, FORMAT_VERSION};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::field::{Hour, Minute, Second};
pub use crate::timestamp::TimeStamp;

#[cfg(test)]
fn random_data<T>(n: usize) -> alloc::vec::Vec<T>
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    use rand::prelude::*;
    let mut rng = rand_chacha::ChaCha20Rng::from_seed(Default::default());
    (0..n).map(|_| rng.gen()).collect()
}
