use crate::error::{out_of_domain, Error, Result};
use bytemuck::CheckedBitPattern;

macro_rules! ranged_field {
    ($(#[$attr:meta])* $name:ident, $max:literal, $what:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(u8);

        impl $name {
            /// The largest valid value.
            pub const MAX: Self = Self($max);

            /// Returns [`ErrorKind::OutOfDomain`](crate::ErrorKind::OutOfDomain) if `value` is
            /// out of range.
            pub fn new(value: u8) -> Result<Self> {
                match Self::from_bits(value) {
                    Some(v) => Ok(v),
                    None => out_of_domain(concat!($what, " out of range")),
                }
            }

            #[inline(always)]
            pub(crate) fn from_bits(bits: u8) -> Option<Self> {
                bytemuck::checked::try_cast(bits).ok()
            }

            #[inline(always)]
            pub fn get(self) -> u8 {
                self.0
            }
        }

        // Safety: u8 and $name have the same layout since $name is #[repr(transparent)].
        unsafe impl CheckedBitPattern for $name {
            type Bits = u8;
            #[inline(always)]
            fn is_valid_bit_pattern(bits: &Self::Bits) -> bool {
                *bits <= $max
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<u8> for $name {
            type Error = Error;
            fn try_from(value: u8) -> Result<Self> {
                Self::new(value)
            }
        }
    };
}

ranged_field!(
    /// A u8 guaranteed to be < 24.
    Hour,
    23,
    "hour"
);
ranged_field!(
    /// A u8 guaranteed to be < 60.
    Minute,
    59,
    "minute"
);
ranged_field!(
    /// A u8 guaranteed to be < 60.
    Second,
    59,
    "second"
);
