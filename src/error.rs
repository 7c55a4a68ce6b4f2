use core::fmt::{Debug, Display, Formatter};

/// Short version of `Err(error(ErrorKind::OutOfDomain, "..."))`.
pub fn out_of_domain<T>(msg: &'static str) -> Result<T> {
    Err(error(ErrorKind::OutOfDomain, msg))
}

/// Short version of `Err(error(ErrorKind::MalformedEncoding, "..."))`.
pub fn malformed<T>(msg: &'static str) -> Result<T> {
    Err(error(ErrorKind::MalformedEncoding, msg))
}

/// Creates an error with a message that might be displayed.
pub fn error(kind: ErrorKind, _msg: &'static str) -> Error {
    Error {
        kind,
        #[cfg(debug_assertions)]
        reason: _msg,
        #[cfg(not(debug_assertions))]
        reason: (),
    }
}

#[cfg(debug_assertions)]
type ErrorImpl = &'static str;
#[cfg(not(debug_assertions))]
type ErrorImpl = ();

pub type Result<T> = core::result::Result<T, Error>;

/// What went wrong, independent of build mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field was outside of its time-of-day range when encoding or constructing.
    OutOfDomain,
    /// The bytes given to a decoder are not a valid encoding.
    MalformedEncoding,
}

impl ErrorKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::OutOfDomain => "out of domain",
            Self::MalformedEncoding => "malformed encoding",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoding / decoding errors.
/// # Debug mode
/// In debug mode, the error contains a reason in addition to its [`ErrorKind`].
/// # Release mode
/// In release mode, the error is just an [`ErrorKind`].
#[derive(Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Error {
    kind: ErrorKind,
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    reason: ErrorImpl,
}

impl Error {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        #[cfg(debug_assertions)]
        return write!(f, "Error({:?}, {:?})", self.kind, self.reason);
        #[cfg(not(debug_assertions))]
        write!(f, "Error({:?})", self.kind)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        #[cfg(debug_assertions)]
        return write!(f, "{}: {}", self.kind, self.reason);
        #[cfg(not(debug_assertions))]
        Display::fmt(&self.kind, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn kind_survives() {
        assert_eq!(
            out_of_domain::<()>("hour").unwrap_err().kind(),
            ErrorKind::OutOfDomain
        );
        assert_eq!(
            malformed::<()>("length").unwrap_err().kind(),
            ErrorKind::MalformedEncoding
        );
    }

    #[test]
    fn display() {
        let e = error(ErrorKind::MalformedEncoding, "reserved byte is not zero");
        #[cfg(debug_assertions)]
        assert_eq!(e.to_string(), "malformed encoding: reserved byte is not zero");
        #[cfg(not(debug_assertions))]
        assert_eq!(e.to_string(), "malformed encoding");
    }
}
