//! Best-effort construction from loosely typed input
//!
//! Configuration files, CLI arguments and decoded records hand over values
//! whose type is only known at runtime. [`Candidate`] tags such a value, and
//! [`MacAddress::from_candidate`] dispatches it to the matching constructor.

use super::MacAddress;
use crate::error::{Error, Result};

/// A value that might describe a MAC address
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Candidate<'a> {
    /// An existing address, passed through unchanged
    Address(MacAddress),
    /// Integer in `0..=2^48 - 1`
    Integer(i64),
    /// Exactly six raw bytes
    Bytes(&'a [u8]),
    /// Text with 12 hex digits and any delimiters
    Text(&'a str),
    /// Floating point number (never convertible)
    Float(f64),
    /// Boolean (never convertible)
    Bool(bool),
    /// Missing value (never convertible)
    Null,
}

impl Candidate<'_> {
    /// Short name of the input kind, used in [`Error::TypeMismatch`]
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Candidate::Address(_) => "address",
            Candidate::Integer(_) => "integer",
            Candidate::Bytes(_) => "bytes",
            Candidate::Text(_) => "text",
            Candidate::Float(_) => "float",
            Candidate::Bool(_) => "bool",
            Candidate::Null => "null",
        }
    }
}

// =============================================================================
// Conversions into Candidate
// =============================================================================

impl From<MacAddress> for Candidate<'_> {
    fn from(mac: MacAddress) -> Self {
        Candidate::Address(mac)
    }
}

impl From<&MacAddress> for Candidate<'_> {
    fn from(mac: &MacAddress) -> Self {
        Candidate::Address(*mac)
    }
}

impl From<i64> for Candidate<'_> {
    fn from(n: i64) -> Self {
        Candidate::Integer(n)
    }
}

impl From<i32> for Candidate<'_> {
    fn from(n: i32) -> Self {
        Candidate::Integer(n.into())
    }
}

impl From<u32> for Candidate<'_> {
    fn from(n: u32) -> Self {
        Candidate::Integer(n.into())
    }
}

impl From<u16> for Candidate<'_> {
    fn from(n: u16) -> Self {
        Candidate::Integer(n.into())
    }
}

impl From<u8> for Candidate<'_> {
    fn from(n: u8) -> Self {
        Candidate::Integer(n.into())
    }
}

// Anything past i64::MAX is far beyond 48 bits, so saturating keeps the
// TooLarge outcome.
impl From<u64> for Candidate<'_> {
    fn from(n: u64) -> Self {
        Candidate::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<usize> for Candidate<'_> {
    fn from(n: usize) -> Self {
        Candidate::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl<'a> From<&'a [u8]> for Candidate<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Candidate::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Candidate<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Candidate::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(text: &'a str) -> Self {
        Candidate::Text(text)
    }
}

impl From<f64> for Candidate<'_> {
    fn from(x: f64) -> Self {
        Candidate::Float(x)
    }
}

impl From<bool> for Candidate<'_> {
    fn from(b: bool) -> Self {
        Candidate::Bool(b)
    }
}

impl<'a, T: Into<Candidate<'a>>> From<Option<T>> for Candidate<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Candidate::Null, Into::into)
    }
}

// =============================================================================
// Factory
// =============================================================================

impl MacAddress {
    /// Convert any supported input into an address.
    ///
    /// Addresses pass through, integers go to [`from_integer`](Self::from_integer),
    /// bytes to [`from_bytes`](Self::from_bytes) and text to
    /// [`from_text`](Self::from_text).
    ///
    /// # Errors
    ///
    /// The error of the selected constructor, or [`Error::TypeMismatch`] for
    /// input kinds with no conversion rule.
    ///
    /// # Example
    /// ```
    /// use mac48::{Error, MacAddress};
    ///
    /// let a = MacAddress::from_candidate("12:34:56:78:9a:bc").unwrap();
    /// let b = MacAddress::from_candidate(20_015_998_343_868_i64).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(MacAddress::from_candidate(1.5), Err(Error::TypeMismatch("float")));
    /// ```
    pub fn from_candidate<'a>(candidate: impl Into<Candidate<'a>>) -> Result<Self> {
        let candidate = candidate.into();

        #[cfg(feature = "defmt")]
        defmt::trace!("converting {=str} candidate to MAC address", candidate.kind());

        match candidate {
            Candidate::Address(mac) => Ok(mac),
            Candidate::Integer(n) => Ok(Self::from_integer(n)?),
            Candidate::Bytes(bytes) => Ok(Self::from_bytes(bytes)?),
            Candidate::Text(text) => Ok(Self::from_text(text)?),
            Candidate::Float(_) | Candidate::Bool(_) | Candidate::Null => {
                Err(Error::TypeMismatch(candidate.kind()))
            }
        }
    }

    /// Like [`from_candidate`](Self::from_candidate), but any failure yields `None`.
    pub fn from_candidate_or_none<'a>(candidate: impl Into<Candidate<'a>>) -> Option<Self> {
        match Self::from_candidate(candidate) {
            Ok(mac) => Some(mac),
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("discarding MAC candidate: {}", _err);
                None
            }
        }
    }

    /// Parse text, returning `None` on failure or when the input is not text.
    ///
    /// ```
    /// use mac48::MacAddress;
    ///
    /// assert!(MacAddress::from_text_or_none("12:34:56:78:9a:bc").is_some());
    /// assert!(MacAddress::from_text_or_none("not a valid mac").is_none());
    /// assert!(MacAddress::from_text_or_none(None::<&str>).is_none());
    /// ```
    pub fn from_text_or_none<'a>(candidate: impl Into<Candidate<'a>>) -> Option<Self> {
        let text = match candidate.into() {
            Candidate::Text(text) => text,
            _other => {
                #[cfg(feature = "defmt")]
                defmt::debug!("expected text MAC candidate, got {=str}", _other.kind());
                return None;
            }
        };

        match Self::from_text(text) {
            Ok(mac) => Some(mac),
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("discarding MAC text: {}", _err);
                None
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
