//! The MAC address value type
//!
//! [`MacAddress`] holds exactly six octets. Every constructor validates its
//! input into that canonical form, and every other view (text, integer,
//! bytes, bit fields) is derived from it on demand.
//!
//! # Construction
//!
//! | Input | Constructor | Failure |
//! |-------|-------------|---------|
//! | text with any delimiters | [`MacAddress::from_text`] | [`FormatError::WrongDigitCount`] |
//! | integer | [`MacAddress::from_integer`] | [`RangeError`] |
//! | six raw bytes | [`MacAddress::from_bytes`] | [`FormatError::WrongByteLength`] |
//! | byte array | [`MacAddress::new`] | infallible |
//! | anything | [`MacAddress::from_candidate`] | [`Error`](crate::Error) |
//!
//! Text parsing keeps only hex digits, so `12:34:56:78:9a:bc`,
//! `12-34-56-78-9A-BC`, `1234.5678.9abc` and `123456789ABC` all describe the
//! same address. Groups with a missing leading zero (`1:2:3:4:5:6`) are
//! rejected rather than padded.

pub mod bits;
pub mod candidate;
pub mod config;
pub mod eui48;
pub mod format;

use core::str::FromStr;

use crate::error::{FormatError, FormatResult, RangeError, RangeResult};
use crate::internal::constants::{HEX_DIGITS, MAC_ADDR_LEN, MAX_INTEGER};
use crate::internal::hex;

/// An IEEE 802 48-bit MAC address
///
/// Immutable; transformations such as [`reverse_bit_order`](Self::reverse_bit_order)
/// and [`vendor`](Self::vendor) return a new value. Equality, ordering and
/// hashing are over the 48 bits, so addresses work as map keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MacAddress {
    bytes: [u8; MAC_ADDR_LEN],
}

impl MacAddress {
    /// `00:00:00:00:00:00`
    pub const ZERO: Self = Self::new([0x00; MAC_ADDR_LEN]);

    /// `FF:FF:FF:FF:FF:FF`
    pub const BROADCAST: Self = Self::new([0xFF; MAC_ADDR_LEN]);

    /// Create an address from its six octets, most significant first
    #[must_use]
    pub const fn new(bytes: [u8; MAC_ADDR_LEN]) -> Self {
        Self { bytes }
    }

    /// Parse an address from text.
    ///
    /// Every character that is not a hex digit is discarded and exactly 12
    /// digits must remain, so delimiters are free-form. Letters outside
    /// `A-F` are dropped like any delimiter.
    ///
    /// # Errors
    ///
    /// [`FormatError::WrongDigitCount`] unless exactly 12 hex digits are found.
    ///
    /// # Example
    /// ```
    /// use mac48::MacAddress;
    ///
    /// let mac = MacAddress::from_text("12:34:56:78:9a:bc").unwrap();
    /// assert_eq!(mac.as_colon(), "12:34:56:78:9A:BC");
    /// assert!(MacAddress::from_text("1:2:3:4:5:6").is_err());
    /// ```
    pub const fn from_text(text: &str) -> FormatResult<Self> {
        let input = text.as_bytes();
        let mut value: u64 = 0;
        let mut digits = 0;
        let mut i = 0;

        while i < input.len() {
            if let Some(n) = hex::nibble(input[i]) {
                if digits < HEX_DIGITS {
                    value = (value << 4) | n as u64;
                }
                digits += 1;
            }
            i += 1;
        }

        if digits != HEX_DIGITS {
            return Err(FormatError::WrongDigitCount);
        }

        Ok(Self::from_u48(value))
    }

    /// Create an address from a signed integer in `0..=2^48 - 1`.
    ///
    /// # Errors
    ///
    /// [`RangeError::Negative`] or [`RangeError::TooLarge`] outside that interval.
    pub const fn from_integer(value: i64) -> RangeResult<Self> {
        if value < 0 {
            return Err(RangeError::Negative);
        }
        Self::from_u64(value as u64)
    }

    /// Create an address from an unsigned integer no larger than `2^48 - 1`.
    ///
    /// # Errors
    ///
    /// [`RangeError::TooLarge`] above that bound.
    pub const fn from_u64(value: u64) -> RangeResult<Self> {
        if value > MAX_INTEGER {
            return Err(RangeError::TooLarge);
        }
        Ok(Self::from_u48(value))
    }

    /// Create an address from a buffer of exactly six raw bytes.
    ///
    /// # Errors
    ///
    /// [`FormatError::WrongByteLength`] for any other buffer length.
    pub const fn from_bytes(bytes: &[u8]) -> FormatResult<Self> {
        match bytes {
            [a, b, c, d, e, f] => Ok(Self::new([*a, *b, *c, *d, *e, *f])),
            _ => Err(FormatError::WrongByteLength),
        }
    }

    /// Build from a value already known to fit in 48 bits
    const fn from_u48(value: u64) -> Self {
        let [_, _, a, b, c, d, e, f] = value.to_be_bytes();
        Self::new([a, b, c, d, e, f])
    }

    /// The six octets, most significant (first transmitted) first
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; MAC_ADDR_LEN] {
        &self.bytes
    }

    /// The address as a 48-bit unsigned integer
    ///
    /// ```
    /// use mac48::MacAddress;
    ///
    /// let mac = MacAddress::from_text("12:34:56:78:9A:BC").unwrap();
    /// assert_eq!(mac.as_integer(), 20_015_998_343_868);
    /// ```
    #[must_use]
    pub const fn as_integer(&self) -> u64 {
        let [a, b, c, d, e, f] = self.bytes;
        u64::from_be_bytes([0, 0, a, b, c, d, e, f])
    }
}

// =============================================================================
// Standard Conversions
// =============================================================================

impl FromStr for MacAddress {
    type Err = FormatError;

    fn from_str(s: &str) -> FormatResult<Self> {
        Self::from_text(s)
    }
}

impl From<[u8; MAC_ADDR_LEN]> for MacAddress {
    fn from(bytes: [u8; MAC_ADDR_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl TryFrom<&[u8]> for MacAddress {
    type Error = FormatError;

    fn try_from(bytes: &[u8]) -> FormatResult<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<u64> for MacAddress {
    type Error = RangeError;

    fn try_from(value: u64) -> RangeResult<Self> {
        Self::from_u64(value)
    }
}

impl TryFrom<i64> for MacAddress {
    type Error = RangeError;

    fn try_from(value: i64) -> RangeResult<Self> {
        Self::from_integer(value)
    }
}

impl From<MacAddress> for [u8; MAC_ADDR_LEN] {
    fn from(mac: MacAddress) -> Self {
        mac.bytes
    }
}

impl From<MacAddress> for u64 {
    fn from(mac: MacAddress) -> Self {
        mac.as_integer()
    }
}

impl AsRef<[u8]> for MacAddress {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
