//! Rendering MAC addresses as text
//!
//! All renderers are total: they work on the canonical six octets and
//! never fail. Output is written into a [`MacString`], a small stack
//! buffer, so rendering needs no allocator.
//!
//! | Method | Output |
//! |--------|--------|
//! | [`as_colon`](MacAddress::as_colon) | `12:34:56:78:9A:BC` |
//! | [`as_dash`](MacAddress::as_dash) | `12-34-56-78-9A-BC` |
//! | [`as_dot`](MacAddress::as_dot) | `1234.5678.9ABC` |
//! | [`as_uppercase`](MacAddress::as_uppercase) | `123456789ABC` |
//! | [`as_lowercase`](MacAddress::as_lowercase) | `123456789abc` |
//!
//! Other layouts go through [`MacAddress::format`] with a [`FormatConfig`].

use core::fmt;
use core::ops::Deref;

use super::MacAddress;
use super::config::{FormatConfig, LetterCase};
use crate::internal::constants::{HEX_DIGITS, MAC_ADDR_LEN, MAX_RENDERED_LEN};
use crate::internal::hex;

// =============================================================================
// Output Buffers
// =============================================================================

/// A rendered MAC address
///
/// Fixed-capacity ASCII string, large enough for any [`FormatConfig`].
/// Dereferences to `str` and compares equal to string slices.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacString {
    buf: [u8; MAX_RENDERED_LEN],
    len: u8,
}

impl MacString {
    const fn empty() -> Self {
        Self {
            buf: [0; MAX_RENDERED_LEN],
            len: 0,
        }
    }

    const fn push(&mut self, c: u8) {
        self.buf[self.len as usize] = c;
        self.len += 1;
    }

    /// The rendered text
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever pushed.
        core::str::from_utf8(&self.buf[..self.len as usize]).unwrap_or_default()
    }
}

impl Deref for MacString {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for MacString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MacString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for MacString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq<str> for MacString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for MacString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MacString {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

/// One octet rendered as two uppercase hex digits
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexOctet {
    digits: [u8; 2],
    value: u8,
}

impl HexOctet {
    /// Render a single byte
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self {
            digits: hex::byte_to_digits(value),
            value,
        }
    }

    /// The two digits, e.g. `"9A"`
    pub fn as_str(&self) -> &str {
        // Both digits come from the hex table.
        core::str::from_utf8(&self.digits).unwrap_or_default()
    }

    /// The numeric value of the octet
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }
}

impl fmt::Display for HexOctet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for HexOctet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq<str> for HexOctet {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HexOctet {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HexOctet {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

// =============================================================================
// Renderers
// =============================================================================

impl MacAddress {
    /// Render with an arbitrary [`FormatConfig`].
    ///
    /// The 12 hex digits are split left to right into groups of
    /// `config.group_size` digits and joined with `config.separator`.
    ///
    /// # Example
    /// ```
    /// use mac48::{FormatConfig, GroupSize, MacAddress, Separator};
    ///
    /// let mac = MacAddress::from_text("12:34:56:78:9A:BC").unwrap();
    /// let halves = FormatConfig::new()
    ///     .with_group_size(GroupSize::Six)
    ///     .with_separator(Separator::Dash);
    /// assert_eq!(mac.format(halves), "123456-789ABC");
    /// ```
    #[must_use]
    pub const fn format(&self, config: FormatConfig) -> MacString {
        let group = config.group_size.digits();
        let uppercase = matches!(config.case, LetterCase::Upper);
        let mut out = MacString::empty();

        let mut i = 0;
        while i < HEX_DIGITS {
            if i > 0 && i % group == 0 {
                if let Some(sep) = config.separator.as_byte() {
                    out.push(sep);
                }
            }
            let byte = self.bytes[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte };
            out.push(hex::digit(nibble, uppercase));
            i += 1;
        }

        out
    }

    /// `12:34:56:78:9A:BC`
    #[must_use]
    pub const fn as_colon(&self) -> MacString {
        self.format(FormatConfig::COLON)
    }

    /// `12-34-56-78-9A-BC`, the IEEE 802 canonical form
    #[must_use]
    pub const fn as_dash(&self) -> MacString {
        self.format(FormatConfig::DASH)
    }

    /// Alias of [`as_dash`](Self::as_dash)
    #[must_use]
    #[doc(alias = "as_iee802")]
    pub const fn as_ieee802(&self) -> MacString {
        self.as_dash()
    }

    /// `1234.5678.9ABC`
    #[must_use]
    pub const fn as_dot(&self) -> MacString {
        self.format(FormatConfig::DOT)
    }

    /// `123456789ABC`
    #[must_use]
    pub const fn as_uppercase(&self) -> MacString {
        self.format(FormatConfig::UPPERCASE)
    }

    /// `123456789abc`
    #[must_use]
    pub const fn as_lowercase(&self) -> MacString {
        self.format(FormatConfig::LOWERCASE)
    }

    /// The six octets as two-digit hex strings, most significant first
    #[must_use]
    pub const fn octets(&self) -> [HexOctet; MAC_ADDR_LEN] {
        let [a, b, c, d, e, f] = self.bytes;
        [
            HexOctet::new(a),
            HexOctet::new(b),
            HexOctet::new(c),
            HexOctet::new(d),
            HexOctet::new(e),
            HexOctet::new(f),
        ]
    }
}

/// Colon form, e.g. `12:34:56:78:9A:BC`
impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_colon().as_str())
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddress({})", self.as_colon())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MacAddress {
    fn format(&self, f: defmt::Formatter<'_>) {
        let [a, b, c, d, e, g] = self.bytes;
        defmt::write!(
            f,
            "{=u8:02X}:{=u8:02X}:{=u8:02X}:{=u8:02X}:{=u8:02X}:{=u8:02X}",
            a,
            b,
            c,
            d,
            e,
            g
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
