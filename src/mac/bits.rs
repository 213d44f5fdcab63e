//! Byte and bit-level queries
//!
//! Octet 0 is the most significant byte and the first one on the wire.
//! Two bits of octet 0 carry protocol meaning:
//!
//! - bit 0, **I/G** (Individual/Group): set for multicast, clear for unicast
//! - bit 1, **U/L** (Universal/Local): set for locally administered addresses
//!
//! The first three octets form the OUI, the last three the NIC-specific part.

use super::MacAddress;
use crate::error::{RangeError, RangeResult};
use crate::internal::constants::{HALF_LEN, IG_BIT, IPV4_MULTICAST_OUI, MAC_ADDR_LEN, UL_BIT};

/// Reverse the order of the eight bits in one octet.
///
/// `0xEA` (`11101010`) becomes `0x57` (`01010111`).
#[must_use]
pub const fn reverse_octet_bits(octet: u8) -> u8 {
    octet.reverse_bits()
}

impl MacAddress {
    // =========================================================================
    // Octet Access
    // =========================================================================

    /// Numeric value of octet `index`.
    ///
    /// [`first_byte`](Self::first_byte) through [`sixth_byte`](Self::sixth_byte)
    /// read the same octets with the index fixed at compile time, so they
    /// cannot fail.
    ///
    /// # Errors
    ///
    /// [`RangeError::OctetIndex`] if `index` is not in `0..=5`.
    pub const fn byte(&self, index: usize) -> RangeResult<u8> {
        if index < MAC_ADDR_LEN {
            Ok(self.bytes[index])
        } else {
            Err(RangeError::OctetIndex)
        }
    }

    /// Infallible form of [`byte`](Self::byte) for a compile-time index
    const fn nth<const N: usize>(&self) -> u8 {
        const { assert!(N < MAC_ADDR_LEN) };
        self.bytes[N]
    }

    /// Octet 0
    #[must_use]
    pub const fn first_byte(&self) -> u8 {
        self.nth::<0>()
    }

    /// Octet 1
    #[must_use]
    pub const fn second_byte(&self) -> u8 {
        self.nth::<1>()
    }

    /// Octet 2
    #[must_use]
    pub const fn third_byte(&self) -> u8 {
        self.nth::<2>()
    }

    /// Octet 3
    #[must_use]
    pub const fn fourth_byte(&self) -> u8 {
        self.nth::<3>()
    }

    /// Octet 4
    #[must_use]
    pub const fn fifth_byte(&self) -> u8 {
        self.nth::<4>()
    }

    /// Octet 5
    #[must_use]
    pub const fn sixth_byte(&self) -> u8 {
        self.nth::<5>()
    }

    // =========================================================================
    // I/G and U/L Bits
    // =========================================================================

    /// Is the Individual/Group bit set?
    #[must_use]
    pub const fn ig_bit(&self) -> bool {
        self.first_byte() & IG_BIT != 0
    }

    /// Group address (I/G bit set)
    #[must_use]
    pub const fn is_multicast(&self) -> bool {
        self.ig_bit()
    }

    /// Individual address (I/G bit clear)
    #[must_use]
    pub const fn is_unicast(&self) -> bool {
        !self.ig_bit()
    }

    /// Is the Universal/Local bit set?
    #[must_use]
    pub const fn ul_bit(&self) -> bool {
        self.first_byte() & UL_BIT != 0
    }

    /// Locally administered (U/L bit set)
    #[must_use]
    pub const fn is_local(&self) -> bool {
        self.ul_bit()
    }

    /// Alias of [`is_local`](Self::is_local)
    #[must_use]
    pub const fn is_locally_unique(&self) -> bool {
        self.is_local()
    }

    /// Universally administered (U/L bit clear)
    #[must_use]
    pub const fn is_universal(&self) -> bool {
        !self.ul_bit()
    }

    /// Alias of [`is_universal`](Self::is_universal)
    #[must_use]
    pub const fn is_globally_unique(&self) -> bool {
        self.is_universal()
    }

    /// `FF:FF:FF:FF:FF:FF`
    #[must_use]
    pub const fn is_broadcast(&self) -> bool {
        self.as_integer() == Self::BROADCAST.as_integer()
    }

    /// `00:00:00:00:00:00`
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.as_integer() == 0
    }

    // =========================================================================
    // OUI / NIC
    // =========================================================================

    /// Organizationally Unique Identifier: octets 0-2 as a big-endian integer
    #[must_use]
    pub const fn oui(&self) -> u32 {
        let [a, b, c, _, _, _] = self.bytes;
        u32::from_be_bytes([0, a, b, c])
    }

    /// NIC-specific part: octets 3-5 as a big-endian integer
    #[must_use]
    pub const fn nic(&self) -> u32 {
        let [_, _, _, d, e, f] = self.bytes;
        u32::from_be_bytes([0, d, e, f])
    }

    /// Is this an IPv4 multicast mapping (OUI `01:00:5E`)?
    #[must_use]
    pub const fn is_ipv4_multicast(&self) -> bool {
        self.oui() == IPV4_MULTICAST_OUI
    }

    /// Copy of this address with the NIC part zeroed, leaving only the OUI
    ///
    /// ```
    /// use mac48::MacAddress;
    ///
    /// let mac = MacAddress::from_text("12:34:56:78:9A:BC").unwrap();
    /// assert_eq!(mac.vendor().as_colon(), "12:34:56:00:00:00");
    /// ```
    #[must_use]
    pub const fn vendor(&self) -> Self {
        let mut bytes = self.bytes;
        let mut i = HALF_LEN;
        while i < MAC_ADDR_LEN {
            bytes[i] = 0;
            i += 1;
        }
        Self::new(bytes)
    }

    // =========================================================================
    // Bit Reversal
    // =========================================================================

    /// Reverse the bit order inside every octet, keeping octet positions.
    ///
    /// Some hardware and older token-ring tooling report addresses in
    /// bit-reversed (non-canonical) form; this converts between the two.
    /// Applying it twice yields the original address.
    ///
    /// ```
    /// use mac48::MacAddress;
    ///
    /// let mac = MacAddress::from_text("12:34:56:78:9A:BC").unwrap();
    /// assert_eq!(mac.reverse_bit_order().as_colon(), "48:2C:6A:1E:59:3D");
    /// assert_eq!(mac.reverse_bit_order().reverse_bit_order(), mac);
    /// ```
    #[must_use]
    pub const fn reverse_bit_order(&self) -> Self {
        let mut bytes = self.bytes;
        let mut i = 0;
        while i < MAC_ADDR_LEN {
            bytes[i] = reverse_octet_bits(bytes[i]);
            i += 1;
        }
        Self::new(bytes)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
