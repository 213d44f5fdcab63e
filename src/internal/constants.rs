//! Centralized Constants
//!
//! Single source of truth for the widths, limits and well-known prefixes
//! used by the MAC address type.
//!
//! # Organization
//!
//! - **Widths**: octet and digit counts of the canonical form
//! - **Limits**: integer range of the 48-bit view
//! - **Address bits**: I/G and U/L masks in the first octet
//! - **Well-known prefixes**: reserved OUIs

// =============================================================================
// Widths
// =============================================================================

/// MAC address length in bytes
pub const MAC_ADDR_LEN: usize = 6;

/// Number of hex digits in the canonical textual form
pub const HEX_DIGITS: usize = MAC_ADDR_LEN * 2;

/// Number of bits in an address
pub const MAC_ADDR_BITS: u32 = 48;

/// Length of the OUI and NIC halves in bytes
pub const HALF_LEN: usize = MAC_ADDR_LEN / 2;

/// Longest rendering: 12 digits with a separator between every digit
pub const MAX_RENDERED_LEN: usize = HEX_DIGITS * 2 - 1;

// =============================================================================
// Limits
// =============================================================================

/// Largest value representable by the integer view (2^48 - 1)
pub const MAX_INTEGER: u64 = (1 << MAC_ADDR_BITS) - 1;

// The integer view is carried in a `u64`; anything narrower would lose bits.
const _: () = assert!(u64::BITS >= MAC_ADDR_BITS);

// =============================================================================
// Address Bits
// =============================================================================

/// Individual/Group bit of the first octet (set = multicast)
pub const IG_BIT: u8 = 0b0000_0001;

/// Universal/Local bit of the first octet (set = locally administered)
pub const UL_BIT: u8 = 0b0000_0010;

// =============================================================================
// Well-known Prefixes
// =============================================================================

/// IANA OUI reserved for mapping IPv4 multicast groups (RFC 1112)
pub const IPV4_MULTICAST_OUI: u32 = 0x01_00_5E;
