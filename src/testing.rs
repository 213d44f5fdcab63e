//! Testing utilities and shared fixtures
//!
//! Well-known addresses used across the unit tests, plus a deterministic
//! spread of addresses for checking invariants over the whole 48-bit range.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]

extern crate std;

use crate::MacAddress;
use crate::internal::constants::MAX_INTEGER;

// =============================================================================
// Fixtures
// =============================================================================

/// `12:34:56:78:9A:BC`
pub const SAMPLE_BYTES: [u8; 6] = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC];

pub const SAMPLE: MacAddress = MacAddress::new(SAMPLE_BYTES);

/// Integer value of [`SAMPLE`]
pub const SAMPLE_INTEGER: u64 = 20_015_998_343_868;

/// [`SAMPLE`] with the bits of each octet reversed
pub const REVERSED: MacAddress = MacAddress::new([0x48, 0x2C, 0x6A, 0x1E, 0x59, 0x3D]);

/// Only the I/G bit set
pub const MULTICAST: MacAddress = MacAddress::new([0x01, 0, 0, 0, 0, 0]);

/// Only the U/L bit set
pub const LOCAL: MacAddress = MacAddress::new([0x02, 0, 0, 0, 0, 0]);

// =============================================================================
// Address Spread
// =============================================================================

/// Number of addresses yielded by [`sample_addresses`]
pub const SPREAD_LEN: u64 = 512;

/// Deterministic addresses covering the range, in ascending order.
///
/// Evenly spaced values perturbed by a splitmix64 step so every octet and
/// flag bit varies, ending at `FF:FF:FF:FF:FF:FF`.
pub fn sample_addresses() -> impl Iterator<Item = MacAddress> {
    let step = MAX_INTEGER / SPREAD_LEN;
    (0..=SPREAD_LEN).map(move |i| {
        let base = i * step;
        let jitter = if i == SPREAD_LEN { 0 } else { splitmix64(i) % step };
        let value = if i == SPREAD_LEN { MAX_INTEGER } else { base + jitter };
        MacAddress::from_u64(value).unwrap()
    })
}

fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;

    #[test]
    fn sample_fixtures_agree() {
        assert_eq!(SAMPLE.as_integer(), SAMPLE_INTEGER);
        assert_eq!(MacAddress::from_text("48:2C:6A:1E:59:3D"), Ok(REVERSED));
    }

    #[test]
    fn spread_is_ascending_and_spans_range() {
        let all: Vec<_> = sample_addresses().collect();
        assert_eq!(all.len() as u64, SPREAD_LEN + 1);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all[0].as_integer(), splitmix64(0) % (MAX_INTEGER / SPREAD_LEN));
        assert_eq!(all.last(), Some(&MacAddress::BROADCAST));
    }
}
