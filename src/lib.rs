//! IEEE 802 MAC Addresses
//!
//! A `no_std`, `no_alloc` value type for 48-bit MAC (hardware) addresses.
//!
//! [`MacAddress`] normalizes text, integers and raw bytes into one canonical
//! six-octet form and renders it back out in the common notations. It also
//! answers the protocol questions that live in the address bits (unicast or
//! multicast, universal or local, OUI and NIC split) and converts between
//! canonical and bit-reversed octet order.
//!
//! # Architecture
//!
//! - **Value type** ([`mac`]): construction, validation and conversions
//! - **Rendering** ([`mac::format`], [`mac::config`]): grouped hex output
//! - **Bit access** ([`mac::bits`]): octets, I/G and U/L bits, OUI/NIC
//! - **Best-effort factory** ([`mac::candidate`]): runtime-typed input
//! - **Capability trait** ([`Eui48Address`]): uniform queries over foreign types
//!
//! ## Standard Compliance
//!
//! - **IEEE 802**: EUI-48 layout, I/G and U/L bit positions
//! - **RFC 1112**: `01:00:5E` IPv4 multicast mapping prefix
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and debug logging
//! - `smoltcp`: Enable conversions to and from `smoltcp::wire::EthernetAddress`
//!
//! # Example
//!
//! ```
//! use mac48::MacAddress;
//!
//! let mac = MacAddress::from_text("12-34-56-78-9a-bc")?;
//!
//! assert_eq!(mac.as_colon(), "12:34:56:78:9A:BC");
//! assert_eq!(mac.as_dot(), "1234.5678.9ABC");
//! assert_eq!(mac.as_integer(), 20_015_998_343_868);
//! assert_eq!(mac.oui(), 0x12_34_56);
//! // 0x12 has the U/L bit set: locally administered
//! assert!(mac.is_unicast() && mac.is_local());
//! # Ok::<(), mac48::FormatError>(())
//! ```
//!
//! Loosely typed input goes through the factory:
//!
//! ```
//! use mac48::{Candidate, MacAddress};
//!
//! let from_int = MacAddress::from_candidate(256_i64)?;
//! assert_eq!(from_int.to_string(), "00:00:00:00:01:00");
//! assert_eq!(MacAddress::from_text_or_none(Candidate::Null), None);
//! # Ok::<(), mac48::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here as well as in Cargo.toml for older toolchains.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod mac;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "smoltcp")]
#[cfg_attr(docsrs, doc(cfg(feature = "smoltcp")))]
pub mod integration;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{Error, FormatError, FormatResult, RangeError, RangeResult, Result};
pub use mac::MacAddress;
pub use mac::bits::reverse_octet_bits;
pub use mac::candidate::Candidate;
pub use mac::config::{FormatConfig, GroupSize, LetterCase, Separator};
pub use mac::eui48::Eui48Address;
pub use mac::format::{HexOctet, MacString};

/// Shared address constants.
///
/// Grouped into a dedicated module to keep the top-level facade focused on
/// the address type itself.
pub mod constants {
    pub use crate::internal::constants::{
        // Widths
        HEX_DIGITS,
        // Well-known prefixes
        IPV4_MULTICAST_OUI,
        MAC_ADDR_BITS,
        MAC_ADDR_LEN,
        // Limits
        MAX_INTEGER,
        MAX_RENDERED_LEN,
    };
}
