//! smoltcp Network Stack Integration
#![cfg_attr(docsrs, doc(cfg(feature = "smoltcp")))]
//!
//! Conversions between [`MacAddress`] and
//! [`smoltcp::wire::EthernetAddress`](https://docs.rs/smoltcp), so addresses
//! parsed from configuration can configure an interface directly.
//!
//! # Example
//!
//! ```ignore
//! use smoltcp::iface::Config;
//! use smoltcp::wire::EthernetAddress;
//! use mac48::MacAddress;
//!
//! let mac: MacAddress = "02:00:00:12:34:56".parse()?;
//! let config = Config::new(EthernetAddress::from(mac).into());
//! ```
//!
//! # Features
//!
//! This module is only available when the `smoltcp` feature is enabled in Cargo.toml:
//! ```toml
//! [dependencies]
//! mac48 = { version = "0.1", features = ["smoltcp"] }
//! ```

use smoltcp::wire::EthernetAddress;

use crate::MacAddress;
use crate::internal::constants::MAC_ADDR_LEN;
use crate::mac::eui48::Eui48Address;

impl From<MacAddress> for EthernetAddress {
    fn from(mac: MacAddress) -> Self {
        EthernetAddress(*mac.as_bytes())
    }
}

impl From<EthernetAddress> for MacAddress {
    fn from(addr: EthernetAddress) -> Self {
        MacAddress::new(addr.0)
    }
}

impl Eui48Address for EthernetAddress {
    fn address_bytes(&self) -> [u8; MAC_ADDR_LEN] {
        self.0
    }
}

impl PartialEq<EthernetAddress> for MacAddress {
    fn eq(&self, other: &EthernetAddress) -> bool {
        self.same_address(other)
    }
}

impl PartialEq<MacAddress> for EthernetAddress {
    fn eq(&self, other: &MacAddress) -> bool {
        self.same_address(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{SAMPLE, sample_addresses};

    // =========================================================================
    // Conversion Tests
    // =========================================================================

    #[test]
    fn into_ethernet_address() {
        let addr = EthernetAddress::from(SAMPLE);
        assert_eq!(addr.as_bytes(), SAMPLE.as_bytes());
    }

    #[test]
    fn from_ethernet_address() {
        let addr = EthernetAddress([0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC]);
        assert_eq!(MacAddress::from(addr), SAMPLE);
    }

    #[test]
    fn cross_type_equality() {
        assert!(SAMPLE == EthernetAddress::from(SAMPLE));
        assert!(EthernetAddress::BROADCAST == MacAddress::BROADCAST);
        assert!(SAMPLE != EthernetAddress::BROADCAST);
    }

    // =========================================================================
    // Flag Agreement Tests
    // =========================================================================

    #[test]
    fn flags_agree_with_smoltcp() {
        for mac in sample_addresses() {
            let addr = EthernetAddress::from(mac);
            assert_eq!(addr.is_multicast(), mac.is_multicast());
            assert_eq!(addr.is_unicast(), mac.is_unicast());
            assert_eq!(addr.is_local(), mac.is_local());
            assert_eq!(addr.is_broadcast(), mac.is_broadcast());
        }
    }

    #[test]
    fn trait_queries_on_ethernet_address() {
        let addr = EthernetAddress::from(SAMPLE);
        assert_eq!(Eui48Address::oui(&addr), 0x12_34_56);
        assert_eq!(Eui48Address::nic(&addr), 0x78_9A_BC);
        assert_eq!(addr.to_mac_address(), SAMPLE);
    }
}
