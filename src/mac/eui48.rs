//! The EUI-48 capability set as a trait
//!
//! [`MacAddress`] is the one data model; this trait describes what any
//! 48-bit hardware address can answer, so other crates' address types
//! (see the `smoltcp` integration) can be queried and compared uniformly.

use super::MacAddress;
use crate::internal::constants::{IG_BIT, MAC_ADDR_LEN, UL_BIT};

/// Anything that is a 48-bit IEEE 802 address
pub trait Eui48Address {
    /// The six octets, most significant first
    fn address_bytes(&self) -> [u8; MAC_ADDR_LEN];

    /// Octets 0-2 as a big-endian integer
    fn oui(&self) -> u32 {
        self.to_mac_address().oui()
    }

    /// Octets 3-5 as a big-endian integer
    fn nic(&self) -> u32 {
        self.to_mac_address().nic()
    }

    /// I/G bit set
    fn is_multicast(&self) -> bool {
        self.address_bytes()[0] & IG_BIT != 0
    }

    /// I/G bit clear
    fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// U/L bit set
    fn is_local(&self) -> bool {
        self.address_bytes()[0] & UL_BIT != 0
    }

    /// U/L bit clear
    fn is_universal(&self) -> bool {
        !self.is_local()
    }

    /// Convert into the canonical value type
    fn to_mac_address(&self) -> MacAddress {
        MacAddress::new(self.address_bytes())
    }

    /// Same OUI and same NIC part, whatever the concrete types
    fn same_address<O: Eui48Address + ?Sized>(&self, other: &O) -> bool {
        self.oui() == other.oui() && self.nic() == other.nic()
    }
}

impl Eui48Address for MacAddress {
    fn address_bytes(&self) -> [u8; MAC_ADDR_LEN] {
        *self.as_bytes()
    }

    fn oui(&self) -> u32 {
        MacAddress::oui(self)
    }

    fn nic(&self) -> u32 {
        MacAddress::nic(self)
    }

    fn is_multicast(&self) -> bool {
        MacAddress::is_multicast(self)
    }

    fn is_local(&self) -> bool {
        MacAddress::is_local(self)
    }

    fn to_mac_address(&self) -> MacAddress {
        *self
    }
}
