//! End-to-end scenarios through the public API
//!
//! Each group mirrors one area of the crate: construction, rendering, bit
//! queries and the bit-reversal transform.

use mac48::{Candidate, Error, FormatError, MacAddress, RangeError};

// =============================================================================
// Group 1: Construction
// =============================================================================

#[test]
fn text_with_any_delimiters_is_one_address() {
    let canonical = MacAddress::from_text("123456789ABC").unwrap();
    for text in ["12:34:56:78:9a:bc", "12-34-56-78-9A-BC", "1234.5678.9abc"] {
        assert_eq!(MacAddress::from_text(text), Ok(canonical));
    }
}

#[test]
fn invalid_text_is_rejected_or_absent() {
    assert_eq!(
        MacAddress::from_text("not a valid mac"),
        Err(FormatError::WrongDigitCount)
    );
    assert_eq!(MacAddress::from_text_or_none("not a valid mac"), None);
}

#[test]
fn integer_bounds() {
    assert_eq!(MacAddress::from_integer(-1), Err(RangeError::Negative));
    assert_eq!(MacAddress::from_integer(1 << 48), Err(RangeError::TooLarge));
    assert_eq!(MacAddress::from_integer(0).unwrap().as_integer(), 0);
    assert_eq!(
        MacAddress::from_integer((1 << 48) - 1).unwrap().as_colon(),
        "FF:FF:FF:FF:FF:FF"
    );
}

#[test]
fn factory_error_kinds() {
    assert!(matches!(
        MacAddress::from_candidate("12:34"),
        Err(Error::Format(_))
    ));
    assert!(matches!(MacAddress::from_candidate(-7), Err(Error::Range(_))));
    assert!(matches!(
        MacAddress::from_candidate(Candidate::Bool(true)),
        Err(Error::TypeMismatch(_))
    ));
}

// =============================================================================
// Group 2: Rendering
// =============================================================================

#[test]
fn sample_renderings() {
    let mac = MacAddress::from_text("12:34:56:78:9a:bc").unwrap();
    assert_eq!(mac.as_colon(), "12:34:56:78:9A:BC");
    assert_eq!(mac.as_dash(), "12-34-56-78-9A-BC");
    assert_eq!(mac.as_ieee802(), "12-34-56-78-9A-BC");
    assert_eq!(mac.as_dot(), "1234.5678.9ABC");
    assert_eq!(mac.as_lowercase(), "123456789abc");
    assert_eq!(mac.as_integer(), 20_015_998_343_868);
    assert_eq!(mac.to_string(), "12:34:56:78:9A:BC");
}

#[test]
fn bytes_view() {
    let mac = MacAddress::from_text("41:42:43:44:45:46").unwrap();
    assert_eq!(mac.as_bytes(), b"ABCDEF");
    assert_eq!(MacAddress::from_bytes(b"ABCDEF"), Ok(mac));
}

#[test]
fn small_integer_is_zero_padded() {
    assert_eq!(
        MacAddress::from_integer(256).unwrap().as_colon(),
        "00:00:00:00:01:00"
    );
}

// =============================================================================
// Group 3: Bit Queries
// =============================================================================

#[test]
fn ig_and_ul_bits() {
    let zero = MacAddress::from_text("00:00:00:00:00:00").unwrap();
    let group = MacAddress::from_text("01:00:00:00:00:00").unwrap();
    let local = MacAddress::from_text("02:00:00:00:00:00").unwrap();

    assert!(!zero.ig_bit() && zero.is_unicast());
    assert!(group.ig_bit() && group.is_multicast());
    assert!(!zero.ul_bit() && zero.is_universal() && zero.is_globally_unique());
    assert!(local.ul_bit() && local.is_local() && local.is_locally_unique());
}

#[test]
fn oui_nic_and_vendor() {
    let mac: MacAddress = "12:34:56:78:9A:BC".parse().unwrap();
    assert_eq!((u64::from(mac.oui()) << 24) | u64::from(mac.nic()), mac.as_integer());
    assert_eq!(mac.vendor().as_colon(), "12:34:56:00:00:00");
    assert_eq!(mac.byte(6), Err(RangeError::OctetIndex));
}

// =============================================================================
// Group 4: Bit Reversal
// =============================================================================

#[test]
fn reverse_bit_order_and_back() {
    let mac = MacAddress::from_text("12:34:56:78:9A:BC").unwrap();
    let reversed = mac.reverse_bit_order();
    assert_eq!(reversed.as_colon(), "48:2C:6A:1E:59:3D");
    assert_eq!(reversed.reverse_bit_order(), mac);
    assert_eq!(mac8(0xEA).reverse_bit_order().first_byte(), 0x57);
}

fn mac8(first: u8) -> MacAddress {
    MacAddress::new([first, 0, 0, 0, 0, 0])
}
