//! Rendering configuration for MAC addresses
//!
//! A [`FormatConfig`] describes how the 12 canonical hex digits are grouped,
//! separated and cased. The named renderers on [`MacAddress`](super::MacAddress)
//! are presets of this configuration.

use crate::internal::constants::HEX_DIGITS;

/// Number of hex digits per group
///
/// Only divisors of 12 are representable, so a rendering never ends in a
/// partial group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GroupSize {
    /// Every digit on its own
    One = 1,
    /// One octet per group (`12:34:56:78:9A:BC`)
    #[default]
    Two = 2,
    /// Three digits per group (`123-456-789-ABC`)
    Three = 3,
    /// Two octets per group (`1234.5678.9ABC`)
    Four = 4,
    /// OUI and NIC halves (`123456-789ABC`)
    Six = 6,
    /// No grouping at all (`123456789ABC`)
    Whole = 12,
}

impl GroupSize {
    /// Digits per group
    #[must_use]
    pub const fn digits(self) -> usize {
        self as usize
    }

    /// Number of groups in a full rendering
    #[must_use]
    pub const fn groups(self) -> usize {
        HEX_DIGITS / self.digits()
    }
}

/// Character placed between groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Separator {
    /// No separator
    None,
    /// `:`
    #[default]
    Colon,
    /// `-` (IEEE 802 canonical form)
    Dash,
    /// `.` (Cisco style, usually with [`GroupSize::Four`])
    Dot,
    /// ` `
    Space,
    /// `_`
    Underscore,
}

impl Separator {
    /// ASCII byte of the separator, or `None` when groups are joined directly
    #[must_use]
    pub const fn as_byte(self) -> Option<u8> {
        match self {
            Separator::None => None,
            Separator::Colon => Some(b':'),
            Separator::Dash => Some(b'-'),
            Separator::Dot => Some(b'.'),
            Separator::Space => Some(b' '),
            Separator::Underscore => Some(b'_'),
        }
    }
}

/// Letter case of the hex digits `A-F`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LetterCase {
    /// `A-F`
    #[default]
    Upper,
    /// `a-f`
    Lower,
}

/// Complete rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FormatConfig {
    /// Digits per group
    pub group_size: GroupSize,
    /// Character between groups
    pub separator: Separator,
    /// Case of `A-F`
    pub case: LetterCase,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatConfig {
    /// `12:34:56:78:9A:BC`
    pub const COLON: Self = Self::new();

    /// `12-34-56-78-9A-BC`
    pub const DASH: Self = Self::new().with_separator(Separator::Dash);

    /// `1234.5678.9ABC`
    pub const DOT: Self = Self::new()
        .with_group_size(GroupSize::Four)
        .with_separator(Separator::Dot);

    /// `123456789ABC`
    pub const UPPERCASE: Self = Self::new()
        .with_group_size(GroupSize::Whole)
        .with_separator(Separator::None);

    /// `123456789abc`
    pub const LOWERCASE: Self = Self::UPPERCASE.with_case(LetterCase::Lower);

    /// Create a new configuration with defaults (colon-separated octets, uppercase)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            group_size: GroupSize::Two,
            separator: Separator::Colon,
            case: LetterCase::Upper,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the number of digits per group
    #[must_use]
    pub const fn with_group_size(mut self, group_size: GroupSize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Set the separator between groups
    #[must_use]
    pub const fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Set the letter case
    #[must_use]
    pub const fn with_case(mut self, case: LetterCase) -> Self {
        self.case = case;
        self
    }

    /// Length in bytes of a rendering produced with this configuration
    #[must_use]
    pub const fn rendered_len(&self) -> usize {
        match self.separator.as_byte() {
            Some(_) => HEX_DIGITS + self.group_size.groups() - 1,
            None => HEX_DIGITS,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
