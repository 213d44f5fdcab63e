//! Error types for MAC address construction and access
//!
//! Errors are organized by domain for better diagnostics:
//! - [`FormatError`]: input that does not reduce to a 48-bit address
//! - [`RangeError`]: numeric input or octet index outside its domain
//!
//! The unified [`Error`] enum wraps both domains and adds
//! [`Error::TypeMismatch`] for the best-effort factory.

// =============================================================================
// Format Errors
// =============================================================================

/// Textual or binary input that does not describe exactly six octets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Text did not contain exactly 12 hexadecimal digits
    WrongDigitCount,
    /// Byte buffer was not exactly 6 bytes long
    WrongByteLength,
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FormatError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FormatError::WrongDigitCount => "must be exactly 12 hex digits",
            FormatError::WrongByteLength => "must be exactly 6 bytes",
        }
    }
}

// =============================================================================
// Range Errors
// =============================================================================

/// Numeric argument outside its permitted interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeError {
    /// Integer was negative
    Negative,
    /// Integer was larger than 2^48 - 1
    TooLarge,
    /// Octet index was outside 0..=5
    OctetIndex,
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RangeError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RangeError::Negative => "cannot be negative",
            RangeError::TooLarge => "cannot be larger than 2^48 - 1",
            RangeError::OctetIndex => "octet index must be 0-5",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```
/// use mac48::{Error, FormatError, MacAddress, RangeError};
///
/// match MacAddress::from_candidate(-1) {
///     Err(Error::Range(RangeError::Negative)) => { /* ... */ }
///     Err(Error::Format(FormatError::WrongDigitCount)) => { /* ... */ }
///     Err(Error::TypeMismatch(_kind)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Input did not reduce to six octets
    Format(FormatError),
    /// Numeric input or index out of range
    Range(RangeError),
    /// The factory has no conversion rule for this kind of input.
    ///
    /// Carries the name of the rejected input kind.
    TypeMismatch(&'static str),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Format(e) => write!(f, "format: {}", e.as_str()),
            Error::Range(e) => write!(f, "range: {}", e.as_str()),
            Error::TypeMismatch(kind) => {
                write!(f, "type mismatch: cannot convert {kind} to a MAC address")
            }
        }
    }
}

impl core::error::Error for FormatError {}
impl core::error::Error for RangeError {}
impl core::error::Error for Error {}

// From impls for automatic conversion
impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Error::Format(e)
    }
}

impl From<RangeError> for Error {
    fn from(e: RangeError) -> Self {
        Error::Range(e)
    }
}

/// Result type alias for MAC address operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for parsing operations
pub type FormatResult<T> = core::result::Result<T, FormatError>;

/// Result type alias for range-checked operations
pub type RangeResult<T> = core::result::Result<T, RangeError>;

// =============================================================================
// Unit Tests
// =============================================================================
