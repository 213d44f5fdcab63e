//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`constants`]: widths, limits and well-known prefixes
//! - [`hex`]: ASCII hex nibble codec
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. The public subset of the
//! constants is re-exported through [`crate::constants`].

pub(crate) mod constants;
pub(crate) mod hex;
