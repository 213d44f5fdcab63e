//! External Stack Integrations
//!
//! This module provides integrations with external libraries:
//!
//! - **smoltcp** (`smoltcp`): conversions to and from
//!   `smoltcp::wire::EthernetAddress`, plus an [`Eui48Address`](crate::Eui48Address)
//!   impl so smoltcp addresses answer the same queries as [`MacAddress`](crate::MacAddress)
//!   - Requires `smoltcp` feature
//!
//! # Feature Flags
//!
//! - `smoltcp`: Enables smoltcp integration (`smoltcp` submodule)

#[cfg(feature = "smoltcp")]
pub mod smoltcp;
