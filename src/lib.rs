//! FluxRate Library
//!
//! Currency conversion backed by an offline-first cache of exchange-rate
//! API responses. The binary in `main.rs` wires these modules to the
//! command line; integration tests use them directly.

pub mod api;
pub mod backup;
pub mod cli;
pub mod convert;
pub mod data;
pub mod store;
pub mod ticker;
