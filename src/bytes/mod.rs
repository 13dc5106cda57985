//! Tools for manipulating byte-level data.
//!
//! Every multi-byte payload is little-endian, independently of the host.
//! Packing is done with shifts and masks rather than by reinterpreting
//! memory, so the output is identical on every platform.

/// Encoding/decoding floating-point numbers.
pub mod float;

/// Encoding/decoding fixed-width signed integers.
pub mod int;
