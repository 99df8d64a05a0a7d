//! Shared foundational types used across the Corvid compiler toolchain.
//!
//! This crate provides [`Bits`], the extensible bit vector that flow analysis uses to
//! track definite assignment, together with its set-member iterator.

#![warn(missing_docs)]

pub mod bits;

pub use bits::{Bits, Ones};
