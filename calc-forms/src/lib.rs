//! Form-state layer for the calculator suite.
//!
//! This crate sits between the pure calculators in `calc-core` and
//! whatever surface renders them. It owns the per-page form state
//! machines, the input boundary (raw field text to typed values), the
//! output boundary (two-decimal formatting with the `0.00` placeholder
//! for absent results), and the static calculator catalog.

pub mod catalog;
pub mod forms;
pub mod options;
pub mod utils;
