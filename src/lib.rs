//! # young-tableau
//!
//! A bounded min-priority matrix (Young tableau) plus the sampling and
//! validation helpers used to exercise it.
//!
//! ## Modules
//!
//! - [`collections`] — [`YoungTableau`](collections::YoungTableau), a fixed
//!   `R × C` grid with sorted rows and columns: O(R + C) insert,
//!   extract-min and search
//! - [`sampling`] — random-variate generators for named distributions
//! - [`random`] — seeded RNG construction and shuffling
//! - [`validation`] — moments, histograms and PMFs for checking samplers
//!
//! ## Design Philosophy
//!
//! - **Typed failures**: every fallible operation returns a `Result`; a failed
//!   call leaves its receiver untouched
//! - **Explicit randomness**: samplers take the RNG as an argument, never a
//!   global
//! - **Property-based testing**: grid invariants verified via proptest

pub mod collections;
pub mod random;
pub mod sampling;
pub mod validation;
