//! # colorlore-tests
//!
//! Verification framework for colorlore.
//!
//! This crate provides:
//! - Reference HSL and CIELAB conversions built on the `palette` crate
//! - Drift statistics between colorlore and the reference
//! - Seeded sample patterns for property tests
//! - A test-side reader for swatch exchange files
//!
//! ## Test Categories
//!
//! 1. **Conversion Parity**: HSL and Lab against `palette`
//! 2. **Round Trips**: hex to HSL and back over the full RGB cube
//! 3. **Harmony**: hue offsets and lightness clamps of derived palettes
//! 4. **Catalog**: integrity of the built-in reference data
//! 5. **Matching and Ranking**: determinism, tie-breaks, ordering
//! 6. **Swatch Layout**: byte layout of exported swatch files

pub mod accuracy;
pub mod ase_reader;
pub mod patterns;
pub mod reference;

pub use accuracy::{DriftStats, hue_difference};
pub use ase_reader::{AseBlock, AseFile};
pub use patterns::{SamplePattern, generate_samples};
