#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod casing;
pub mod repetition;
pub mod emoji;
pub mod phrases;

/// Common type definitions
pub type Ratio = f64;
