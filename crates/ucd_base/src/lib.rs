//! Traits shared between the ucd crates and implemented by `ucd_macros`, usable in `#![no_std]`
#![no_std]

mod macro_traits;
pub use macro_traits::*;
