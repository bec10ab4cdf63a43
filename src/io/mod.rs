//! CSV artifact writing.

pub mod export;

pub use export::*;
