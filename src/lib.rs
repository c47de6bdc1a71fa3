#![no_std]

#[cfg(test)]
extern crate std;

pub mod logspace;

pub use logspace::{Class, LogValue, Sign};
