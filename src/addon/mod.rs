//! Addon reference data: which products and locations exist

mod tables;

pub use tables::*;
