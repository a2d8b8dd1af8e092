//! CLI command handlers

mod locations;
mod validate;

pub use locations::*;
pub use validate::*;
