//! Validator settings and their defaults

mod defaults;
mod overrides;

pub use defaults::*;
pub use overrides::*;
