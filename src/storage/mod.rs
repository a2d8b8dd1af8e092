//! Filesystem access: addon paths and app assets

mod assets;
pub mod paths;

pub use assets::*;
