//! Manifest parsing for apps

mod parser;
mod schema;

pub use parser::*;
pub use schema::*;
