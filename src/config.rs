//! Configuration loader and schema types.
//!
//! Settings supply the defaults that command-line flags may override.

mod load;
mod schema;

pub use schema::*;
