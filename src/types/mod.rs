//! Shared value types used across the crate

pub mod value;

pub use value::{Dict, MetaValue};
