//! Core metadata aggregation
//!
//! This module contains the aggregate model, the generic tag block, the
//! namespace registry and schemas, and the diff engine.

pub mod block;
pub mod diff;
pub mod error;
pub mod metadata;
pub mod namespace;
pub mod schema;

pub use block::TagBlock;
pub use error::{MetaError, MetaResult};
pub use metadata::{mirrored_orientation, Metadata, Source};
pub use namespace::Namespace;
pub use schema::{TagDef, TagKind};
