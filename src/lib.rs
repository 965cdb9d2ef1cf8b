//! picmeta — image metadata aggregation and diffing
//!
//! A unified in-memory model over heterogeneous image metadata. Given an
//! already-decoded properties dictionary (the namespace-keyed shape an
//! image-properties reader produces), the crate:
//!
//! - builds one [`TagBlock`] per recognized namespace (TIFF, EXIF, GPS,
//!   IPTC, container and camera-maker blocks),
//! - derives normalized top-level fields (pixel dimensions, DPI, depth,
//!   orientation, color model, alpha/float/indexed flags, profile name)
//!   through fixed priority chains across the blocks,
//! - computes the minimal per-namespace delta between the current model
//!   and its originating dictionary for merge-back before re-encoding.
//!
//! Producing the dictionary from a file or asset, and encoding pixels, are
//! collaborator concerns; this crate is pure in-memory computation.
//!
//! # Example
//!
//! ```
//! use picmeta::{Dict, Metadata, MetaValue};
//!
//! let mut tiff = Dict::new();
//! tiff.insert("Orientation".to_string(), MetaValue::Integer(1));
//! tiff.insert("ImageWidth".to_string(), MetaValue::Integer(800));
//!
//! let mut properties = Dict::new();
//! properties.insert("{TIFF}".to_string(), MetaValue::Dict(tiff));
//!
//! let mut meta = Metadata::from_properties(properties);
//! assert_eq!(meta.pixel_width(), Some(800));
//! assert_eq!(meta.orientation(), 1);
//!
//! meta.set_orientation(6).unwrap();
//! let delta = meta.diff();
//! assert!(delta.contains_key("{TIFF}"));
//! ```

pub mod core;
pub mod types;

pub use crate::core::{
    mirrored_orientation, MetaError, MetaResult, Metadata, Namespace, Source, TagBlock, TagDef,
    TagKind,
};
pub use crate::types::{Dict, MetaValue};
