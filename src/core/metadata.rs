//! Aggregate metadata model
//!
//! This module provides the main [`Metadata`] struct. It is built from an
//! already-decoded properties dictionary (namespace key → tag dictionary,
//! the shape an image-properties reader produces), owns one [`TagBlock`]
//! per namespace present in the input, and derives normalized top-level
//! fields by consulting the blocks through fixed priority chains.
//!
//! The original dictionary is retained verbatim as the immutable baseline
//! for [`Metadata::diff`]. Orientation is the one derived field with a
//! setter; everything else is read-only and recomputed on every query.

use std::collections::BTreeMap;

use crate::core::block::TagBlock;
use crate::core::diff;
use crate::core::error::{MetaError, MetaResult};
use crate::core::namespace::{keys, Namespace};
use crate::types::value::{Dict, MetaValue};

/// Top-level keys of the source dictionary consulted by derived fields
pub mod props {
    /// Encoded file size in bytes
    pub const FILE_SIZE: &str = "FileSize";
    /// Pixel width of the image
    pub const PIXEL_WIDTH: &str = "PixelWidth";
    /// Pixel height of the image
    pub const PIXEL_HEIGHT: &str = "PixelHeight";
    /// Horizontal resolution in dots per inch
    pub const DPI_WIDTH: &str = "DPIWidth";
    /// Vertical resolution in dots per inch
    pub const DPI_HEIGHT: &str = "DPIHeight";
    /// Bits per sample
    pub const DEPTH: &str = "Depth";
    /// EXIF orientation (1..=8)
    pub const ORIENTATION: &str = "Orientation";
    /// Whether samples are floating point
    pub const IS_FLOAT: &str = "IsFloat";
    /// Whether the image uses an indexed palette
    pub const IS_INDEXED: &str = "IsIndexed";
    /// Whether the image carries an alpha channel
    pub const HAS_ALPHA: &str = "HasAlpha";
    /// Color model name ("RGB", "CMYK", "Gray", "Lab")
    pub const COLOR_MODEL: &str = "ColorModel";
    /// Embedded ICC profile name
    pub const PROFILE_NAME: &str = "ProfileName";
    /// Platform flag set when non-destructive adjustments mirror the image
    pub const ADJUSTMENTS_REVERSED: &str = "AdjustmentsReversed";
}

/// One consultable source for a derived field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A key at the top level of the original dictionary
    Root(&'static str),
    /// A tag inside a namespace block, read from its current state
    Tag(Namespace, &'static str),
}

/// Priority chain for the pixel width field
pub const PIXEL_WIDTH_SOURCES: &[Source] = &[
    Source::Root(props::PIXEL_WIDTH),
    Source::Tag(Namespace::Tiff, "ImageWidth"),
    Source::Tag(Namespace::Exif, "PixelXDimension"),
    Source::Tag(Namespace::Png, "ImageWidth"),
    Source::Tag(Namespace::Jfif, "ImageWidth"),
];

/// Priority chain for the pixel height field
pub const PIXEL_HEIGHT_SOURCES: &[Source] = &[
    Source::Root(props::PIXEL_HEIGHT),
    Source::Tag(Namespace::Tiff, "ImageLength"),
    Source::Tag(Namespace::Exif, "PixelYDimension"),
    Source::Tag(Namespace::Png, "ImageHeight"),
    Source::Tag(Namespace::Jfif, "ImageHeight"),
];

/// Priority chain for the horizontal DPI field
pub const DPI_WIDTH_SOURCES: &[Source] = &[
    Source::Root(props::DPI_WIDTH),
    Source::Tag(Namespace::Tiff, "XResolution"),
    Source::Tag(Namespace::Jfif, "XDensity"),
];

/// Priority chain for the vertical DPI field
pub const DPI_HEIGHT_SOURCES: &[Source] = &[
    Source::Root(props::DPI_HEIGHT),
    Source::Tag(Namespace::Tiff, "YResolution"),
    Source::Tag(Namespace::Jfif, "YDensity"),
];

/// Priority chain for the bit depth field
pub const DEPTH_SOURCES: &[Source] = &[
    Source::Root(props::DEPTH),
    Source::Tag(Namespace::Tiff, "BitsPerSample"),
];

/// Priority chain for the orientation field.
///
/// An explicit TIFF orientation wins over the top-level one; absence at
/// both yields the default of 1 (no rotation).
pub const ORIENTATION_SOURCES: &[Source] = &[
    Source::Tag(Namespace::Tiff, props::ORIENTATION),
    Source::Root(props::ORIENTATION),
];

/// The EXIF orientation after a horizontal mirror.
///
/// This is the isolated special case for the platform adjustments flag:
/// when `AdjustmentsReversed` is set in the source dictionary, the resolved
/// orientation is passed through this table.
pub fn mirrored_orientation(orientation: u32) -> u32 {
    match orientation {
        1 => 2,
        2 => 1,
        3 => 4,
        4 => 3,
        5 => 6,
        6 => 5,
        7 => 8,
        8 => 7,
        other => other,
    }
}

/// Aggregate model over all metadata blocks of one image
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// The source dictionary, retained verbatim as the diff baseline
    original: Dict,
    /// One block per namespace present in the input
    blocks: BTreeMap<Namespace, TagBlock>,
    /// Catch-all for the Apple maker-note namespace, kept verbatim
    apple: Dict,
    /// Catch-all for all other unrecognized namespaces, kept verbatim
    picture_style: Dict,
    /// Set once the caller overrides orientation; suppresses the
    /// adjustments-reversed mirror from then on
    orientation_overridden: bool,
}

impl Metadata {
    /// Build an aggregate model from a properties dictionary.
    ///
    /// Every recognized namespace key present in the input yields a block;
    /// absent namespaces yield no block. `{MakerApple}` entries land in the
    /// Apple catch-all and any other unrecognized dictionary-valued entry
    /// lands in the picture-style catch-all, both verbatim. Top-level
    /// scalars stay in the original dictionary and feed the derived fields.
    pub fn from_properties(properties: Dict) -> Self {
        let mut blocks = BTreeMap::new();
        let mut apple = Dict::new();
        let mut picture_style = Dict::new();

        for (key, value) in &properties {
            match Namespace::from_key(key) {
                Some(ns) => {
                    blocks.insert(ns, TagBlock::from_value(ns, Some(value)));
                }
                None if value.as_dict().is_some() => {
                    if key == keys::MAKER_APPLE {
                        apple.insert(key.clone(), value.clone());
                    } else {
                        picture_style.insert(key.clone(), value.clone());
                    }
                }
                None => {}
            }
        }

        Self {
            original: properties,
            blocks,
            apple,
            picture_style,
            orientation_overridden: false,
        }
    }

    /// Build an aggregate model from a metadata value.
    ///
    /// Fails with [`MetaError::MalformedInput`] when the value is not a
    /// dictionary; a malformed source never yields a partial model.
    pub fn from_value(value: &MetaValue) -> MetaResult<Self> {
        match value.as_dict() {
            Some(dict) => Ok(Self::from_properties(dict.clone())),
            None => Err(MetaError::MalformedInput(format!(
                "expected a properties dictionary, got {}",
                value
            ))),
        }
    }

    /// The verbatim dictionary this model was built from
    pub fn original(&self) -> &Dict {
        &self.original
    }

    /// The block for a namespace, if the namespace was present in the input
    /// or has since been created by a setter
    pub fn block(&self, namespace: Namespace) -> Option<&TagBlock> {
        self.blocks.get(&namespace)
    }

    /// Mutable access to a namespace block, if present
    pub fn block_mut(&mut self, namespace: Namespace) -> Option<&mut TagBlock> {
        self.blocks.get_mut(&namespace)
    }

    /// The block for a namespace, created empty if absent
    pub fn block_or_insert(&mut self, namespace: Namespace) -> &mut TagBlock {
        self.blocks
            .entry(namespace)
            .or_insert_with(|| TagBlock::new(namespace))
    }

    /// Whether a namespace block exists
    pub fn has_block(&self, namespace: Namespace) -> bool {
        self.blocks.contains_key(&namespace)
    }

    /// All owned blocks in canonical namespace order
    pub fn blocks(&self) -> impl Iterator<Item = &TagBlock> {
        self.blocks.values()
    }

    /// The Apple maker-note catch-all, verbatim from the input
    pub fn apple(&self) -> &Dict {
        &self.apple
    }

    /// The picture-style catch-all holding all other unrecognized
    /// namespaces, verbatim from the input
    pub fn picture_style(&self) -> &Dict {
        &self.picture_style
    }

    /// Resolve a priority chain to the first present value.
    ///
    /// Root sources read the original dictionary; tag sources read the
    /// block's current state, so caller mutations are visible.
    pub fn resolve(&self, sources: &[Source]) -> Option<&MetaValue> {
        sources.iter().find_map(|source| match source {
            Source::Root(key) => self.original.get(*key),
            Source::Tag(ns, key) => self.block(*ns).and_then(|block| block.get(key)),
        })
    }

    /// Encoded file size in bytes, if the reader supplied one
    pub fn file_size(&self) -> Option<i64> {
        self.original.get(props::FILE_SIZE).and_then(MetaValue::as_int)
    }

    /// Pixel width, from the first of: top level, TIFF, EXIF, PNG, JFIF
    pub fn pixel_width(&self) -> Option<i64> {
        self.resolve(PIXEL_WIDTH_SOURCES).and_then(MetaValue::as_int)
    }

    /// Pixel height, from the first of: top level, TIFF, EXIF, PNG, JFIF
    pub fn pixel_height(&self) -> Option<i64> {
        self.resolve(PIXEL_HEIGHT_SOURCES).and_then(MetaValue::as_int)
    }

    /// Horizontal DPI, from the first of: top level, TIFF, JFIF
    pub fn dpi_width(&self) -> Option<f64> {
        self.resolve(DPI_WIDTH_SOURCES).and_then(MetaValue::as_f64)
    }

    /// Vertical DPI, from the first of: top level, TIFF, JFIF
    pub fn dpi_height(&self) -> Option<f64> {
        self.resolve(DPI_HEIGHT_SOURCES).and_then(MetaValue::as_f64)
    }

    /// Bits per sample, from the first of: top level, TIFF
    pub fn depth(&self) -> Option<i64> {
        self.resolve(DEPTH_SOURCES).and_then(MetaValue::as_int)
    }

    /// Whether samples are floating point; `None` means unknown, not false
    pub fn is_float(&self) -> Option<bool> {
        self.original.get(props::IS_FLOAT).and_then(MetaValue::as_bool)
    }

    /// Whether the image uses an indexed palette; `None` means unknown
    pub fn is_indexed(&self) -> Option<bool> {
        self.original.get(props::IS_INDEXED).and_then(MetaValue::as_bool)
    }

    /// Whether the image carries an alpha channel; `None` means unknown
    pub fn has_alpha(&self) -> Option<bool> {
        self.original.get(props::HAS_ALPHA).and_then(MetaValue::as_bool)
    }

    /// Color model name, if the reader supplied one
    pub fn color_model(&self) -> Option<&str> {
        self.original.get(props::COLOR_MODEL).and_then(MetaValue::as_str)
    }

    /// Embedded ICC profile name, if the reader supplied one
    pub fn profile_name(&self) -> Option<&str> {
        self.original.get(props::PROFILE_NAME).and_then(MetaValue::as_str)
    }

    /// Whether the source dictionary carries the platform flag marking
    /// mirrored non-destructive adjustments
    pub fn adjustments_reversed(&self) -> bool {
        self.original
            .get(props::ADJUSTMENTS_REVERSED)
            .and_then(MetaValue::as_bool)
            .unwrap_or(false)
    }

    /// EXIF orientation, defaulting to 1 (no rotation).
    ///
    /// Resolved through [`ORIENTATION_SOURCES`]; out-of-range source values
    /// are skipped. When the adjustments-reversed flag is set the resolved
    /// value is mirrored, unless the caller has overridden orientation via
    /// [`Metadata::set_orientation`] — an explicit override is
    /// authoritative and set-then-get round-trips exactly.
    pub fn orientation(&self) -> u32 {
        let resolved = ORIENTATION_SOURCES
            .iter()
            .find_map(|source| {
                let value = match source {
                    Source::Root(key) => self.original.get(*key),
                    Source::Tag(ns, key) => self.block(*ns).and_then(|block| block.get(key)),
                };
                value
                    .and_then(MetaValue::as_int)
                    .filter(|v| (1..=8).contains(v))
            })
            .map(|v| v as u32)
            .unwrap_or(1);

        if self.adjustments_reversed() && !self.orientation_overridden {
            mirrored_orientation(resolved)
        } else {
            resolved
        }
    }

    /// Set the orientation, the one user-mutable derived field.
    ///
    /// Writes through to the TIFF block, creating one solely to hold the
    /// tag if the input had no TIFF namespace. Values outside 1..=8 fail
    /// with [`MetaError::BadValue`].
    pub fn set_orientation(&mut self, orientation: u32) -> MetaResult<()> {
        if !(1..=8).contains(&orientation) {
            return Err(MetaError::BadValue(format!(
                "orientation {} outside 1..=8",
                orientation
            )));
        }
        self.block_or_insert(Namespace::Tiff)
            .set(props::ORIENTATION, i64::from(orientation))?;
        self.orientation_overridden = true;
        Ok(())
    }

    /// The minimal delta between current block state and the original
    /// dictionary. See [`crate::core::diff`] for the contract.
    pub fn diff(&self) -> Dict {
        diff::diff(self)
    }
}
