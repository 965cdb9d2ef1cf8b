//! Generic tag block
//!
//! A [`TagBlock`] models one namespace worth of tags. It is built from the
//! namespace's sub-dictionary in the source properties dictionary and keeps
//! a private working copy, so setters never touch the caller's input. Tags
//! outside the namespace schema pass through untouched; nothing is dropped
//! on a round trip.

use crate::core::error::{MetaError, MetaResult};
use crate::core::namespace::Namespace;
use crate::core::schema::{self, TagDef};
use crate::types::value::{Dict, MetaValue};

/// One namespace worth of metadata tags
#[derive(Debug, Clone, PartialEq)]
pub struct TagBlock {
    namespace: Namespace,
    tags: Dict,
}

impl TagBlock {
    /// Create an empty block for a namespace
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            tags: Dict::new(),
        }
    }

    /// Build a block from a namespace sub-value.
    ///
    /// A missing or non-dictionary sub-value yields an empty block; missing
    /// optional tags are never an error.
    pub fn from_value(namespace: Namespace, value: Option<&MetaValue>) -> Self {
        let tags = value
            .and_then(MetaValue::as_dict)
            .cloned()
            .unwrap_or_default();
        Self { namespace, tags }
    }

    /// The namespace this block models
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Get a tag value
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.tags.get(key)
    }

    /// Get a tag as an integer
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(MetaValue::as_int)
    }

    /// Get a tag as a float (integers coerce)
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(MetaValue::as_f64)
    }

    /// Get a tag as a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MetaValue::as_str)
    }

    /// Get a tag as raw bytes
    pub fn get_bytes(&self, key: &str) -> Option<&[u8]> {
        self.get(key).and_then(MetaValue::as_bytes)
    }

    /// Set a tag value.
    ///
    /// Keys in the namespace schema are validated against their declared
    /// kind; unknown keys accept any value. Mutates only this block's
    /// working copy.
    pub fn set(&mut self, key: &str, value: impl Into<MetaValue>) -> MetaResult<()> {
        let value = value.into();
        if let Some(kind) = schema::kind_of(self.namespace, key) {
            if !kind.matches(&value) {
                return Err(MetaError::BadValue(format!(
                    "{} {} expects {:?}, got {}",
                    self.namespace, key, kind, value
                )));
            }
        }
        self.tags.insert(key.to_string(), value);
        Ok(())
    }

    /// Remove a tag, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<MetaValue> {
        self.tags.remove(key)
    }

    /// Whether a key belongs to this namespace's schema
    pub fn is_known(&self, key: &str) -> bool {
        schema::kind_of(self.namespace, key).is_some()
    }

    /// The schema table for this block's namespace
    pub fn schema(&self) -> &'static [TagDef] {
        schema::schema_for(self.namespace)
    }

    /// Raw pass-through view of all tags, known and unknown
    pub fn tags(&self) -> &Dict {
        &self.tags
    }

    /// Whether the block holds no tags
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of tags in the block
    pub fn len(&self) -> usize {
        self.tags.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiff_block() -> TagBlock {
        let mut d = Dict::new();
        d.insert("Orientation".to_string(), MetaValue::Integer(6));
        d.insert("Make".to_string(), MetaValue::Text("Canon".to_string()));
        d.insert("Tag99999".to_string(), MetaValue::Integer(7));
        TagBlock::from_value(Namespace::Tiff, Some(&MetaValue::Dict(d)))
    }

    #[test]
    fn test_from_missing_value_is_empty() {
        let block = TagBlock::from_value(Namespace::Gps, None);
        assert!(block.is_empty());
        assert_eq!(block.get_int("Altitude"), None);
    }

    #[test]
    fn test_from_malformed_value_is_empty() {
        let block = TagBlock::from_value(Namespace::Gps, Some(&MetaValue::Integer(3)));
        assert!(block.is_empty());
    }

    #[test]
    fn test_typed_getters() {
        let block = tiff_block();
        assert_eq!(block.get_int("Orientation"), Some(6));
        assert_eq!(block.get_str("Make"), Some("Canon"));
        assert_eq!(block.get_str("Orientation"), None);
        assert_eq!(block.get_int("Model"), None);
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let block = tiff_block();
        assert!(!block.is_known("Tag99999"));
        assert_eq!(block.get_int("Tag99999"), Some(7));
        assert_eq!(block.tags().len(), 3);
    }

    #[test]
    fn test_set_validates_known_kind() {
        let mut block = tiff_block();
        assert!(block.set("Orientation", 1i64).is_ok());
        assert!(block.set("Orientation", "sideways").is_err());
        // Unknown keys take anything
        assert!(block.set("Tag99999", "whatever").is_ok());
    }

    #[test]
    fn test_set_does_not_touch_source_dict() {
        let mut d = Dict::new();
        d.insert("Orientation".to_string(), MetaValue::Integer(1));
        let source = MetaValue::Dict(d.clone());

        let mut block = TagBlock::from_value(Namespace::Tiff, Some(&source));
        block.set("Orientation", 8i64).unwrap();

        assert_eq!(source.as_dict().unwrap()["Orientation"], MetaValue::Integer(1));
        assert_eq!(block.get_int("Orientation"), Some(8));
    }

    #[test]
    fn test_bytes_tags_round_trip() {
        let mut block = TagBlock::new(Namespace::Exif);
        let note = vec![0x4E, 0x69, 0x6B, 0x6F, 0x6E, 0x00];
        block.set("MakerNote", note.clone()).unwrap();

        assert_eq!(block.get_bytes("MakerNote"), Some(note.as_slice()));
        assert_eq!(block.get_bytes("UserComment"), None);
        // Kind-validated: MakerNote is a bytes tag
        assert!(block.set("MakerNote", "text").is_err());
    }

    #[test]
    fn test_schema_matches_namespace_table() {
        let block = TagBlock::new(Namespace::Gps);
        let table = block.schema();
        assert!(std::ptr::eq(table, schema::schema_for(Namespace::Gps)));
        assert!(table.iter().any(|def| def.key == "Latitude"));
    }

    #[test]
    fn test_float_tags_accept_integers() {
        let mut block = TagBlock::new(Namespace::Tiff);
        assert!(block.set("XResolution", 72i64).is_ok());
        assert_eq!(block.get_f64("XResolution"), Some(72.0));
    }
}
