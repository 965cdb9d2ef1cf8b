//! Diff engine
//!
//! Computes the minimal delta between an aggregate model's current block
//! state and the original dictionary it was built from. The result has the
//! same namespace-keyed shape as the input, so a caller can overlay it onto
//! a fresh properties dictionary before handing it to an encoder.
//!
//! Contract: a tag appears in the delta iff its current value differs from
//! the value at the same (namespace, key) path in the original, by exact
//! value equality. Added keys are included; unchanged keys never are; a
//! namespace with an empty delta is omitted entirely. Iteration follows the
//! canonical namespace order, so results are deterministic.
//!
//! The baseline is always the dictionary held by the model itself, which
//! makes diffing against a foreign dictionary unrepresentable.

use crate::core::metadata::Metadata;
use crate::core::namespace::Namespace;
use crate::types::value::{Dict, MetaValue};

/// The per-namespace delta between current state and the original dictionary
pub fn diff(metadata: &Metadata) -> Dict {
    let mut result = Dict::new();

    for namespace in Namespace::ALL {
        let Some(block) = metadata.block(namespace) else {
            continue;
        };
        let baseline = metadata
            .original()
            .get(namespace.key())
            .and_then(MetaValue::as_dict);

        let delta: Dict = block
            .tags()
            .iter()
            .filter(|&(key, value)| baseline.and_then(|b| b.get(key.as_str())) != Some(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        if !delta.is_empty() {
            result.insert(namespace.key().to_string(), MetaValue::Dict(delta));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::namespace::keys;

    fn dict(entries: &[(&str, MetaValue)]) -> Dict {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn sample_properties() -> Dict {
        dict(&[
            (
                keys::TIFF,
                MetaValue::Dict(dict(&[
                    ("Orientation", MetaValue::Integer(1)),
                    ("Make", MetaValue::Text("Canon".to_string())),
                ])),
            ),
            (
                keys::GPS,
                MetaValue::Dict(dict(&[("Altitude", MetaValue::Float(12.5))])),
            ),
        ])
    }

    #[test]
    fn test_unmodified_model_diffs_empty() {
        let meta = Metadata::from_properties(sample_properties());
        assert!(diff(&meta).is_empty());
    }

    #[test]
    fn test_single_mutation_yields_single_entry() {
        let mut meta = Metadata::from_properties(sample_properties());
        meta.block_mut(Namespace::Tiff)
            .unwrap()
            .set("Orientation", 8i64)
            .unwrap();

        let d = diff(&meta);
        assert_eq!(d.len(), 1);
        let tiff = d[keys::TIFF].as_dict().unwrap();
        assert_eq!(tiff.len(), 1);
        assert_eq!(tiff["Orientation"], MetaValue::Integer(8));
    }

    #[test]
    fn test_added_key_is_included() {
        let mut meta = Metadata::from_properties(sample_properties());
        meta.block_mut(Namespace::Gps)
            .unwrap()
            .set("Latitude", 48.85)
            .unwrap();

        let d = diff(&meta);
        let gps = d[keys::GPS].as_dict().unwrap();
        assert_eq!(gps.len(), 1);
        assert_eq!(gps["Latitude"], MetaValue::Float(48.85));
        assert!(!d.contains_key(keys::TIFF));
    }

    #[test]
    fn test_set_back_to_original_diffs_empty() {
        let mut meta = Metadata::from_properties(sample_properties());
        meta.block_mut(Namespace::Tiff)
            .unwrap()
            .set("Orientation", 8i64)
            .unwrap();
        meta.block_mut(Namespace::Tiff)
            .unwrap()
            .set("Orientation", 1i64)
            .unwrap();
        assert!(diff(&meta).is_empty());
    }

    #[test]
    fn test_new_block_appears_as_addition() {
        let mut meta = Metadata::from_properties(Dict::new());
        meta.set_orientation(6).unwrap();

        let d = diff(&meta);
        assert_eq!(d.len(), 1);
        let tiff = d[keys::TIFF].as_dict().unwrap();
        assert_eq!(tiff["Orientation"], MetaValue::Integer(6));
    }

    #[test]
    fn test_empty_created_block_is_omitted() {
        let mut meta = Metadata::from_properties(Dict::new());
        meta.block_or_insert(Namespace::Exif);
        assert!(diff(&meta).is_empty());
    }
}
