//! Per-namespace tag schemas
//!
//! One table per namespace lists the tags with known typed-accessor
//! semantics. A single generic [`TagBlock`](crate::core::block::TagBlock)
//! parameterized by these tables replaces a hand-written model type per
//! namespace; every block obeys the identical contract, so the aggregate
//! treats them uniformly. Tags absent from a schema are still stored and
//! round-tripped; the schema only governs kind validation on set.

use crate::core::namespace::Namespace;
use crate::types::value::MetaValue;

/// The expected value kind for a known tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Integer tag
    Integer,
    /// Floating point tag (integers accepted, the reader may flatten either way)
    Float,
    /// Text tag
    Text,
    /// Raw byte sequence tag
    Bytes,
    /// Array tag
    Array,
    /// Nested dictionary tag
    Dict,
}

impl TagKind {
    /// Whether a value matches this kind
    pub fn matches(&self, value: &MetaValue) -> bool {
        match (self, value) {
            (TagKind::Integer, MetaValue::Integer(_)) => true,
            (TagKind::Float, MetaValue::Float(_)) | (TagKind::Float, MetaValue::Integer(_)) => true,
            (TagKind::Text, MetaValue::Text(_)) => true,
            (TagKind::Bytes, MetaValue::Bytes(_)) => true,
            (TagKind::Array, MetaValue::Array(_)) => true,
            (TagKind::Dict, MetaValue::Dict(_)) => true,
            _ => false,
        }
    }
}

/// A known tag: its dictionary key and expected kind
#[derive(Debug, Clone, Copy)]
pub struct TagDef {
    /// Tag key within the namespace sub-dictionary
    pub key: &'static str,
    /// Expected value kind
    pub kind: TagKind,
}

const fn tag(key: &'static str, kind: TagKind) -> TagDef {
    TagDef { key, kind }
}

/// TIFF namespace tags
pub const TIFF_TAGS: &[TagDef] = &[
    tag("ImageWidth", TagKind::Integer),
    tag("ImageLength", TagKind::Integer),
    tag("BitsPerSample", TagKind::Integer),
    tag("Compression", TagKind::Integer),
    tag("PhotometricInterpretation", TagKind::Integer),
    tag("DocumentName", TagKind::Text),
    tag("ImageDescription", TagKind::Text),
    tag("Make", TagKind::Text),
    tag("Model", TagKind::Text),
    tag("Orientation", TagKind::Integer),
    tag("XResolution", TagKind::Float),
    tag("YResolution", TagKind::Float),
    tag("ResolutionUnit", TagKind::Integer),
    tag("Software", TagKind::Text),
    tag("DateTime", TagKind::Text),
    tag("Artist", TagKind::Text),
    tag("HostComputer", TagKind::Text),
    tag("Copyright", TagKind::Text),
    tag("WhitePoint", TagKind::Array),
    tag("PrimaryChromaticities", TagKind::Array),
    tag("TransferFunction", TagKind::Array),
];

/// EXIF namespace tags
pub const EXIF_TAGS: &[TagDef] = &[
    tag("ExposureTime", TagKind::Float),
    tag("FNumber", TagKind::Float),
    tag("ExposureProgram", TagKind::Integer),
    tag("SpectralSensitivity", TagKind::Text),
    tag("ISOSpeedRatings", TagKind::Array),
    tag("ExifVersion", TagKind::Array),
    tag("DateTimeOriginal", TagKind::Text),
    tag("DateTimeDigitized", TagKind::Text),
    tag("ComponentsConfiguration", TagKind::Array),
    tag("CompressedBitsPerPixel", TagKind::Float),
    tag("ShutterSpeedValue", TagKind::Float),
    tag("ApertureValue", TagKind::Float),
    tag("BrightnessValue", TagKind::Float),
    tag("ExposureBiasValue", TagKind::Float),
    tag("MaxApertureValue", TagKind::Float),
    tag("SubjectDistance", TagKind::Float),
    tag("MeteringMode", TagKind::Integer),
    tag("LightSource", TagKind::Integer),
    tag("Flash", TagKind::Integer),
    tag("FocalLength", TagKind::Float),
    tag("SubjectArea", TagKind::Array),
    tag("MakerNote", TagKind::Bytes),
    tag("UserComment", TagKind::Text),
    tag("SubsecTime", TagKind::Text),
    tag("SubsecTimeOriginal", TagKind::Text),
    tag("SubsecTimeDigitized", TagKind::Text),
    tag("FlashPixVersion", TagKind::Array),
    tag("ColorSpace", TagKind::Integer),
    tag("PixelXDimension", TagKind::Integer),
    tag("PixelYDimension", TagKind::Integer),
    tag("RelatedSoundFile", TagKind::Text),
    tag("FlashEnergy", TagKind::Float),
    tag("FocalPlaneXResolution", TagKind::Float),
    tag("FocalPlaneYResolution", TagKind::Float),
    tag("FocalPlaneResolutionUnit", TagKind::Integer),
    tag("SubjectLocation", TagKind::Array),
    tag("ExposureIndex", TagKind::Float),
    tag("SensingMethod", TagKind::Integer),
    tag("FileSource", TagKind::Integer),
    tag("SceneType", TagKind::Integer),
    tag("CFAPattern", TagKind::Bytes),
    tag("CustomRendered", TagKind::Integer),
    tag("ExposureMode", TagKind::Integer),
    tag("WhiteBalance", TagKind::Integer),
    tag("DigitalZoomRatio", TagKind::Float),
    tag("FocalLenIn35mmFilm", TagKind::Integer),
    tag("SceneCaptureType", TagKind::Integer),
    tag("GainControl", TagKind::Integer),
    tag("Contrast", TagKind::Integer),
    tag("Saturation", TagKind::Integer),
    tag("Sharpness", TagKind::Integer),
    tag("DeviceSettingDescription", TagKind::Bytes),
    tag("SubjectDistRange", TagKind::Integer),
    tag("ImageUniqueID", TagKind::Text),
    tag("LensSpecification", TagKind::Array),
    tag("LensMake", TagKind::Text),
    tag("LensModel", TagKind::Text),
    tag("LensSerialNumber", TagKind::Text),
];

/// Auxiliary EXIF namespace tags
pub const EXIF_AUX_TAGS: &[TagDef] = &[
    tag("LensInfo", TagKind::Array),
    tag("LensModel", TagKind::Text),
    tag("SerialNumber", TagKind::Text),
    tag("LensID", TagKind::Integer),
    tag("LensSerialNumber", TagKind::Text),
    tag("ImageNumber", TagKind::Integer),
    tag("FlashCompensation", TagKind::Float),
    tag("OwnerName", TagKind::Text),
    tag("Firmware", TagKind::Text),
];

/// GIF namespace tags
pub const GIF_TAGS: &[TagDef] = &[
    tag("LoopCount", TagKind::Integer),
    tag("DelayTime", TagKind::Float),
    tag("ImageColorMap", TagKind::Array),
    tag("HasGlobalColorMap", TagKind::Integer),
    tag("UnclampedDelayTime", TagKind::Float),
];

/// JFIF namespace tags
pub const JFIF_TAGS: &[TagDef] = &[
    tag("JFIFVersion", TagKind::Array),
    tag("XDensity", TagKind::Float),
    tag("YDensity", TagKind::Float),
    tag("DensityUnit", TagKind::Integer),
    tag("IsProgressive", TagKind::Integer),
    tag("ImageWidth", TagKind::Integer),
    tag("ImageHeight", TagKind::Integer),
];

/// PNG namespace tags
pub const PNG_TAGS: &[TagDef] = &[
    tag("Gamma", TagKind::Float),
    tag("InterlaceType", TagKind::Integer),
    tag("XPixelsPerMeter", TagKind::Integer),
    tag("YPixelsPerMeter", TagKind::Integer),
    tag("sRGBIntent", TagKind::Integer),
    tag("Chromaticities", TagKind::Array),
    tag("Author", TagKind::Text),
    tag("Copyright", TagKind::Text),
    tag("CreationTime", TagKind::Text),
    tag("Description", TagKind::Text),
    tag("ModificationTime", TagKind::Text),
    tag("Software", TagKind::Text),
    tag("Title", TagKind::Text),
    tag("ImageWidth", TagKind::Integer),
    tag("ImageHeight", TagKind::Integer),
];

/// IPTC namespace tags
pub const IPTC_TAGS: &[TagDef] = &[
    tag("ObjectTypeReference", TagKind::Text),
    tag("ObjectAttributeReference", TagKind::Text),
    tag("ObjectName", TagKind::Text),
    tag("EditStatus", TagKind::Text),
    tag("EditorialUpdate", TagKind::Text),
    tag("Urgency", TagKind::Integer),
    tag("SubjectReference", TagKind::Array),
    tag("Category", TagKind::Text),
    tag("SupplementalCategory", TagKind::Array),
    tag("FixtureIdentifier", TagKind::Text),
    tag("Keywords", TagKind::Array),
    tag("ContentLocationCode", TagKind::Text),
    tag("ContentLocationName", TagKind::Text),
    tag("ReleaseDate", TagKind::Text),
    tag("ReleaseTime", TagKind::Text),
    tag("ExpirationDate", TagKind::Text),
    tag("ExpirationTime", TagKind::Text),
    tag("SpecialInstructions", TagKind::Text),
    tag("ActionAdvised", TagKind::Text),
    tag("DateCreated", TagKind::Text),
    tag("TimeCreated", TagKind::Text),
    tag("DigitalCreationDate", TagKind::Text),
    tag("DigitalCreationTime", TagKind::Text),
    tag("OriginatingProgram", TagKind::Text),
    tag("ProgramVersion", TagKind::Text),
    tag("Byline", TagKind::Array),
    tag("BylineTitle", TagKind::Array),
    tag("City", TagKind::Text),
    tag("SubLocation", TagKind::Text),
    tag("ProvinceState", TagKind::Text),
    tag("CountryPrimaryLocationCode", TagKind::Text),
    tag("CountryPrimaryLocationName", TagKind::Text),
    tag("OriginalTransmissionReference", TagKind::Text),
    tag("Headline", TagKind::Text),
    tag("Credit", TagKind::Text),
    tag("Source", TagKind::Text),
    tag("CopyrightNotice", TagKind::Text),
    tag("Contact", TagKind::Array),
    tag("CaptionAbstract", TagKind::Text),
    tag("WriterEditor", TagKind::Array),
    tag("ImageType", TagKind::Text),
    tag("ImageOrientation", TagKind::Text),
    tag("LanguageIdentifier", TagKind::Text),
    tag("StarRating", TagKind::Integer),
];

/// GPS namespace tags
pub const GPS_TAGS: &[TagDef] = &[
    tag("Version", TagKind::Array),
    tag("LatitudeRef", TagKind::Text),
    tag("Latitude", TagKind::Float),
    tag("LongitudeRef", TagKind::Text),
    tag("Longitude", TagKind::Float),
    tag("AltitudeRef", TagKind::Integer),
    tag("Altitude", TagKind::Float),
    tag("TimeStamp", TagKind::Text),
    tag("Satellites", TagKind::Text),
    tag("Status", TagKind::Text),
    tag("MeasureMode", TagKind::Text),
    tag("DOP", TagKind::Float),
    tag("SpeedRef", TagKind::Text),
    tag("Speed", TagKind::Float),
    tag("TrackRef", TagKind::Text),
    tag("Track", TagKind::Float),
    tag("ImgDirectionRef", TagKind::Text),
    tag("ImgDirection", TagKind::Float),
    tag("MapDatum", TagKind::Text),
    tag("DestLatitudeRef", TagKind::Text),
    tag("DestLatitude", TagKind::Float),
    tag("DestLongitudeRef", TagKind::Text),
    tag("DestLongitude", TagKind::Float),
    tag("DestBearingRef", TagKind::Text),
    tag("DestBearing", TagKind::Float),
    tag("DestDistanceRef", TagKind::Text),
    tag("DestDistance", TagKind::Float),
    tag("ProcessingMethod", TagKind::Text),
    tag("AreaInformation", TagKind::Text),
    tag("DateStamp", TagKind::Text),
    tag("Differential", TagKind::Integer),
    tag("HPositioningError", TagKind::Float),
];

/// Raw container namespace tags
pub const RAW_TAGS: &[TagDef] = &[
    tag("WhiteBalanceRB", TagKind::Array),
    tag("WhiteBalance", TagKind::Integer),
    tag("CFAPattern", TagKind::Array),
];

/// CIFF namespace tags
pub const CIFF_TAGS: &[TagDef] = &[
    tag("Description", TagKind::Text),
    tag("Firmware", TagKind::Text),
    tag("OwnerName", TagKind::Text),
    tag("ImageName", TagKind::Text),
    tag("ImageFileName", TagKind::Text),
    tag("ReleaseMethod", TagKind::Integer),
    tag("ReleaseTiming", TagKind::Integer),
    tag("RecordID", TagKind::Integer),
    tag("SelfTimingTime", TagKind::Integer),
    tag("CameraSerialNumber", TagKind::Integer),
    tag("ImageSerialNumber", TagKind::Integer),
    tag("ContinuousDrive", TagKind::Integer),
    tag("FocusMode", TagKind::Integer),
    tag("MeteringMode", TagKind::Integer),
    tag("ShootingMode", TagKind::Integer),
    tag("LensModel", TagKind::Text),
    tag("LensMaxMM", TagKind::Integer),
    tag("LensMinMM", TagKind::Integer),
    tag("WhiteBalanceIndex", TagKind::Integer),
    tag("FlashExposureComp", TagKind::Float),
    tag("MeasuredEV", TagKind::Float),
];

/// Canon maker-note namespace tags
pub const MAKER_CANON_TAGS: &[TagDef] = &[
    tag("OwnerName", TagKind::Text),
    tag("CameraSerialNumber", TagKind::Integer),
    tag("ImageSerialNumber", TagKind::Integer),
    tag("FlashExposureComp", TagKind::Float),
    tag("ContinuousDrive", TagKind::Integer),
    tag("LensModel", TagKind::Text),
    tag("Firmware", TagKind::Text),
    tag("AspectRatioInfo", TagKind::Integer),
];

/// Nikon maker-note namespace tags
pub const MAKER_NIKON_TAGS: &[TagDef] = &[
    tag("ISOSetting", TagKind::Array),
    tag("ColorMode", TagKind::Text),
    tag("Quality", TagKind::Text),
    tag("WhiteBalanceMode", TagKind::Text),
    tag("SharpenMode", TagKind::Text),
    tag("FocusMode", TagKind::Text),
    tag("FlashSetting", TagKind::Text),
    tag("ISOSelection", TagKind::Text),
    tag("FlashExposureComp", TagKind::Float),
    tag("ImageAdjustment", TagKind::Text),
    tag("LensAdapter", TagKind::Text),
    tag("LensType", TagKind::Integer),
    tag("LensInfo", TagKind::Array),
    tag("FocusDistance", TagKind::Float),
    tag("DigitalZoom", TagKind::Float),
    tag("ShootingMode", TagKind::Integer),
    tag("CameraSerialNumber", TagKind::Text),
    tag("ShutterCount", TagKind::Integer),
];

/// Minolta maker-note namespace tags
pub const MAKER_MINOLTA_TAGS: &[TagDef] = &[
    tag("CCDSensitivity", TagKind::Integer),
    tag("ColorMode", TagKind::Integer),
    tag("ImageQuality", TagKind::Integer),
    tag("SceneMode", TagKind::Integer),
];

/// Fuji maker-note namespace tags
pub const MAKER_FUJI_TAGS: &[TagDef] = &[
    tag("Version", TagKind::Array),
    tag("Quality", TagKind::Text),
    tag("Sharpness", TagKind::Integer),
    tag("WhiteBalance", TagKind::Integer),
    tag("Color", TagKind::Integer),
    tag("Tone", TagKind::Integer),
    tag("FlashMode", TagKind::Integer),
    tag("FlashStrength", TagKind::Float),
    tag("Macro", TagKind::Integer),
    tag("FocusMode", TagKind::Integer),
    tag("SlowSync", TagKind::Integer),
    tag("PictureMode", TagKind::Integer),
];

/// Olympus maker-note namespace tags
pub const MAKER_OLYMPUS_TAGS: &[TagDef] = &[
    tag("SpecialMode", TagKind::Array),
    tag("JpegQuality", TagKind::Integer),
    tag("Macro", TagKind::Integer),
    tag("DigitalZoom", TagKind::Float),
    tag("SoftwareRelease", TagKind::Text),
    tag("PictureInfo", TagKind::Text),
    tag("CameraID", TagKind::Text),
];

/// Pentax maker-note namespace tags
pub const MAKER_PENTAX_TAGS: &[TagDef] = &[
    tag("CaptureMode", TagKind::Integer),
    tag("QualityLevel", TagKind::Integer),
    tag("FocusMode", TagKind::Integer),
    tag("FlashMode", TagKind::Integer),
    tag("WhiteBalance", TagKind::Integer),
    tag("DigitalZoom", TagKind::Float),
    tag("Sharpness", TagKind::Integer),
    tag("Contrast", TagKind::Integer),
    tag("Saturation", TagKind::Integer),
    tag("ISOSpeed", TagKind::Integer),
    tag("Color", TagKind::Integer),
];

/// Adobe 8BIM namespace tags
pub const EIGHT_BIM_TAGS: &[TagDef] = &[
    tag("LayerNames", TagKind::Array),
    tag("Version", TagKind::Integer),
];

/// DNG namespace tags
pub const DNG_TAGS: &[TagDef] = &[
    tag("Version", TagKind::Array),
    tag("BackwardVersion", TagKind::Array),
    tag("UniqueCameraModel", TagKind::Text),
    tag("LocalizedCameraModel", TagKind::Text),
    tag("CameraSerialNumber", TagKind::Text),
    tag("LensInfo", TagKind::Array),
];

/// The schema table for a namespace
pub fn schema_for(namespace: Namespace) -> &'static [TagDef] {
    match namespace {
        Namespace::Tiff => TIFF_TAGS,
        Namespace::Exif => EXIF_TAGS,
        Namespace::ExifAux => EXIF_AUX_TAGS,
        Namespace::Gif => GIF_TAGS,
        Namespace::Jfif => JFIF_TAGS,
        Namespace::Png => PNG_TAGS,
        Namespace::Iptc => IPTC_TAGS,
        Namespace::Gps => GPS_TAGS,
        Namespace::Raw => RAW_TAGS,
        Namespace::Ciff => CIFF_TAGS,
        Namespace::MakerCanon => MAKER_CANON_TAGS,
        Namespace::MakerNikon => MAKER_NIKON_TAGS,
        Namespace::MakerMinolta => MAKER_MINOLTA_TAGS,
        Namespace::MakerFuji => MAKER_FUJI_TAGS,
        Namespace::MakerOlympus => MAKER_OLYMPUS_TAGS,
        Namespace::MakerPentax => MAKER_PENTAX_TAGS,
        Namespace::EightBim => EIGHT_BIM_TAGS,
        Namespace::Dng => DNG_TAGS,
    }
}

/// Look up the kind of a known tag within a namespace
pub fn kind_of(namespace: Namespace, key: &str) -> Option<TagKind> {
    schema_for(namespace)
        .iter()
        .find(|def| def.key == key)
        .map(|def| def.kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_namespace_has_a_schema() {
        for ns in Namespace::ALL {
            assert!(!schema_for(ns).is_empty(), "empty schema for {}", ns);
        }
    }

    #[test]
    fn test_kind_of_known_and_unknown() {
        assert_eq!(kind_of(Namespace::Tiff, "Orientation"), Some(TagKind::Integer));
        assert_eq!(kind_of(Namespace::Exif, "PixelXDimension"), Some(TagKind::Integer));
        assert_eq!(kind_of(Namespace::Tiff, "NoSuchTag"), None);
    }

    #[test]
    fn test_float_kind_accepts_integers() {
        assert!(TagKind::Float.matches(&MetaValue::Integer(72)));
        assert!(TagKind::Float.matches(&MetaValue::Float(72.0)));
        assert!(!TagKind::Integer.matches(&MetaValue::Float(72.0)));
    }

    #[test]
    fn test_no_duplicate_keys_in_schemas() {
        for ns in Namespace::ALL {
            let table = schema_for(ns);
            for (i, def) in table.iter().enumerate() {
                assert!(
                    !table[..i].iter().any(|d| d.key == def.key),
                    "duplicate key {} in {}",
                    def.key,
                    ns
                );
            }
        }
    }
}
