//! Namespace identifiers for metadata tag blocks
//!
//! Properties dictionaries group tags under namespace keys such as `{TIFF}`
//! or `{MakerCanon}`. This module enumerates the namespaces the aggregate
//! model recognizes and maps them to and from their dictionary keys.

use std::fmt;

/// Dictionary keys for the known namespaces and fallbacks
pub mod keys {
    /// TIFF container namespace
    pub const TIFF: &str = "{TIFF}";
    /// EXIF namespace
    pub const EXIF: &str = "{Exif}";
    /// Auxiliary EXIF namespace
    pub const EXIF_AUX: &str = "{ExifAux}";
    /// GIF container namespace
    pub const GIF: &str = "{GIF}";
    /// JFIF container namespace
    pub const JFIF: &str = "{JFIF}";
    /// PNG container namespace
    pub const PNG: &str = "{PNG}";
    /// IPTC namespace
    pub const IPTC: &str = "{IPTC}";
    /// GPS namespace
    pub const GPS: &str = "{GPS}";
    /// Raw container namespace
    pub const RAW: &str = "{Raw}";
    /// CIFF (Canon raw container) namespace
    pub const CIFF: &str = "{CIFF}";
    /// Canon maker-note namespace
    pub const MAKER_CANON: &str = "{MakerCanon}";
    /// Nikon maker-note namespace
    pub const MAKER_NIKON: &str = "{MakerNikon}";
    /// Minolta maker-note namespace
    pub const MAKER_MINOLTA: &str = "{MakerMinolta}";
    /// Fuji maker-note namespace
    pub const MAKER_FUJI: &str = "{MakerFuji}";
    /// Olympus maker-note namespace
    pub const MAKER_OLYMPUS: &str = "{MakerOlympus}";
    /// Pentax maker-note namespace
    pub const MAKER_PENTAX: &str = "{MakerPentax}";
    /// Adobe 8BIM (Photoshop resource) namespace
    pub const EIGHT_BIM: &str = "{8BIM}";
    /// DNG namespace
    pub const DNG: &str = "{DNG}";
    /// Apple maker-note namespace, kept verbatim in a fallback catch-all
    pub const MAKER_APPLE: &str = "{MakerApple}";
}

/// A recognized metadata namespace.
///
/// Declaration order is the canonical iteration order: diff results and
/// block traversal always follow `Namespace::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    Tiff,
    Exif,
    ExifAux,
    Gif,
    Jfif,
    Png,
    Iptc,
    Gps,
    Raw,
    Ciff,
    MakerCanon,
    MakerNikon,
    MakerMinolta,
    MakerFuji,
    MakerOlympus,
    MakerPentax,
    EightBim,
    Dng,
}

impl Namespace {
    /// All recognized namespaces in canonical order
    pub const ALL: [Namespace; 18] = [
        Namespace::Tiff,
        Namespace::Exif,
        Namespace::ExifAux,
        Namespace::Gif,
        Namespace::Jfif,
        Namespace::Png,
        Namespace::Iptc,
        Namespace::Gps,
        Namespace::Raw,
        Namespace::Ciff,
        Namespace::MakerCanon,
        Namespace::MakerNikon,
        Namespace::MakerMinolta,
        Namespace::MakerFuji,
        Namespace::MakerOlympus,
        Namespace::MakerPentax,
        Namespace::EightBim,
        Namespace::Dng,
    ];

    /// The dictionary key this namespace is stored under
    pub fn key(&self) -> &'static str {
        match self {
            Namespace::Tiff => keys::TIFF,
            Namespace::Exif => keys::EXIF,
            Namespace::ExifAux => keys::EXIF_AUX,
            Namespace::Gif => keys::GIF,
            Namespace::Jfif => keys::JFIF,
            Namespace::Png => keys::PNG,
            Namespace::Iptc => keys::IPTC,
            Namespace::Gps => keys::GPS,
            Namespace::Raw => keys::RAW,
            Namespace::Ciff => keys::CIFF,
            Namespace::MakerCanon => keys::MAKER_CANON,
            Namespace::MakerNikon => keys::MAKER_NIKON,
            Namespace::MakerMinolta => keys::MAKER_MINOLTA,
            Namespace::MakerFuji => keys::MAKER_FUJI,
            Namespace::MakerOlympus => keys::MAKER_OLYMPUS,
            Namespace::MakerPentax => keys::MAKER_PENTAX,
            Namespace::EightBim => keys::EIGHT_BIM,
            Namespace::Dng => keys::DNG,
        }
    }

    /// Look up the namespace for a dictionary key, if recognized
    pub fn from_key(key: &str) -> Option<Namespace> {
        Namespace::ALL.iter().copied().find(|ns| ns.key() == key)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
