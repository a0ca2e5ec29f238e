//! Serializable icon layout profile.
//!
//! An [`IconProfile`] captures everything the renderer derives the drawing
//! plan from: the canvas size and the fixed palette. The defaults reproduce
//! the shipped app icon exactly; a JSON profile can override any subset.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "size": 1024,
//!   "apple": { "r": 220, "g": 53, "b": 69 },
//!   "shineAlpha": 100
//! }
//! ```

use palette::Srgb;
use serde::{Deserialize, Serialize};

// ============================================================================
// ColorRgb
// ============================================================================

/// Serializable RGB color, convertible to and from [`palette::Srgb<u8>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<ColorRgb> for Srgb<u8> {
    fn from(color: ColorRgb) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl From<Srgb<u8>> for ColorRgb {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

// ============================================================================
// IconProfile
// ============================================================================

/// Layout and palette parameters for the app icon.
///
/// Missing JSON fields fall back to the defaults, so a profile file only
/// needs to state what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconProfile {
    /// Canvas edge length in pixels.
    pub size: u32,

    /// Gradient endpoint at the top row.
    pub background_top: ColorRgb,

    /// Gradient endpoint approached at the bottom row.
    pub background_bottom: ColorRgb,

    /// Background plate circle and apple indent.
    pub plate: ColorRgb,

    /// Apple body lobes.
    pub apple: ColorRgb,

    /// Stem rectangle.
    pub stem: ColorRgb,

    /// Leaf quadrilateral.
    pub leaf: ColorRgb,

    /// Shine highlight color.
    pub shine: ColorRgb,

    /// Shine highlight opacity (0 = invisible, 255 = solid).
    pub shine_alpha: u8,
}

impl Default for IconProfile {
    fn default() -> Self {
        Self {
            size: 1024,
            background_top: ColorRgb::new(76, 175, 80),
            background_bottom: ColorRgb::new(144, 238, 144),
            plate: ColorRgb::new(255, 255, 255),
            apple: ColorRgb::new(220, 53, 69),
            stem: ColorRgb::new(101, 67, 33),
            leaf: ColorRgb::new(76, 175, 80),
            shine: ColorRgb::new(255, 255, 255),
            shine_alpha: 100,
        }
    }
}

impl IconProfile {
    /// Creates the default profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_icon() {
        let profile = IconProfile::default();
        assert_eq!(profile.size, 1024);
        assert_eq!(profile.apple, ColorRgb::new(220, 53, 69));
        assert_eq!(profile.stem, ColorRgb::new(101, 67, 33));
        assert_eq!(profile.shine_alpha, 100);
    }

    #[test]
    fn json_roundtrip() {
        let profile = IconProfile::new().with_size(512);
        let json = profile.to_json().unwrap();
        let restored = IconProfile::from_json(&json).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = IconProfile::default().to_json_pretty().unwrap();
        assert!(json.contains("\"backgroundTop\""));
        assert!(json.contains("\"shineAlpha\""));
    }

    #[test]
    fn empty_profile_deserializes_to_defaults() {
        let profile = IconProfile::from_json("{}").unwrap();
        assert_eq!(profile, IconProfile::default());
    }

    #[test]
    fn partial_profile_keeps_other_defaults() {
        let profile = IconProfile::from_json(r#"{"size": 64}"#).unwrap();
        assert_eq!(profile.size, 64);
        assert_eq!(profile.apple, IconProfile::default().apple);
    }

    #[test]
    fn color_converts_to_palette_and_back() {
        let color = ColorRgb::new(220, 53, 69);
        let srgb: Srgb<u8> = color.into();
        assert_eq!(srgb.red, 220);
        assert_eq!(ColorRgb::from(srgb), color);
    }
}
