//! Visual design parameters for the pumpkin artwork.
//!
//! Every literal the painter needs (colors, shape dimensions, offsets) lives
//! here as a field of [`PumpkinStyle`] rather than inline in the drawing code.
//! All dimensions are expressed in *design units* on a reference canvas of
//! [`PumpkinStyle::reference_size`] pixels; the renderer scales them to the
//! requested output size.
//!
//! Styles serialize to camelCase JSON so a design can be stored or shipped
//! between processes:
//!
//! ```
//! use pumpkin_icons::PumpkinStyle;
//!
//! let style = PumpkinStyle::default();
//! let json = style.to_json().unwrap();
//! let restored = PumpkinStyle::from_json(&json).unwrap();
//! assert_eq!(style, restored);
//! ```

use image::Rgba;
use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

// ============================================================================
// Color
// ============================================================================

/// An RGBA color with 8-bit channels.
///
/// Serializes as a `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b, 255)
    }

    /// Returns the same color with a different alpha channel.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    /// Returns a darker version of this color, preserving alpha.
    ///
    /// `amount` is the fraction of lightness to remove (0.0 keeps the color,
    /// 1.0 yields black). Lightness is adjusted in HSL space so the hue of
    /// the orange shades survives the operation.
    pub fn darken(self, amount: f32) -> Self {
        let rgb = Srgb::new(
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        );
        let mut hsl: Hsl = rgb.into_color();
        hsl.lightness = (hsl.lightness * (1.0 - amount.clamp(0.0, 1.0))).clamp(0.0, 1.0);
        let darkened: Srgb = hsl.into_color();

        Self(
            (darkened.red * 255.0).round() as u8,
            (darkened.green * 255.0).round() as u8,
            (darkened.blue * 255.0).round() as u8,
            self.3,
        )
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.0, color.1, color.2, color.3])
    }
}

// ============================================================================
// Named design colors
// ============================================================================

/// Light cream used for the page fill and the halo disc (#FFF3E0).
pub const CREAM: Color = Color::rgb(255, 243, 224);

/// Primary pumpkin orange (#FF8C42). Also the maskable safe-zone accent.
pub const ORANGE_PRIMARY: Color = Color::rgb(255, 140, 66);

/// Mid pumpkin orange (#FF6B35).
pub const ORANGE_MID: Color = Color::rgb(255, 107, 53);

/// Deep pumpkin orange (#E55722).
pub const ORANGE_DEEP: Color = Color::rgb(229, 87, 34);

/// Stem green (#4CAF50).
pub const STEM_GREEN: Color = Color::rgb(76, 175, 80);

/// Leaf green (#2E7D32).
pub const LEAF_GREEN: Color = Color::rgb(46, 125, 50);

/// Highlight amber (#FFB74D).
pub const HIGHLIGHT_AMBER: Color = Color::rgb(255, 183, 77);

// ============================================================================
// Per-layer settings
// ============================================================================

/// Settings for the background layer (page fill plus halo disc).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundSettings {
    /// Solid page color used when the icon is not rendered foreground-only.
    pub page: Color,

    /// Color of the circular halo behind the pumpkin.
    pub halo: Color,

    /// Halo radius in design units.
    pub halo_radius: f32,
}

/// Settings for the pumpkin body.
///
/// The body is drawn as `segments` overlapping vertical ellipses. Each
/// segment is painted in `shades.len()` concentric passes, shrinking by
/// `inset_step` design units per pass, which fakes a gradient without any
/// real gradient support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySettings {
    /// Total body width in design units.
    pub width: f32,

    /// Total body height in design units.
    pub height: f32,

    /// Design units trimmed from the bottom of each segment ellipse.
    pub bottom_trim: f32,

    /// Number of vertical segment ellipses.
    pub segments: u32,

    /// Shades painted per segment, outermost first.
    pub shades: Vec<Color>,

    /// Alpha applied to every shade pass.
    pub shade_alpha: u8,

    /// Inset per shade pass, in design units.
    pub inset_step: f32,
}

/// Settings for the stem and its leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StemSettings {
    /// Stem width in design units.
    pub width: f32,

    /// Stem height in design units.
    pub height: f32,

    /// Stem fill color.
    pub color: Color,

    /// Leaf ellipse size in design units. Zero disables the leaf.
    pub leaf_size: f32,

    /// Leaf fill color.
    pub leaf_color: Color,
}

/// Settings for the decorative ridge lines on the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RidgeSettings {
    /// Number of vertical ridge lines, placed symmetrically about the
    /// horizontal center of the body.
    pub count: u32,

    /// Line width in design units.
    pub width: f32,

    /// Ridge color, typically a darker orange.
    pub color: Color,
}

/// A single accent dot at a fixed offset from the canvas center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccentDot {
    /// Offset from the canvas center in design units (x, y).
    pub offset: (f32, f32),

    /// Dot radius in design units.
    pub radius: f32,

    /// Dot color, including its alpha.
    pub color: Color,
}

/// Settings for the highlight ramp and the accent dots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccentSettings {
    /// Diameter of the highlight ellipse in design units. Zero disables it.
    pub highlight_size: f32,

    /// Highlight offset from the canvas center in design units (x, y),
    /// addressing the highlight's top-left corner.
    pub highlight_offset: (f32, f32),

    /// Base highlight color; alpha falls off toward the center.
    pub highlight_color: Color,

    /// Decorative dots with decreasing opacity.
    pub dots: Vec<AccentDot>,
}

// ============================================================================
// PumpkinStyle
// ============================================================================

/// The complete visual design of a pumpkin icon.
///
/// Two presets exist: [`PumpkinStyle::default`] is the detailed design
/// (segmented body, faked radial highlight, accent dots) and
/// [`PumpkinStyle::flat`] is the simpler single-ellipse variant that relies
/// on ridge lines alone for depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PumpkinStyle {
    /// Side length of the reference canvas all design units refer to.
    pub reference_size: u32,

    pub background: BackgroundSettings,
    pub body: BodySettings,
    pub stem: StemSettings,

    /// Ridge lines; `None` omits them.
    pub ridges: Option<RidgeSettings>,

    /// Highlight and dots; `None` omits them.
    pub accents: Option<AccentSettings>,
}

impl Default for PumpkinStyle {
    fn default() -> Self {
        Self {
            reference_size: 512,
            background: BackgroundSettings {
                page: CREAM,
                halo: CREAM,
                halo_radius: 240.0,
            },
            body: BodySettings {
                width: 160.0,
                height: 180.0,
                bottom_trim: 20.0,
                segments: 5,
                shades: vec![ORANGE_PRIMARY, ORANGE_MID, ORANGE_DEEP],
                shade_alpha: 200,
                inset_step: 2.0,
            },
            stem: StemSettings {
                width: 16.0,
                height: 25.0,
                color: STEM_GREEN,
                leaf_size: 15.0,
                leaf_color: LEAF_GREEN,
            },
            ridges: Some(RidgeSettings {
                count: 4,
                width: 2.0,
                color: ORANGE_DEEP.darken(0.25),
            }),
            accents: Some(AccentSettings {
                highlight_size: 80.0,
                highlight_offset: (-60.0, -80.0),
                highlight_color: HIGHLIGHT_AMBER,
                dots: vec![
                    AccentDot {
                        offset: (90.0, -80.0),
                        radius: 8.0,
                        color: ORANGE_PRIMARY.with_alpha(180),
                    },
                    AccentDot {
                        offset: (100.0, -30.0),
                        radius: 6.0,
                        color: ORANGE_MID.with_alpha(150),
                    },
                    AccentDot {
                        offset: (85.0, 20.0),
                        radius: 5.0,
                        color: ORANGE_DEEP.with_alpha(120),
                    },
                ],
            }),
        }
    }
}

impl PumpkinStyle {
    /// The simpler flat design: one opaque body ellipse, ridge lines for
    /// depth, no highlight or dots.
    pub fn flat() -> Self {
        let mut style = Self::default();
        style.body.segments = 1;
        style.body.shades = vec![ORANGE_PRIMARY];
        style.body.shade_alpha = 255;
        style.accents = None;
        style
    }

    /// Serializes this style to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes this style to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a style from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_conversions() {
        let color = Color::rgb(255, 140, 66);
        assert_eq!(color.3, 255);
        assert_eq!(color.with_alpha(42).3, 42);
        assert_eq!(Rgba::from(color).0, [255, 140, 66, 255]);
    }

    #[test]
    fn darken_reduces_lightness_and_keeps_alpha() {
        let base = ORANGE_DEEP.with_alpha(120);
        let darker = base.darken(0.3);

        let luma = |c: Color| c.0 as u32 + c.1 as u32 + c.2 as u32;
        assert!(luma(darker) < luma(base));
        assert_eq!(darker.3, 120);

        // Darkening by zero is the identity.
        assert_eq!(ORANGE_DEEP.darken(0.0), ORANGE_DEEP);
    }

    #[test]
    fn default_style_matches_reference_design() {
        let style = PumpkinStyle::default();
        assert_eq!(style.reference_size, 512);
        assert_eq!(style.body.segments, 5);
        assert_eq!(style.body.shades.len(), 3);
        assert_eq!(style.stem.color, STEM_GREEN);
        assert!(style.accents.is_some());
    }

    #[test]
    fn flat_style_drops_accents() {
        let style = PumpkinStyle::flat();
        assert_eq!(style.body.segments, 1);
        assert_eq!(style.body.shade_alpha, 255);
        assert!(style.accents.is_none());
        assert!(style.ridges.is_some());
    }

    #[test]
    fn style_json_round_trip() {
        for style in [PumpkinStyle::default(), PumpkinStyle::flat()] {
            let json = style.to_json().unwrap();
            let restored = PumpkinStyle::from_json(&json).unwrap();
            assert_eq!(style, restored);
        }
    }

    #[test]
    fn style_json_is_camel_case() {
        let json = PumpkinStyle::default().to_json().unwrap();
        assert!(json.contains("referenceSize"));
        assert!(json.contains("haloRadius"));
        assert!(!json.contains("reference_size"));
    }
}
