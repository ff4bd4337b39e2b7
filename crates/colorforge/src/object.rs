//! The color representations and their conversion methods.

use crate::core::{
    cmyk_to_rgb, format_hex, hsi_to_rgb, hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb,
    lab_to_rgb, lab_to_xyz, parse_hex, rgb_to_cmyk, rgb_to_hsi, rgb_to_hsl, rgb_to_hsv, rgb_to_lab,
    rgb_to_xyz, xyz_to_lab, xyz_to_rgb,
};
use crate::error::ColorFormatError;
use crate::{Category, Float};

/// A color with red, green, and blue channels.
///
/// The channels nominally range `0..=255`, with an optional alpha ranging
/// `0..=1`. RGB is the hub representation: every other representation
/// converts to and from it directly, and the multi-hop conversions offered
/// elsewhere route through it. Conversions drop the alpha, since none of the
/// other representations carries one.
///
/// Out-of-range channels are not errors. The conversion methods extrapolate
/// the same formulas beyond the nominal range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: Float,
    pub g: Float,
    pub b: Float,
    pub alpha: Option<Float>,
}

impl Rgb {
    /// Create a new RGB color without alpha.
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Create a new RGB color with the given alpha.
    pub const fn with_alpha(r: Float, g: Float, b: Float, alpha: Float) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(alpha),
        }
    }

    /// Parse a hexadecimal color, with or without a leading `#`.
    ///
    /// Both six-digit and shorthand three-digit colors parse; the shorthand
    /// expands each digit by duplication, so `#abc` is `#aabbcc`.
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        let [r, g, b] = parse_hex(s)?;
        Ok(Self::new(r as Float, g as Float, b as Float))
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        let [h, s, l] = rgb_to_hsl(&[self.r, self.g, self.b]);
        Hsl { h, s, l }
    }

    /// Convert this color to HSV.
    pub fn to_hsv(&self) -> Hsv {
        let [h, s, v] = rgb_to_hsv(&[self.r, self.g, self.b]);
        Hsv { h, s, v }
    }

    /// Convert this color to CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        let [c, m, y, k] = rgb_to_cmyk(&[self.r, self.g, self.b]);
        Cmyk { c, m, y, k }
    }

    /// Convert this color to HSI.
    ///
    /// For pure black, the saturation is not-a-number, since the formula
    /// divides by the mean channel intensity.
    pub fn to_hsi(&self) -> Hsi {
        let [h, s, i] = rgb_to_hsi(&[self.r, self.g, self.b]);
        Hsi { h, s, i }
    }

    /// Convert this color to XYZ.
    ///
    /// Unlike the other representations, XYZ coordinates are not rounded.
    /// They serve as the exact intermediate for [`Lab`].
    pub fn to_xyz(&self) -> Xyz {
        let [x, y, z] = rgb_to_xyz(&[self.r, self.g, self.b]);
        Xyz { x, y, z }
    }

    /// Convert this color to Lab, going through XYZ.
    pub fn to_lab(&self) -> Lab {
        let [l, a, b] = rgb_to_lab(&[self.r, self.g, self.b]);
        Lab { l, a, b }
    }

    /// Format this color as a lowercase hexadecimal string with a leading
    /// `#`, such as `#daa520`.
    pub fn to_hex(&self) -> String {
        format_hex(&[self.r, self.g, self.b], true)
    }

    /// Format this color as a lowercase hexadecimal string without the
    /// leading `#`, such as `daa520`.
    pub fn to_hex_unprefixed(&self) -> String {
        format_hex(&[self.r, self.g, self.b], false)
    }

    /// Determine this color's perceptual category.
    pub fn category(&self) -> Category {
        Category::of_rgb(self)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse a hexadecimal color. This is an alias for [`Rgb::from_hex`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Rgb {
    /// Display this color as a hexadecimal string with a leading `#`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color with hue, saturation, and lightness coordinates.
///
/// The hue is in degrees and ranges `0..360`; saturation and lightness are
/// percentages.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

impl Hsl {
    /// Create a new HSL color.
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l }
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = hsl_to_rgb(self.h, self.s, self.l);
        Rgb::new(r, g, b)
    }

    /// Convert this color to HSV, directly and without going through RGB.
    pub fn to_hsv(&self) -> Hsv {
        let [h, s, v] = hsl_to_hsv(self.h, self.s, self.l);
        Hsv { h, s, v }
    }

    /// Determine this color's perceptual category.
    pub fn category(&self) -> Category {
        Category::of_hsl(self.h, self.s, self.l)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color with hue, saturation, and value coordinates.
///
/// The hue is in degrees and ranges `0..360`; saturation and value are
/// percentages.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    pub h: Float,
    pub s: Float,
    pub v: Float,
}

impl Hsv {
    /// Create a new HSV color.
    pub const fn new(h: Float, s: Float, v: Float) -> Self {
        Self { h, s, v }
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = hsv_to_rgb(self.h, self.s, self.v);
        Rgb::new(r, g, b)
    }

    /// Convert this color to HSL, directly and without going through RGB.
    pub fn to_hsl(&self) -> Hsl {
        let [h, s, l] = hsv_to_hsl(self.h, self.s, self.v);
        Hsl { h, s, l }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color with cyan, magenta, yellow, and key components, each an integral
/// percentage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cmyk {
    pub c: Float,
    pub m: Float,
    pub y: Float,
    pub k: Float,
}

impl Cmyk {
    /// Create a new CMYK color.
    pub const fn new(c: Float, m: Float, y: Float, k: Float) -> Self {
        Self { c, m, y, k }
    }

    /// Convert this color to RGB.
    ///
    /// Since CMYK components are integral percentages, they quantize more
    /// coarsely than 8-bit channels. Converting a color to CMYK and back may
    /// shift each channel by up to two.
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = cmyk_to_rgb(self.c, self.m, self.y, self.k);
        Rgb::new(r, g, b)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color with hue, saturation, and intensity coordinates.
///
/// The hue is in degrees and ranges `0..360`; saturation and intensity are
/// percentages.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsi {
    pub h: Float,
    pub s: Float,
    pub i: Float,
}

impl Hsi {
    /// Create a new HSI color.
    pub const fn new(h: Float, s: Float, i: Float) -> Self {
        Self { h, s, i }
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = hsi_to_rgb(self.h, self.s, self.i);
        Rgb::new(r, g, b)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color with CIE XYZ tristimulus coordinates.
///
/// XYZ is the exact intermediate between RGB and [`Lab`]: its coordinates
/// are never rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Xyz {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Xyz {
    /// Create a new XYZ color.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = xyz_to_rgb(&[self.x, self.y, self.z]);
        Rgb::new(r, g, b)
    }

    /// Convert this color to Lab. The resulting coordinates are not rounded.
    pub fn to_lab(&self) -> Lab {
        let [l, a, b] = xyz_to_lab(&[self.x, self.y, self.z]);
        Lab { l, a, b }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color with CIE Lab coordinates: lightness `0..=100` and the two
/// opponent axes `a` and `b`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
}

impl Lab {
    /// Create a new Lab color.
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self { l, a, b }
    }

    /// Convert this color to XYZ. The resulting coordinates are not rounded.
    pub fn to_xyz(&self) -> Xyz {
        let [x, y, z] = lab_to_xyz(self.l, self.a, self.b);
        Xyz { x, y, z }
    }

    /// Convert this color to RGB, going through XYZ.
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = lab_to_rgb(self.l, self.a, self.b);
        Rgb::new(r, g, b)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Cmyk, Hsl, Hsv, Lab, Rgb};
    use crate::error::ColorFormatError;
    use crate::Category;

    #[test]
    fn test_goldenrod() -> Result<(), ColorFormatError> {
        let goldenrod = Rgb::from_hex("#daa520")?;
        assert_eq!(goldenrod, Rgb::new(218.0, 165.0, 32.0));

        assert_eq!(goldenrod.to_hsl(), Hsl::new(42.9, 74.4, 49.02));
        assert_eq!(goldenrod.to_hsv(), Hsv::new(42.9, 85.32, 85.49));
        assert_eq!(goldenrod.to_cmyk(), Cmyk::new(0.0, 24.0, 85.0, 15.0));
        assert_eq!(goldenrod.to_lab(), Lab::new(70.82, 8.53, 68.76));
        assert_eq!(goldenrod.category(), Category::Orange);

        assert_eq!(goldenrod.to_hex(), "#daa520");
        assert_eq!(goldenrod.to_hex_unprefixed(), "daa520");
        assert_eq!(goldenrod.to_string(), "#daa520");

        // CMYK loses up to two per channel to its integral percentages.
        assert_eq!(goldenrod.to_cmyk().to_rgb(), Rgb::new(217.0, 165.0, 33.0));

        // The other representations convert back without loss.
        assert_eq!(goldenrod.to_hsl().to_rgb(), goldenrod);
        assert_eq!(goldenrod.to_hsv().to_rgb(), goldenrod);
        assert_eq!(goldenrod.to_hsi().to_rgb(), goldenrod);
        assert_eq!(goldenrod.to_lab().to_rgb(), goldenrod);
        assert_eq!(goldenrod.to_xyz().to_rgb(), goldenrod);
        assert_eq!(goldenrod.to_xyz().to_lab().to_xyz().to_rgb(), goldenrod);
        Ok(())
    }

    #[test]
    fn test_teal() {
        let teal = Rgb::new(0.0, 128.0, 128.0);

        assert_eq!(teal.to_hsl(), Hsl::new(180.0, 100.0, 25.1));
        assert_eq!(teal.to_hsv(), Hsv::new(180.0, 100.0, 50.2));
        assert_eq!(teal.to_cmyk(), Cmyk::new(100.0, 0.0, 0.0, 50.0));
        assert_eq!(teal.to_lab(), Lab::new(48.25, -28.85, -8.48));
        assert_eq!(teal.to_hex(), "#008080");
        assert_eq!(teal.category(), Category::Cyan);

        assert_eq!(teal.to_hsl().to_hsv(), teal.to_hsv());
        assert_eq!(teal.to_hsv().to_hsl(), teal.to_hsl());
    }

    #[test]
    fn test_alpha() {
        let color = Rgb::with_alpha(255.0, 0.0, 0.0, 0.5);
        assert_eq!(color.alpha, Some(0.5));

        // Conversions drop the alpha.
        assert_eq!(color.to_hsl().to_rgb().alpha, None);
        assert_eq!(color.to_hex(), "#ff0000");
        assert_eq!(Rgb::new(255.0, 0.0, 0.0).alpha, None);
    }

    #[test]
    fn test_parse_and_display() -> Result<(), ColorFormatError> {
        for hex in ["#000000", "#ffffff", "#daa520", "#708090", "#0a0b0c"] {
            let color: Rgb = hex.parse()?;
            assert_eq!(color.to_string(), hex);
        }

        assert_eq!("#fff".parse::<Rgb>()?, Rgb::new(255.0, 255.0, 255.0));
        assert!("#ffff".parse::<Rgb>().is_err());
        Ok(())
    }

    #[test]
    fn test_hex_round_trip() -> Result<(), ColorFormatError> {
        for value in (0_u32..=255).step_by(15) {
            let hex = format!("#{:02x}{:02x}{:02x}", value, 255 - value, value / 2);
            assert_eq!(hex.parse::<Rgb>()?.to_hex(), hex);
        }
        Ok(())
    }
}
