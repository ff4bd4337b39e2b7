use super::fixed_round;
use crate::Float;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing
/// a new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0] * vector[0] + row1[1] * vector[1] + row1[2] * vector[2],
        row2[0] * vector[0] + row2[1] * vector[1] + row2[2] * vector[2],
        row3[0] * vector[0] + row3[1] * vector[1] + row3[2] * vector[2],
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the shared hue fraction for RGB to HSL and RGB to HSV.
///
/// The branch is selected by testing `max` for equality against the red,
/// green, and blue coordinates in that fixed order, with the first match
/// winning on exact ties. Reordering the tests, say, by comparing magnitudes,
/// would silently change which branch handles a tie and hence the resulting
/// hue. The returned fraction ranges `0..1`.
#[inline]
fn sector_hue(r: Float, g: Float, b: Float, max: Float, delta: Float) -> Float {
    if delta == 0.0 {
        return 0.0;
    }

    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    h / 6.0
}

/// Convert coordinates for RGB to HSL. This is a one-hop, direct conversion.
/// The resulting hue, saturation, and lightness are rounded to 2 decimal
/// digits.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = [value[0] / 255.0, value[1] / 255.0, value[2] / 255.0];

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else if l > 0.5 {
        delta / (2.0 - 2.0 * l)
    } else {
        delta / (2.0 * l)
    };
    let h = sector_hue(r, g, b, max, delta);

    [
        fixed_round(h * 360.0, 2),
        fixed_round(s * 100.0, 2),
        fixed_round(l * 100.0, 2),
    ]
}

/// Convert coordinates for RGB to HSV. This is a one-hop, direct conversion.
/// The resulting hue, saturation, and value are rounded to 2 decimal digits.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = [value[0] / 255.0, value[1] / 255.0, value[2] / 255.0];

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = sector_hue(r, g, b, max, delta);

    [
        fixed_round(h * 360.0, 2),
        fixed_round(s * 100.0, 2),
        fixed_round(v * 100.0, 2),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for HSV to HSL. This is a one-hop, direct conversion
/// that does not detour through RGB.
pub(crate) fn hsv_to_hsl(h: Float, s: Float, v: Float) -> [Float; 3] {
    let t = (200.0 - s) * v / 100.0;
    let s = if v == 0.0 || s == 0.0 {
        0.0
    } else {
        s * v / if t > 100.0 { 200.0 - t } else { t }
    };

    [fixed_round(h, 2), fixed_round(s, 2), fixed_round(t / 2.0, 2)]
}

/// Convert coordinates for HSL to HSV. This is a one-hop, direct conversion
/// that does not detour through RGB.
pub(crate) fn hsl_to_hsv(h: Float, s: Float, l: Float) -> [Float; 3] {
    let (s, v) = if s == 0.0 {
        (s, l)
    } else if l > 50.0 {
        let v = l + s * (100.0 - l) / 100.0;
        let s = if v == 0.0 {
            0.0
        } else {
            200.0 * s * (100.0 - l) / (v * 100.0)
        };
        (s, v)
    } else {
        let v = l * (s + 100.0) / 100.0;
        let s = if v == 0.0 { 0.0 } else { 200.0 * s / (s + 100.0) };
        (s, v)
    };

    [fixed_round(h, 2), fixed_round(s, 2), fixed_round(v, 2)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Map a hue fraction to one RGB channel.
///
/// The offset `t` is wrapped into unit range before the piecewise ramp is
/// evaluated.
#[inline]
fn hue_to_channel(p: Float, q: Float, t: Float) -> Float {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Convert coordinates for HSL to RGB. This is a one-hop, direct conversion.
/// The resulting channels are rounded to integers.
pub(crate) fn hsl_to_rgb(h: Float, s: Float, l: Float) -> [Float; 3] {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    [
        fixed_round(r * 255.0, 0),
        fixed_round(g * 255.0, 0),
        fixed_round(b * 255.0, 0),
    ]
}

/// Convert coordinates for HSV to RGB. This is a one-hop, direct conversion.
///
/// The hue selects one of six 60° sectors and the channels are assigned from
/// a fixed per-sector lookup over the value and the two intermediate ramps.
/// The resulting channels are rounded to integers.
pub(crate) fn hsv_to_rgb(h: Float, s: Float, v: Float) -> [Float; 3] {
    let h = h / 360.0;
    let s = s / 100.0;
    let v = v / 100.0;

    // Wrap into 0..6, with a full turn landing back on the red sector.
    let h = if h < 1.0 { h * 6.0 } else { 0.0 };
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    [
        fixed_round(r * 255.0, 0),
        fixed_round(g * 255.0, 0),
        fixed_round(b * 255.0, 0),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for RGB to CMYK. This is a one-hop, direct conversion.
///
/// Pure black takes the dedicated `k == 1` branch, which zeroes the other
/// three components instead of dividing by zero. All four components are
/// scaled to percentages and rounded to integers.
pub(crate) fn rgb_to_cmyk(value: &[Float; 3]) -> [Float; 4] {
    let mut c = (255.0 - value[0]) / 255.0;
    let mut m = (255.0 - value[1]) / 255.0;
    let mut y = (255.0 - value[2]) / 255.0;
    let k = c.min(m).min(y);

    if k == 1.0 {
        c = 0.0;
        m = 0.0;
        y = 0.0;
    } else {
        let kk = 1.0 - k;
        c = (c - k) / kk;
        m = (m - k) / kk;
        y = (y - k) / kk;
    }

    [
        fixed_round(c * 100.0, 0),
        fixed_round(m * 100.0, 0),
        fixed_round(y * 100.0, 0),
        fixed_round(k * 100.0, 0),
    ]
}

/// Convert coordinates for CMYK to RGB. This is a one-hop, direct conversion.
/// The resulting channels are rounded to integers.
pub(crate) fn cmyk_to_rgb(c: Float, m: Float, y: Float, k: Float) -> [Float; 3] {
    [
        fixed_round(255.0 * (100.0 - c) * (100.0 - k) / 10000.0, 0),
        fixed_round(255.0 * (100.0 - m) * (100.0 - k) / 10000.0, 0),
        fixed_round(255.0 * (100.0 - y) * (100.0 - k) / 10000.0, 0),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for RGB to HSI. This is a one-hop, direct conversion.
///
/// The hue comes from the inverse cosine of a chroma ratio. A machine-epsilon
/// offset keeps the denominator nonzero; the ratio itself is not clamped to
/// the domain of the inverse cosine, so floating point error on near-achromatic
/// inputs can push it past 1 and yield a not-a-number hue.
pub(crate) fn rgb_to_hsi(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;

    let fz = 0.5 * (r + r - g - b);
    let fm = ((r - g) * (r - g) + (r - b) * (g - b)).sqrt();
    let mut h = (fz / (fm + Float::EPSILON)).acos().to_degrees();
    if b > g {
        h = 360.0 - h;
    }

    let i = (r + g + b) / 3.0;
    let min = r.min(g).min(b);
    let s = 1.0 - min / i;

    [
        fixed_round(h, 2),
        fixed_round(s * 100.0, 2),
        fixed_round(i / 255.0 * 100.0, 2),
    ]
}

/// Convert coordinates for HSI to RGB. This is a one-hop, direct conversion.
///
/// Each 120° hue sector reconstructs two channels trigonometrically and
/// recovers the third from the intensity sum. The resulting channels are
/// rounded to integers.
pub(crate) fn hsi_to_rgb(h: Float, s: Float, i: Float) -> [Float; 3] {
    let s = s / 100.0;
    let i = i / 100.0 * 255.0;

    let mut r = 0.0;
    let mut g = 0.0;
    let mut b = 0.0;
    if h < 120.0 {
        b = i * (1.0 - s);
        r = i * (1.0 + s * h.to_radians().cos() / (60.0 - h).to_radians().cos());
        g = 3.0 * i - r - b;
    } else if h < 240.0 {
        let h = h - 120.0;
        r = i * (1.0 - s);
        g = i * (1.0 + s * h.to_radians().cos() / (60.0 - h).to_radians().cos());
        b = 3.0 * i - r - g;
    } else if h < 360.0 {
        let h = h - 240.0;
        g = i * (1.0 - s);
        b = i * (1.0 + s * h.to_radians().cos() / (60.0 - h).to_radians().cos());
        r = 3.0 * i - g - b;
    }

    [
        fixed_round(r, 0),
        fixed_round(g, 0),
        fixed_round(b, 0),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert one gamma-corrected sRGB coordinate to linear RGB.
///
/// The breakpoint at 0.04045 and the 2.4 exponent are sRGB's; a generic
/// "gamma 2.2" curve is not a substitute.
#[inline]
fn gamma_expand(x: Float) -> Float {
    if x > 0.04045 {
        ((x + 0.055) / 1.055).powf(2.4)
    } else {
        x / 12.92
    }
}

/// Convert one linear RGB coordinate to gamma-corrected sRGB.
#[inline]
fn gamma_compress(x: Float) -> Float {
    if x > 0.0031308 {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    } else {
        x * 12.92
    }
}

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124564, 0.3575761, 0.1804375 ],
    [ 0.2126729, 0.7151522, 0.072175  ],
    [ 0.0193339, 0.119192,  0.9503041 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2404542, -1.5371385, -0.4985314 ],
    [ -0.969266,   1.8760108,  0.041556  ],
    [  0.0556434, -0.2040259,  1.0572252 ],
];

/// Convert coordinates for RGB to XYZ. This is a two-hop conversion through
/// linear sRGB. The result is an intermediate value and is not rounded.
pub(crate) fn rgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear = [
        gamma_expand(value[0] / 255.0),
        gamma_expand(value[1] / 255.0),
        gamma_expand(value[2] / 255.0),
    ];

    multiply(&LINEAR_SRGB_TO_XYZ, &linear)
}

/// Convert coordinates for XYZ to RGB. This is a two-hop conversion through
/// linear sRGB. The resulting channels are rounded to integers.
pub(crate) fn xyz_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = multiply(&XYZ_TO_LINEAR_SRGB, value);

    [
        fixed_round(gamma_compress(r) * 255.0, 0),
        fixed_round(gamma_compress(g) * 255.0, 0),
        fixed_round(gamma_compress(b) * 255.0, 0),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// The D65-derived reference white that Lab lightness is measured against.
const WHITE_POINT: [Float; 3] = [0.950456, 1.0, 1.088754];

/// Apply the CIE forward nonlinearity to one whitepoint-normalized
/// coordinate. The breakpoint constants are (29/6)²/3 and 16/116.
#[inline]
fn lab_forward(t: Float) -> Float {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787037037037035 * t + 0.13793103448275862
    }
}

/// Apply the CIE inverse nonlinearity to one Lab-derived coordinate. The
/// linear segment undoes the forward transform's slope and offset.
#[inline]
fn lab_inverse(t: Float) -> Float {
    if t > 0.20689655172413793 {
        t.powi(3)
    } else {
        (t - 0.13793103448275862) * 0.12841854934601665
    }
}

/// Convert coordinates for XYZ to Lab. This is a one-hop, direct conversion.
/// The result is not rounded; [`rgb_to_lab`] rounds after composing.
pub(crate) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let x = lab_forward(value[0] / WHITE_POINT[0]);
    let y = lab_forward(value[1] / WHITE_POINT[1]);
    let z = lab_forward(value[2] / WHITE_POINT[2]);

    [116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z)]
}

/// Convert coordinates for Lab to XYZ. This is a one-hop, direct conversion.
/// The result is an intermediate value and is not rounded.
pub(crate) fn lab_to_xyz(l: Float, a: Float, b: Float) -> [Float; 3] {
    let y = (l + 16.0) / 116.0;
    let x = a / 500.0 + y;
    let z = y - b / 200.0;

    [
        lab_inverse(x) * WHITE_POINT[0],
        lab_inverse(y) * WHITE_POINT[1],
        lab_inverse(z) * WHITE_POINT[2],
    ]
}

/// Convert coordinates for RGB to Lab. This is a two-hop conversion through
/// XYZ. The resulting coordinates are rounded to 2 decimal digits.
pub(crate) fn rgb_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = xyz_to_lab(&rgb_to_xyz(value));

    [fixed_round(l, 2), fixed_round(a, 2), fixed_round(b, 2)]
}

/// Convert coordinates for Lab to RGB. This is a two-hop conversion through
/// XYZ.
pub(crate) fn lab_to_rgb(l: Float, a: Float, b: Float) -> [Float; 3] {
    xyz_to_rgb(&lab_to_xyz(l, a, b))
}

// ====================================================================================================================

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::Float;

    struct Representations {
        rgb: [Float; 3],
        hsl: [Float; 3],
        hsv: [Float; 3],
        cmyk: [Float; 4],
        hsi: [Float; 3],
        lab: [Float; 3],
    }

    const RED: Representations = Representations {
        // #ff0000
        rgb: [255.0, 0.0, 0.0],
        hsl: [0.0, 100.0, 50.0],
        hsv: [0.0, 100.0, 100.0],
        cmyk: [0.0, 100.0, 100.0, 0.0],
        hsi: [0.0, 100.0, 33.33],
        lab: [53.24, 80.09, 67.2],
    };

    const GOLDENROD: Representations = Representations {
        // #daa520
        rgb: [218.0, 165.0, 32.0],
        hsl: [42.9, 74.4, 49.02],
        hsv: [42.9, 85.32, 85.49],
        cmyk: [0.0, 24.0, 85.0, 15.0],
        hsi: [43.95, 76.87, 54.25],
        lab: [70.82, 8.53, 68.76],
    };

    const TEAL: Representations = Representations {
        // #008080
        rgb: [0.0, 128.0, 128.0],
        hsl: [180.0, 100.0, 25.1],
        hsv: [180.0, 100.0, 50.2],
        cmyk: [100.0, 0.0, 0.0, 50.0],
        hsi: [180.0, 100.0, 33.46],
        lab: [48.25, -28.85, -8.48],
    };

    const SLATE: Representations = Representations {
        // #708090
        rgb: [112.0, 128.0, 144.0],
        hsl: [210.0, 12.6, 50.2],
        hsv: [210.0, 22.22, 56.47],
        cmyk: [22.0, 11.0, 0.0, 44.0],
        hsi: [210.0, 12.5, 50.2],
        lab: [52.84, -2.14, -10.57],
    };

    const WHITE: Representations = Representations {
        // #ffffff
        rgb: [255.0, 255.0, 255.0],
        hsl: [0.0, 0.0, 100.0],
        hsv: [0.0, 0.0, 100.0],
        cmyk: [0.0, 0.0, 0.0, 0.0],
        // The chroma ratio degenerates to 0/epsilon for achromatic colors,
        // so the hue lands on acos(0).
        hsi: [90.0, 0.0, 100.0],
        lab: [100.0, 0.0, 0.0],
    };

    #[test]
    fn test_representations() {
        for color in [&RED, &GOLDENROD, &TEAL, &SLATE, &WHITE] {
            assert_eq!(rgb_to_hsl(&color.rgb), color.hsl);
            assert_eq!(rgb_to_hsv(&color.rgb), color.hsv);
            assert_eq!(rgb_to_cmyk(&color.rgb), color.cmyk);
            assert_eq!(rgb_to_hsi(&color.rgb), color.hsi);
            assert_eq!(rgb_to_lab(&color.rgb), color.lab);

            // Every representation converts back to the very same channels.
            assert_eq!(hsl_to_rgb(color.hsl[0], color.hsl[1], color.hsl[2]), color.rgb);
            assert_eq!(hsv_to_rgb(color.hsv[0], color.hsv[1], color.hsv[2]), color.rgb);
            assert_eq!(hsi_to_rgb(color.hsi[0], color.hsi[1], color.hsi[2]), color.rgb);
            assert_eq!(lab_to_rgb(color.lab[0], color.lab[1], color.lab[2]), color.rgb);

            let [x, y, z] = rgb_to_xyz(&color.rgb);
            assert_eq!(xyz_to_rgb(&[x, y, z]), color.rgb);

            // HSL and HSV describe the same cylinder.
            let [h, s, v] = hsl_to_hsv(color.hsl[0], color.hsl[1], color.hsl[2]);
            assert_eq!(hsv_to_hsl(h, s, v), color.hsl);
        }
    }

    #[test]
    fn test_black() {
        let black = [0.0, 0.0, 0.0];
        assert_eq!(rgb_to_hsl(&black), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsv(&black), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_cmyk(&black), [0.0, 0.0, 0.0, 100.0]);
        assert_eq!(rgb_to_lab(&black), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_xyz(&black), [0.0, 0.0, 0.0]);
        assert_eq!(cmyk_to_rgb(0.0, 0.0, 0.0, 100.0), black);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), black);

        // Zero intensity leaves saturation undefined; the division by the
        // mean intensity yields not-a-number rather than a guess.
        let [h, s, i] = rgb_to_hsi(&black);
        assert_eq!(h, 90.0);
        assert!(s.is_nan());
        assert_eq!(i, 0.0);
    }

    #[test]
    fn test_hue_tie_breaks() {
        // With red == green == max, the red branch wins and the hue sits at
        // yellow; with green == blue == max, the green branch wins.
        assert_eq!(rgb_to_hsl(&[200.0, 200.0, 0.0])[0], 60.0);
        assert_eq!(rgb_to_hsl(&[0.0, 200.0, 200.0])[0], 180.0);
        assert_eq!(rgb_to_hsl(&[200.0, 0.0, 200.0])[0], 300.0);
    }

    #[test]
    fn test_hsl_hsv_cross_conversion() {
        assert_eq!(hsv_to_hsl(120.0, 100.0, 100.0), [120.0, 100.0, 50.0]);
        assert_eq!(hsl_to_hsv(120.0, 100.0, 50.0), [120.0, 100.0, 100.0]);
        assert_eq!(hsv_to_hsl(39.45, 85.32, 85.49), [39.45, 74.4, 49.02]);
        assert_eq!(hsv_to_hsl(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]);
        assert_eq!(hsl_to_hsv(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cmyk_round_trip() {
        // Integer percentages quantize more coarsely than 8-bit channels, so
        // the round trip may drift by up to two per channel.
        for value in test_grid() {
            let [c, m, y, k] = rgb_to_cmyk(&value);
            let result = cmyk_to_rgb(c, m, y, k);
            for index in 0..3 {
                assert!(
                    (result[index] - value[index]).abs() <= 2.0,
                    "cmyk round trip of {:?} produced {:?}",
                    value,
                    result
                );
            }
        }
    }

    #[test]
    fn test_hsl_hsv_round_trips() {
        for value in test_grid() {
            let [h, s, l] = rgb_to_hsl(&value);
            let result = hsl_to_rgb(h, s, l);
            for index in 0..3 {
                assert!(
                    (result[index] - value[index]).abs() <= 1.0,
                    "hsl round trip of {:?} produced {:?}",
                    value,
                    result
                );
            }

            let [h, s, v] = rgb_to_hsv(&value);
            let result = hsv_to_rgb(h, s, v);
            for index in 0..3 {
                assert!(
                    (result[index] - value[index]).abs() <= 1.0,
                    "hsv round trip of {:?} produced {:?}",
                    value,
                    result
                );
            }
        }
    }

    #[test]
    fn test_lab_round_trip() {
        for value in test_grid() {
            let [l, a, b] = rgb_to_lab(&value);
            let result = lab_to_rgb(l, a, b);
            for index in 0..3 {
                assert!(
                    (result[index] - value[index]).abs() <= 1.0,
                    "lab round trip of {:?} produced {:?}",
                    value,
                    result
                );
            }
        }
    }

    /// Iterate over RGB coordinates on a coarse grid that includes both ends
    /// of every channel.
    fn test_grid() -> impl Iterator<Item = [Float; 3]> {
        const STOPS: [Float; 19] = [
            0.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0, 105.0, 120.0, 135.0, 150.0, 165.0, 180.0,
            195.0, 210.0, 225.0, 240.0, 252.0, 255.0,
        ];

        STOPS.iter().flat_map(|&r| {
            STOPS
                .iter()
                .flat_map(move |&g| STOPS.iter().map(move |&b| [r, g, b]))
        })
    }
}
