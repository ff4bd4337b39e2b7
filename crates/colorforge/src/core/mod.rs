mod conversion;
mod math;
mod string;

// conversion
pub(crate) use conversion::{
    cmyk_to_rgb, hsi_to_rgb, hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, lab_to_rgb,
    lab_to_xyz, rgb_to_cmyk, rgb_to_hsi, rgb_to_hsl, rgb_to_hsv, rgb_to_lab, rgb_to_xyz,
    xyz_to_lab, xyz_to_rgb,
};

// math
pub use math::{fixed_round, fixed_round_with};

// string
pub(crate) use string::{format_hex, parse_hex};
