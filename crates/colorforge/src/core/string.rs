use crate::error::ColorFormatError;
use crate::Float;

/// Parse the string as a hexadecimal color.
///
/// The string may start with a `#`. Three digits denote a shorthand color and
/// expand by duplicating each digit's nibble, so `#abc` is `#aabbcc`.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    fn parse_coordinate(digits: Option<&str>) -> Result<u8, ColorFormatError> {
        let digits = digits.ok_or(ColorFormatError::UnexpectedCharacters)?;
        u8::from_str_radix(digits, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let digits = s.strip_prefix('#').unwrap_or(s);
    match digits.len() {
        3 => Ok([
            17 * parse_coordinate(digits.get(0..1))?,
            17 * parse_coordinate(digits.get(1..2))?,
            17 * parse_coordinate(digits.get(2..3))?,
        ]),
        6 => Ok([
            parse_coordinate(digits.get(0..2))?,
            parse_coordinate(digits.get(2..4))?,
            parse_coordinate(digits.get(4..6))?,
        ]),
        _ => Err(ColorFormatError::UnexpectedCharacters),
    }
}

/// Format the RGB channels as a six-digit, lowercase hexadecimal color,
/// with or without the leading `#`.
///
/// Packing the channels underneath an extra high byte keeps leading zeros in
/// the formatted number; the helper then drops the first digit again.
pub(crate) fn format_hex(value: &[Float; 3], hash: bool) -> String {
    let packed = (1_u32 << 24)
        + ((value[0] as u32) << 16)
        + ((value[1] as u32) << 8)
        + value[2] as u32;

    let digits = format!("{packed:x}");
    if hash {
        format!("#{}", &digits[1..])
    } else {
        digits[1..].to_string()
    }
}
