use crate::Float;

/// Round the number to the given count of decimal digits.
///
/// This function rounds halfway values *away from zero*, i.e., the grade
/// school way: `fixed_round(2.5, 0)` is 3, not the 2 that half-to-even
/// rounding would produce. Every conversion in this crate routes its outputs
/// through this function, so the documented output precisions all share the
/// same tie-break rule. With `digits` at 0, the number is rounded to an
/// integer.
#[must_use = "function returns the rounded number and does not mutate its argument"]
pub fn fixed_round(n: Float, digits: u32) -> Float {
    fixed_round_with(n, digits, true)
}

/// Round or truncate the number to the given count of decimal digits.
///
/// With `half_up` enabled, this function behaves like [`fixed_round`]. With
/// `half_up` disabled, it truncates the scaled number toward zero instead of
/// rounding it.
///
/// The implementation extracts the sign first and scales, offsets, and
/// truncates the absolute value. That order matters: truncation of negative
/// operands differs from truncation of their absolute values, and this
/// function must behave symmetrically around zero.
#[must_use = "function returns the rounded number and does not mutate its argument"]
pub fn fixed_round_with(n: Float, digits: u32, half_up: bool) -> Float {
    let negative = n < 0.0;
    let factor = (10.0 as Float).powi(digits as i32);

    let mut scaled = n.abs() * factor;
    if half_up {
        scaled += 0.5;
    }
    scaled = scaled.trunc();
    if negative {
        scaled = -scaled;
    }

    scaled / factor
}
