/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Mix two 8-bit values with a 256 denominator
///
/// `(a * (255 - amount_of_b) + b * amount_of_b) / 256`, truncated. The result
/// is slightly darker than an exact interpolation (`mix8(255, 0, 0) == 254`);
/// comet trails rely on this exact rounding.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn mix8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let amount_of_a = 255 - amount_of_b as u16;
    ((a as u16 * amount_of_a + b as u16 * amount_of_b as u16) >> 8) as u8
}

/// Clamped linear ramp (0-255) of `position` over `span`
///
/// Returns 0 at the origin and saturates at 255 once `position >= span`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn ramp8(position: usize, span: usize) -> u8 {
    if span == 0 || position >= span {
        return 255;
    }
    ((position * 255) / span) as u8
}
