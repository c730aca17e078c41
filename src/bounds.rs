/// Get the center of the array
///
/// Odd lengths put the extra element into the first half.
pub const fn center_of<T>(arr: &[T]) -> usize {
    let count = arr.len();
    let mut center_len = count / 2;
    if !count.is_multiple_of(2) {
        center_len += 1;
    }

    if center_len <= count {
        return center_len;
    }
    count
}

/// Length of one segment when `count` LEDs are split into `segments` equal parts
///
/// Returns `None` if the split is not exact.
pub const fn segment_len(count: usize, segments: usize) -> Option<usize> {
    if segments == 0 || count == 0 || !count.is_multiple_of(segments) {
        return None;
    }
    Some(count / segments)
}
