/// Maps index `i` into `[0, len)` by mirroring at the edges.
///
/// The edge sample is not repeated: `-1` maps to `1`, `-2` to `2` and `len` to `len - 2`.
/// Indices further away keep bouncing between both edges, so any `i` resolves as long
/// as `len >= 1`.
///
/// Example: `...c b | a b c d | c b...`
///
/// # Arguments
///
/// * `i` - The requested index, possibly out of range.
/// * `len` - The length of the valid range.
///
/// # Returns
///
/// The mirrored index. A zero `len` has no valid index and returns 0.
#[inline]
pub fn mirror_index(i: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let period = (2 * len - 2) as isize;
    let r = i.rem_euclid(period) as usize;
    if r < len {
        r
    } else {
        2 * len - 2 - r
    }
}
