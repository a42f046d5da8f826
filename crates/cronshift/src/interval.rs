//! Fixed-interval hour patterns.
//!
//! An hour field meaning "every n hours" can be written as a step (`*/8`)
//! or as the explicit list of hours it fires at (`0,8,16`). The converter
//! expands steps before shifting and tries to collapse shifted lists back,
//! so the interval notion survives a timezone round trip.

/// The hours `*/step` fires at: `{0, step, 2*step, ...}` within `[0, 23]`.
pub fn build_hour_set(step: u32) -> Vec<u32> {
    if step == 0 {
        return Vec::new();
    }
    (0..24).step_by(step as usize).collect()
}

/// Detect whether `sorted_hours` is exactly the hour set of some `*/d`.
///
/// Requires the first element to be 0, every consecutive gap to equal the
/// same `d`, and the set to cover `[0, 24)` at step `d`. Lists anchored
/// anywhere other than hour 0 are deliberately treated as "no pattern";
/// the caller falls back to single-hour handling for those. Generalizing
/// this would change which expressions round-trip.
pub fn detect_step(sorted_hours: &[u32]) -> Option<u32> {
    let (&first, rest) = sorted_hours.split_first()?;
    if first != 0 || rest.is_empty() {
        return None;
    }
    let step = rest[0];
    if step == 0 {
        return None;
    }
    for pair in sorted_hours.windows(2) {
        if pair[1] - pair[0] != step {
            return None;
        }
    }
    if sorted_hours.len() as u32 * step != 24 {
        return None;
    }
    Some(step)
}
