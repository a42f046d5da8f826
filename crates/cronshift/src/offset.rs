use chrono::Local;

/// Offset of the host timezone in minutes, in the convention the converter
/// expects: `UTC = local + offset`, positive behind UTC, negative ahead
/// (matches JavaScript's `getTimezoneOffset`).
///
/// This is a snapshot of the offset right now. The converter itself has no
/// notion of "now", so callers crossing a DST transition must re-derive the
/// offset and re-run the conversion.
pub fn local_offset_minutes() -> i32 {
    -(Local::now().offset().local_minus_utc() / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_a_plausible_timezone() {
        // Real offsets are within UTC-12..UTC+14 and whole minutes.
        let offset = local_offset_minutes();
        assert!((-14 * 60..=12 * 60).contains(&offset), "offset {offset}");
    }
}
