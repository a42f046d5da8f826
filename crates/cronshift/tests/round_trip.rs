//! End-to-end properties of the conversion, driven through the public API
//! the dashboard uses: preset -> cron -> canonical on save, canonical ->
//! local -> preset on load.

use cronshift::{to_canonical, to_local, validate_cron_expr, SchedulePreset};

const OFFSETS: &[i32] = &[0, 60, -60, 300, -330, 480, 720, -840, 345];

#[test]
fn numeric_expressions_round_trip_at_any_offset() {
    let exprs = [
        "0 0 * * *",
        "59 23 * * *",
        "30 2 * * *",
        "0 12 15 * *",
        "45 18 * * 5",
        "5 7 10 6 *",
    ];
    for expr in exprs {
        for &offset in OFFSETS {
            let canonical = to_canonical(expr, offset);
            assert_eq!(
                to_local(&canonical, offset),
                expr,
                "{expr:?} at offset {offset}"
            );
        }
    }
}

#[test]
fn interval_presets_survive_the_full_save_load_cycle() {
    for interval in [1, 2, 3, 4, 6, 8, 12] {
        let preset = SchedulePreset::EveryHours {
            interval,
            minute: 0,
        };
        let local_expr = preset.to_cron_expr().unwrap();
        for &offset in OFFSETS {
            let canonical = to_canonical(&local_expr, offset);
            let displayed = to_local(&canonical, offset);
            assert_eq!(displayed, local_expr, "*/{interval} at offset {offset}");
            assert_eq!(SchedulePreset::from_cron_expr(&displayed), Some(preset));
        }
    }
}

#[test]
fn canonical_forms_are_executable() {
    let exprs = [
        "0 23 * * 6",
        "30 2 * * *",
        "0 */8 * * *",
        "0 4 15 * *",
        "15 * * * *",
    ];
    for expr in exprs {
        for &offset in OFFSETS {
            let canonical = to_canonical(expr, offset);
            assert!(
                validate_cron_expr(&canonical).is_ok(),
                "{expr:?} at offset {offset} -> {canonical:?}"
            );
        }
    }
}

#[test]
fn documented_conversions() {
    // The cases the dashboard's behavior is specified against.
    assert_eq!(to_canonical("0 23 * * *", 300), "0 4 * * *");
    assert_eq!(to_canonical("0 23 * * 6", 300), "0 4 * * 0");
    assert_eq!(to_canonical("0 */8 * * *", -330), "30 2,10,18 * * *");
    assert_eq!(to_local("30 2,10,18 * * *", -330), "0 */8 * * *");
}

#[test]
fn unsupported_shapes_are_invariant_in_both_directions() {
    let exprs = [
        "0 9-17 * * 1-5",
        "*/10 * * * *",
        "0,30 6 * * *",
        "0 9 1,15 * *",
        "30 2 * L *",
        "0 9 * *",
        "garbage",
    ];
    for expr in exprs {
        for &offset in OFFSETS {
            assert_eq!(to_canonical(expr, offset), expr);
            assert_eq!(to_local(expr, offset), expr);
            // Applying it again changes nothing either.
            assert_eq!(to_canonical(&to_canonical(expr, offset), offset), expr);
        }
    }
}
