//! Bidirectional timezone normalization for 5-field cron expressions.
//!
//! Users author schedules in local wall-clock time; the backend stores and
//! executes the canonical UTC form. Both directions are pure functions of
//! the expression string and a fixed offset in minutes following the
//! `getTimezoneOffset` convention: `UTC = local + offset`, positive for
//! timezones behind UTC, negative for timezones ahead.
//!
//! Anything outside the narrow set of transformable shapes is returned
//! unchanged rather than rejected: an expression this module does not
//! understand is still a valid schedule the backend can run in whichever
//! timezone it was already written, and corrupting it would be worse than
//! not converting it.

use tracing::debug;

use crate::expr::CronExpression;
use crate::field::CronField;
use crate::interval;

const MINUTES_PER_DAY: i64 = 1440;

/// A wall-clock time shifted by a fixed offset, plus whether the shift
/// crossed midnight.
#[derive(Debug, Clone, Copy)]
struct ShiftedTime {
    minute: u32,
    hour: u32,
    /// -1, 0 or +1: the unnormalized shift landed on the previous day, the
    /// same day, or the next day.
    day_adjustment: i64,
}

fn shift(hour: u32, minute: u32, offset_minutes: i32) -> ShiftedTime {
    let total = i64::from(hour) * 60 + i64::from(minute) + i64::from(offset_minutes);
    let normalized = ((total % MINUTES_PER_DAY) + MINUTES_PER_DAY) % MINUTES_PER_DAY;
    let day_adjustment = if total < 0 {
        -1
    } else if total >= MINUTES_PER_DAY {
        1
    } else {
        0
    };
    ShiftedTime {
        minute: (normalized % 60) as u32,
        hour: (normalized / 60) as u32,
        day_adjustment,
    }
}

/// Carry a midnight crossing into the numeric day fields. Day-of-week wraps
/// mod 7 (Saturday + 1 = Sunday). Day-of-month is clamped to [1, 31]; this
/// ignores actual month lengths and month rollover, a known approximation
/// kept for compatibility with stored schedules. Wildcards are untouched.
fn adjust_days(expr: &mut CronExpression, day_adjustment: i64) {
    if day_adjustment == 0 {
        return;
    }
    if let CronField::Number(day) = expr.day_of_month {
        let adjusted = (i64::from(day) + day_adjustment).clamp(1, 31);
        expr.day_of_month = CronField::Number(adjusted as u32);
    }
    if let CronField::Number(weekday) = expr.day_of_week {
        let adjusted = (i64::from(weekday) + day_adjustment).rem_euclid(7);
        expr.day_of_week = CronField::Number(adjusted as u32);
    }
}

/// The day and date fields a shift can account for: a plain number gets the
/// day adjustment, a wildcard needs none. A list or opaque grammar on any of
/// them makes the whole expression untransformable.
fn date_fields_shiftable(expr: &CronExpression) -> bool {
    [&expr.day_of_month, &expr.month, &expr.day_of_week]
        .into_iter()
        .all(|f| matches!(f, CronField::Wildcard | CronField::Number(_)))
}

fn date_fields_wildcard(expr: &CronExpression) -> bool {
    expr.day_of_month.is_wildcard() && expr.month.is_wildcard() && expr.day_of_week.is_wildcard()
}

fn apply_linear(expr: &mut CronExpression, hour: u32, minute: u32, offset_minutes: i32) {
    let shifted = shift(hour, minute, offset_minutes);
    expr.minute = CronField::Number(shifted.minute);
    expr.hour = CronField::Number(shifted.hour);
    adjust_days(expr, shifted.day_adjustment);
}

/// Convert an expression authored in local wall-clock time into the
/// equivalent UTC expression the backend stores and executes.
///
/// Handles a numeric minute with either a numeric hour or an `*/n` hour
/// step; the step is expanded into the explicit list of UTC hours so the
/// shifted schedule stays expressible. Everything else passes through
/// unchanged.
pub fn to_canonical(expr: &str, offset_minutes: i32) -> String {
    let Some(mut parsed) = CronExpression::parse(expr) else {
        debug!(expr, "not a 5-field cron expression, passing through");
        return expr.to_string();
    };
    let (Some(minute), true) = (parsed.minute.as_number(), date_fields_shiftable(&parsed)) else {
        debug!(expr, "unsupported shape for canonical conversion, passing through");
        return expr.to_string();
    };

    match parsed.hour {
        CronField::Number(hour) => {
            apply_linear(&mut parsed, hour, minute, offset_minutes);
            parsed.to_string()
        }
        CronField::Step(step) => {
            let local_hours = interval::build_hour_set(step);
            let Some(&first) = local_hours.first() else {
                return expr.to_string();
            };
            let mut utc_hours: Vec<u32> = local_hours
                .iter()
                .map(|&h| shift(h, minute, offset_minutes).hour)
                .collect();
            utc_hours.sort_unstable();
            utc_hours.dedup();

            // The shift is uniform, so every local hour lands on the same
            // UTC minute; the day adjustment is taken from the first one.
            let shifted = shift(first, minute, offset_minutes);
            parsed.minute = CronField::Number(shifted.minute);
            parsed.hour = CronField::NumberList(utc_hours);
            adjust_days(&mut parsed, shifted.day_adjustment);
            parsed.to_string()
        }
        _ => {
            debug!(expr, "unsupported shape for canonical conversion, passing through");
            expr.to_string()
        }
    }
}

/// Inverse of [`to_canonical`]: convert a stored UTC expression back into
/// local wall-clock time for an edit form.
///
/// A multi-hour list on an otherwise-bare expression is first tested for a
/// fixed-interval pattern and collapsed back to `*/d` when one is found;
/// an irregular list falls back to converting just its first hour. Plain
/// numeric hours mirror the canonical direction with the offset reversed.
pub fn to_local(expr: &str, offset_minutes: i32) -> String {
    let Some(mut parsed) = CronExpression::parse(expr) else {
        debug!(expr, "not a 5-field cron expression, passing through");
        return expr.to_string();
    };
    let Some(minute) = parsed.minute.as_number() else {
        debug!(expr, "unsupported shape for local conversion, passing through");
        return expr.to_string();
    };

    match parsed.hour.clone() {
        CronField::Number(hour) if date_fields_shiftable(&parsed) => {
            apply_linear(&mut parsed, hour, minute, -offset_minutes);
            parsed.to_string()
        }
        CronField::NumberList(utc_hours)
            if utc_hours.len() >= 2 && date_fields_wildcard(&parsed) =>
        {
            let mut local_hours: Vec<u32> = utc_hours
                .iter()
                .map(|&h| shift(h, minute, -offset_minutes).hour)
                .collect();
            local_hours.sort_unstable();

            if let Some(step) = interval::detect_step(&local_hours) {
                let first = shift(utc_hours[0], minute, -offset_minutes);
                parsed.minute = CronField::Number(first.minute);
                parsed.hour = CronField::Step(step);
                return parsed.to_string();
            }

            // Not an interval pattern; best effort on the first listed hour.
            apply_linear(&mut parsed, utc_hours[0], minute, -offset_minutes);
            parsed.to_string()
        }
        _ => {
            debug!(expr, "unsupported shape for local conversion, passing through");
            expr.to_string()
        }
    }
}
