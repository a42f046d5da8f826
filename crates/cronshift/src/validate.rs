//! Syntax validation and next-run previews, via the `cron` crate.
//!
//! The dashboard stores plain 5-field expressions; the `cron` crate wants
//! the 7-field form and numbers its weekdays 1-7 with Sunday first, so both
//! are bridged here before parsing.

use std::str::FromStr;

use anyhow::Context;
use chrono::{DateTime, Utc};
use cron::Schedule;

/// Expand a 5-field expression (min hour dom month dow) into the 7-field
/// form the `cron` crate parses (sec min hour dom month dow year).
pub fn normalize_cron_expr(expr: &str) -> anyhow::Result<String> {
    let parts: Vec<&str> = expr.split_whitespace().collect();
    let [minute, hour, day_of_month, month, day_of_week] = parts.as_slice() else {
        anyhow::bail!("cron expr must have 5 fields, got {}", parts.len());
    };
    let day_of_week = map_day_of_week(day_of_week);
    Ok(format!(
        "0 {minute} {hour} {day_of_month} {month} {day_of_week} *"
    ))
}

// Our weekdays are 0-6 with 0 = Sunday; the cron crate's are 1-7 with
// 1 = Sunday. Non-numeric grammar is left for the parser to judge.
fn map_day_of_week(token: &str) -> String {
    match token.parse::<u32>() {
        Ok(n) if n <= 6 => (n + 1).to_string(),
        _ => token.to_string(),
    }
}

/// Check that a 5-field expression is something the backend can execute.
pub fn validate_cron_expr(expr: &str) -> anyhow::Result<()> {
    let normalized = normalize_cron_expr(expr)?;
    Schedule::from_str(&normalized).context("parse cron expression")?;
    Ok(())
}

/// The next `count` fire times of a canonical (UTC) expression, for the
/// dashboard's "next run" column.
pub fn upcoming(expr: &str, count: usize) -> anyhow::Result<Vec<DateTime<Utc>>> {
    let normalized = normalize_cron_expr(expr)?;
    let schedule = Schedule::from_str(&normalized).context("parse cron expression")?;
    Ok(schedule.upcoming(Utc).take(count).collect())
}
