use std::fmt;

use crate::field::CronField;

/// A parsed 5-field cron expression: minute, hour, day-of-month, month,
/// day-of-week (0 = Sunday).
///
/// Exists only for the duration of one conversion call; it is parsed from
/// and re-serialized to its string form on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronExpression {
    pub minute: CronField,
    pub hour: CronField,
    pub day_of_month: CronField,
    pub month: CronField,
    pub day_of_week: CronField,
}

impl CronExpression {
    /// Returns `None` when `expr` does not split into exactly five
    /// whitespace-separated tokens. Individual tokens never fail to parse;
    /// unrecognized ones become `CronField::Other`.
    pub fn parse(expr: &str) -> Option<CronExpression> {
        let tokens: Vec<&str> = expr.split_whitespace().collect();
        let [minute, hour, day_of_month, month, day_of_week] = tokens.as_slice() else {
            return None;
        };
        Some(CronExpression {
            minute: CronField::parse(minute, 0, 59),
            hour: CronField::parse(hour, 0, 23),
            day_of_month: CronField::parse(day_of_month, 1, 31),
            month: CronField::parse(month, 1, 12),
            day_of_week: CronField::parse(day_of_week, 0, 6),
        })
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }
}
