//! Wizard-level schedule presets.
//!
//! The dashboard's schedule wizard offers a handful of fixed shapes and
//! only falls back to a raw cron editor when a stored expression matches
//! none of them. Presets are authored and displayed in local time; the
//! timezone conversion happens on the cron string afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::expr::CronExpression;
use crate::field::CronField;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("minute must be 0-59, got {0}")]
    MinuteOutOfRange(u32),
    #[error("hour must be 0-23, got {0}")]
    HourOutOfRange(u32),
    #[error("day of month must be 1-31, got {0}")]
    DayOutOfRange(u32),
    #[error("weekday must be 0-6 with 0 = Sunday, got {0}")]
    WeekdayOutOfRange(u32),
    #[error("hour interval must be 1-23, got {0}")]
    IntervalOutOfRange(u32),
}

/// The schedule shapes the wizard can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchedulePreset {
    Hourly { minute: u32 },
    Daily { hour: u32, minute: u32 },
    Weekly { weekday: u32, hour: u32, minute: u32 },
    Monthly { day: u32, hour: u32, minute: u32 },
    EveryHours { interval: u32, minute: u32 },
}

impl SchedulePreset {
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let minute = match *self {
            SchedulePreset::Hourly { minute } => minute,
            SchedulePreset::Daily { hour, minute } => {
                check_hour(hour)?;
                minute
            }
            SchedulePreset::Weekly {
                weekday,
                hour,
                minute,
            } => {
                if weekday > 6 {
                    return Err(ScheduleError::WeekdayOutOfRange(weekday));
                }
                check_hour(hour)?;
                minute
            }
            SchedulePreset::Monthly { day, hour, minute } => {
                if !(1..=31).contains(&day) {
                    return Err(ScheduleError::DayOutOfRange(day));
                }
                check_hour(hour)?;
                minute
            }
            SchedulePreset::EveryHours { interval, minute } => {
                if !(1..=23).contains(&interval) {
                    return Err(ScheduleError::IntervalOutOfRange(interval));
                }
                minute
            }
        };
        if minute > 59 {
            return Err(ScheduleError::MinuteOutOfRange(minute));
        }
        Ok(())
    }

    /// The 5-field cron expression this preset stands for.
    pub fn to_cron_expr(&self) -> Result<String, ScheduleError> {
        self.validate()?;
        Ok(match *self {
            SchedulePreset::Hourly { minute } => format!("{minute} * * * *"),
            SchedulePreset::Daily { hour, minute } => format!("{minute} {hour} * * *"),
            SchedulePreset::Weekly {
                weekday,
                hour,
                minute,
            } => format!("{minute} {hour} * * {weekday}"),
            SchedulePreset::Monthly { day, hour, minute } => {
                format!("{minute} {hour} {day} * *")
            }
            SchedulePreset::EveryHours { interval, minute } => {
                format!("{minute} */{interval} * * *")
            }
        })
    }

    /// Recognize exactly the expressions [`Self::to_cron_expr`] emits.
    /// Returns `None` for anything else so the UI can fall back to the raw
    /// editor instead of guessing.
    pub fn from_cron_expr(expr: &str) -> Option<SchedulePreset> {
        use CronField::{Number, Step, Wildcard};

        let parsed = CronExpression::parse(expr)?;
        let preset = match (
            parsed.minute,
            parsed.hour,
            parsed.day_of_month,
            parsed.month,
            parsed.day_of_week,
        ) {
            (Number(minute), Wildcard, Wildcard, Wildcard, Wildcard) => {
                SchedulePreset::Hourly { minute }
            }
            (Number(minute), Step(interval), Wildcard, Wildcard, Wildcard) => {
                SchedulePreset::EveryHours { interval, minute }
            }
            (Number(minute), Number(hour), Wildcard, Wildcard, Wildcard) => {
                SchedulePreset::Daily { hour, minute }
            }
            (Number(minute), Number(hour), Wildcard, Wildcard, Number(weekday)) => {
                SchedulePreset::Weekly {
                    weekday,
                    hour,
                    minute,
                }
            }
            (Number(minute), Number(hour), Number(day), Wildcard, Wildcard) => {
                SchedulePreset::Monthly { day, hour, minute }
            }
            _ => return None,
        };
        Some(preset)
    }
}

fn check_hour(hour: u32) -> Result<(), ScheduleError> {
    if hour > 23 {
        return Err(ScheduleError::HourOutOfRange(hour));
    }
    Ok(())
}
