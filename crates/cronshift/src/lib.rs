//! Timezone normalization for 5-field cron schedules.
//!
//! Users of the backup dashboard author schedules in their local wall-clock
//! time; the backend scheduler stores and executes only the canonical UTC
//! form. [`to_canonical`] and [`to_local`] convert between the two for a
//! fixed offset in minutes (`UTC = local + offset`, the `getTimezoneOffset`
//! convention), including the expand/collapse of "every n hours" interval
//! patterns whose explicit hour lists would otherwise scatter under a shift.
//!
//! Both conversions are pure and infallible: any expression outside the
//! transformable shapes, including anything that is not 5 fields of the
//! supported grammar, is returned unchanged rather than rejected.

mod convert;
mod expr;
mod field;
mod interval;
mod offset;
mod schedule;
mod validate;

pub use convert::{to_canonical, to_local};
pub use expr::CronExpression;
pub use field::CronField;
pub use interval::{build_hour_set, detect_step};
pub use offset::local_offset_minutes;
pub use schedule::{ScheduleError, SchedulePreset};
pub use validate::{normalize_cron_expr, upcoming, validate_cron_expr};
