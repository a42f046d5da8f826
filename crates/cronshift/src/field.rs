use std::fmt;

/// One field of a 5-field cron expression.
///
/// Only the shapes the timezone conversion understands get their own
/// variants. Everything else (ranges, mixed lists, names) is carried as
/// `Other` and never interpreted, so unsupported grammar survives a
/// conversion byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CronField {
    Wildcard,
    Number(u32),
    /// Ascending, deduplicated.
    NumberList(Vec<u32>),
    /// `*/n`, every n units starting at 0.
    Step(u32),
    /// Opaque grammar, passed through unchanged.
    Other(String),
}

impl CronField {
    /// Parse one token with the inclusive value range of its position.
    /// Anything that is not a wildcard, an in-range number, an in-range
    /// comma list, or an in-range `*/n` step degrades to `Other`.
    pub fn parse(raw: &str, min: u32, max: u32) -> CronField {
        if raw == "*" {
            return CronField::Wildcard;
        }
        if let Some(step) = raw.strip_prefix("*/") {
            return match step.parse::<u32>() {
                Ok(n) if n >= 1 && n <= max => CronField::Step(n),
                _ => CronField::Other(raw.to_string()),
            };
        }
        if raw.contains(',') {
            let mut values = Vec::new();
            for part in raw.split(',') {
                match part.parse::<u32>() {
                    Ok(n) if n >= min && n <= max => values.push(n),
                    _ => return CronField::Other(raw.to_string()),
                }
            }
            values.sort_unstable();
            values.dedup();
            return CronField::NumberList(values);
        }
        match raw.parse::<u32>() {
            Ok(n) if n >= min && n <= max => CronField::Number(n),
            _ => CronField::Other(raw.to_string()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, CronField::Wildcard)
    }

    pub fn as_number(&self) -> Option<u32> {
        match self {
            CronField::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CronField::Wildcard => f.write_str("*"),
            CronField::Number(n) => write!(f, "{n}"),
            CronField::NumberList(values) => {
                let joined = values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                f.write_str(&joined)
            }
            CronField::Step(n) => write!(f, "*/{n}"),
            CronField::Other(raw) => f.write_str(raw),
        }
    }
}
